//! Animation parameters shared by the page sections.
//!
//! The transitions themselves are plain CSS; this module only computes the
//! declarative inputs: staggered entrance delays and the per-particle
//! parameters for the hero background.

/// Default per-child delay increment for staggered entrances.
pub const STAGGER_STEP_MS: u32 = 100;

/// Hero entrance uses a slower cadence with an initial hold.
pub const HERO_STAGGER_BASE_MS: u32 = 300;
pub const HERO_STAGGER_STEP_MS: u32 = 200;

/// Number of decorative particles floating in the hero background.
pub const HERO_PARTICLE_COUNT: usize = 6;

/// Delay before the entrance transition of the `index`-th sibling starts.
pub fn stagger_delay_ms(base_ms: u32, step_ms: u32, index: usize) -> u32 {
    base_ms + step_ms * index as u32
}

/// Parameters for one decorative hero particle. Positions are percentages of
/// the hero section, timings are seconds fed to the CSS keyframe loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

// Particle parameters are pseudo-random but seeded with a fixed constant:
// the server-rendered markup and the hydrated client markup must agree, so
// the generator cannot draw from wall-clock or browser entropy.
const PARTICLE_SEED: u64 = 0x5eed_cafe_f10a_7ed5;

/// Generate `count` particles with pseudo-random positions and loop timings.
/// Deterministic: every call returns the same sequence.
pub fn particles(count: usize) -> Vec<Particle> {
    let mut state = PARTICLE_SEED;
    (0..count)
        .map(|_| Particle {
            left_pct: next_unit(&mut state) * 100.0,
            top_pct: next_unit(&mut state) * 100.0,
            duration_s: 3.0 + next_unit(&mut state) * 2.0,
            delay_s: next_unit(&mut state) * 2.0,
        })
        .collect()
}

// SplitMix64 step, uniform in [0, 1).
fn next_unit(state: &mut u64) -> f64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z >> 11) as f64 / (1u64 << 53) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_fixed_increment() {
        assert_eq!(stagger_delay_ms(0, STAGGER_STEP_MS, 0), 0);
        assert_eq!(stagger_delay_ms(0, STAGGER_STEP_MS, 1), 100);
        assert_eq!(stagger_delay_ms(0, STAGGER_STEP_MS, 4), 400);
        assert_eq!(
            stagger_delay_ms(HERO_STAGGER_BASE_MS, HERO_STAGGER_STEP_MS, 2),
            700
        );
    }

    #[test]
    fn particles_are_deterministic() {
        assert_eq!(particles(HERO_PARTICLE_COUNT), particles(HERO_PARTICLE_COUNT));
    }

    #[test]
    fn particle_parameters_within_expected_ranges() {
        let all = particles(HERO_PARTICLE_COUNT);
        assert_eq!(all.len(), HERO_PARTICLE_COUNT);
        for p in &all {
            assert!((0.0..100.0).contains(&p.left_pct));
            assert!((0.0..100.0).contains(&p.top_pct));
            assert!((3.0..5.0).contains(&p.duration_s));
            assert!((0.0..2.0).contains(&p.delay_s));
        }
    }

    #[test]
    fn particles_do_not_share_positions() {
        let all = particles(HERO_PARTICLE_COUNT);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(a.left_pct != b.left_pct || a.top_pct != b.top_pct);
            }
        }
    }
}
