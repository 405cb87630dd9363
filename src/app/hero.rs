use leptos::prelude::*;

use crate::content::{SITE_TAGLINE, SOCIAL_LINKS};
use crate::motion::{
    self, HERO_PARTICLE_COUNT, HERO_STAGGER_BASE_MS, HERO_STAGGER_STEP_MS,
};

use super::reveal::Reveal;

#[component]
pub fn Hero() -> impl IntoView {
    let item_delay =
        |i| motion::stagger_delay_ms(HERO_STAGGER_BASE_MS, HERO_STAGGER_STEP_MS, i);

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center relative overflow-hidden"
        >
            // Gradient backdrop
            <div class="absolute inset-0 bg-gradient-to-br from-indigo-900 via-purple-900 to-pink-800"></div>
            <div class="absolute inset-0 bg-gradient-to-tr from-blue-600/20 via-transparent to-cyan-400/20"></div>

            // Slow-moving decorative blobs
            <div class="glow-pulse absolute top-20 left-20 w-72 h-72 bg-blue-500/10 rounded-full blur-3xl"></div>
            <div class="glow-pulse-alt absolute bottom-20 right-20 w-96 h-96 bg-purple-500/10 rounded-full blur-3xl"></div>
            <div class="spin-slow absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[800px] bg-gradient-to-r from-cyan-500/5 to-blue-500/5 rounded-full blur-3xl"></div>

            // Floating particles
            {motion::particles(HERO_PARTICLE_COUNT)
                .into_iter()
                .map(|p| {
                    view! {
                        <div
                            class="particle absolute w-2 h-2 bg-white/20 rounded-full"
                            style:left=format!("{:.2}%", p.left_pct)
                            style:top=format!("{:.2}%", p.top_pct)
                            style:animation-duration=format!("{:.2}s", p.duration_s)
                            style:animation-delay=format!("{:.2}s", p.delay_s)
                        ></div>
                    }
                })
                .collect_view()}

            <div class="relative z-10 text-center text-white max-w-4xl mx-auto px-4 sm:px-6 lg:px-8">
                <Reveal delay_ms=item_delay(0)>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 leading-tight">
                        "Rishabh " <span class="gradient-text">"Gupta"</span>
                    </h1>
                </Reveal>
                <Reveal delay_ms=item_delay(1)>
                    <p class="text-xl md:text-2xl mb-8 text-gray-300 max-w-2xl mx-auto leading-relaxed">
                        {SITE_TAGLINE}
                    </p>
                </Reveal>
                <Reveal
                    delay_ms=item_delay(2)
                    class="flex flex-col sm:flex-row justify-center gap-4 mb-12"
                >
                    <a
                        href="#contact"
                        class="bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 text-white px-8 py-3 rounded-full font-medium transition-all duration-300 shadow-lg hover:shadow-xl hover:scale-105 hover:-translate-y-0.5 active:scale-95"
                    >
                        "Get In Touch"
                    </a>
                    <a
                        href="#projects"
                        class="border-2 border-white/30 hover:border-white hover:bg-white/10 backdrop-blur-sm text-white px-8 py-3 rounded-full font-medium transition-all duration-300 hover:scale-105 hover:-translate-y-0.5 active:scale-95"
                    >
                        "View Projects"
                    </a>
                </Reveal>
                <Reveal delay_ms=item_delay(3) class="flex justify-center space-x-6">
                    {SOCIAL_LINKS
                        .iter()
                        .filter(|link| !link.href.starts_with("mailto:"))
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.label.clone()
                                    class="text-gray-300 hover:text-white transition-all duration-300 p-3 rounded-full bg-white/5 backdrop-blur-sm border border-white/10 text-2xl hover:scale-110 hover:-translate-y-0.5 active:scale-90"
                                >
                                    <i class=link.icon.clone()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>

            <div class="float-slow absolute bottom-8 left-1/2 -translate-x-1/2">
                <div class="p-2 rounded-full bg-white/10 backdrop-blur-sm border border-white/20 hover:scale-110 transition-transform duration-200"></div>
            </div>
        </section>
    }
}
