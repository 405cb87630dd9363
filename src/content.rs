use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

pub const SITE_AUTHOR: &str = "Rishabh Gupta";
pub const SITE_TAGLINE: &str =
    "Frontend-heavy Fullstack Developer & UI/UX Enthusiast crafting beautiful digital experiences";

pub const GITHUB_URL: &str = "https://github.com/ribsh689";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/rishabh-gupta-4b7aa7118/";
pub const EMAIL: &str = "guptarishabh689@gmail.com";
pub const RESUME_PATH: &str = "/resume.pdf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub skills: Vec<String>,
}

/// A single portfolio project. The optional fields are only populated when
/// the detail modal should show richer content; absent fields render as
/// omitted sections. An empty `features` list means the section is omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    pub live_url: String,
    pub github_url: String,
    pub featured: bool,
    pub full_description: Option<String>,
    pub features: Vec<String>,
    pub duration: Option<String>,
    pub team: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickLink {
    pub label: String,
    pub href: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub static EXPERIENCES: LazyLock<Vec<ExperienceEntry>> = LazyLock::new(|| {
    vec![
        ExperienceEntry {
            title: "Senior Software Engineer".to_string(),
            company: "Persistent Systems Ltd.".to_string(),
            location: "Pune, India".to_string(),
            period: "2024 - Present".to_string(),
            description: "Engineered a modern, scalable React page with a focus on performance \
                and UI enhancement. Designed and built modular UI components using React and \
                styled-components for a clean, consistent interface. Integrated Ruby-based REST \
                APIs for dynamic data handling and optimized rendering performance using hooks, \
                lazy loading, and code-splitting techniques."
                .to_string(),
            technologies: strings(&["React", "TypeScript", "HTML", "CSS", "REST APIs", "Ruby"]),
            current: true,
        },
        ExperienceEntry {
            title: "Software Engineer".to_string(),
            company: "Persistent Systems Ltd.".to_string(),
            location: "Pune, India".to_string(),
            period: "2022 - 2024".to_string(),
            description: "Resolved critical frontend issues by fixing customer-reported bugs \
                related to performance, accessibility, and WCAG compliance. Improved page load \
                speed and responsiveness through code optimizations, and ensured accessibility \
                standards by addressing keyboard navigation, semantic HTML, and ARIA roles, \
                enhancing user experience for all users, including those with disabilities."
                .to_string(),
            technologies: strings(&["React", "TypeScript", "HTML", "CSS", "WCAG", "Accessibility"]),
            current: false,
        },
    ]
});

pub static SKILL_CATEGORIES: LazyLock<Vec<SkillCategory>> = LazyLock::new(|| {
    vec![
        SkillCategory {
            title: "Frontend".to_string(),
            skills: strings(&[
                "React",
                "TypeScript",
                "Styled-Components",
                "HTML",
                "Tailwind CSS",
            ]),
        },
        SkillCategory {
            title: "Backend".to_string(),
            skills: strings(&["Ruby", "Rails", "Rspec"]),
        },
        SkillCategory {
            title: "Tools & Others".to_string(),
            skills: strings(&["Git", "Jest", "Jenkins", "Figma", "CI/CD"]),
        },
    ]
});

// The grid and modal handle any number of projects, including none.
pub static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| {
    vec![Project {
        title: "Portfolio Website".to_string(),
        description: "A modern, responsive portfolio website built with Rust and Leptos, \
            featuring smooth animations and optimal performance."
            .to_string(),
        full_description: Some(
            "A carefully crafted portfolio website that showcases modern web development \
            techniques. Built with performance and accessibility in mind, this site features \
            smooth animations, optimized images, and a perfect Lighthouse score. The design \
            emphasizes clean aesthetics and intuitive navigation."
                .to_string(),
        ),
        image: "/logo.png".to_string(),
        technologies: strings(&["Rust", "Leptos", "Tailwind CSS"]),
        features: strings(&[
            "Responsive design",
            "Smooth animations",
            "Optimized performance",
            "SEO friendly",
            "Accessibility compliant",
            "Contact form integration",
            "Blog functionality",
        ]),
        duration: Some("1 month".to_string()),
        team: Some("Solo project".to_string()),
        status: Some("Live".to_string()),
        live_url: "https://portfolio-rg-chi.vercel.app".to_string(),
        github_url: "https://github.com/ribsh689/portfolio-rg".to_string(),
        featured: false,
    }]
});

pub static SOCIAL_LINKS: LazyLock<Vec<SocialLink>> = LazyLock::new(|| {
    vec![
        SocialLink {
            label: "GitHub".to_string(),
            href: GITHUB_URL.to_string(),
            icon: "devicon-github-plain".to_string(),
        },
        SocialLink {
            label: "LinkedIn".to_string(),
            href: LINKEDIN_URL.to_string(),
            icon: "devicon-linkedin-plain".to_string(),
        },
        SocialLink {
            label: "Email".to_string(),
            href: format!("mailto:{EMAIL}"),
            icon: "extra-email".to_string(),
        },
    ]
});

pub static QUICK_LINKS: LazyLock<Vec<QuickLink>> = LazyLock::new(|| {
    [
        ("Home", "#home"),
        ("About", "#about"),
        ("Experience", "#experience"),
        ("Skills", "#skills"),
        ("Projects", "#projects"),
        ("Contact", "#contact"),
    ]
    .into_iter()
    .map(|(label, href)| QuickLink {
        label: label.to_string(),
        href: href.to_string(),
    })
    .collect()
});

/// Which side of the timeline an experience entry sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSide {
    Left,
    Right,
}

pub fn timeline_side(index: usize) -> TimelineSide {
    if index % 2 == 0 {
        TimelineSide::Left
    } else {
        TimelineSide::Right
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {SITE_AUTHOR}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn experiences_in_declared_order() {
        let titles = EXPERIENCES
            .iter()
            .map(|e| (e.title.as_str(), e.period.as_str(), e.current))
            .collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                ("Senior Software Engineer", "2024 - Present", true),
                ("Software Engineer", "2022 - 2024", false),
            ]
        );
    }

    #[test]
    fn timeline_alternates_per_index() {
        assert_eq!(timeline_side(0), TimelineSide::Left);
        assert_eq!(timeline_side(1), TimelineSide::Right);
        assert_eq!(timeline_side(2), TimelineSide::Left);
        assert_eq!(timeline_side(3), TimelineSide::Right);
    }

    #[test]
    fn three_skill_categories_in_order() {
        let titles = SKILL_CATEGORIES
            .iter()
            .map(|c| c.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Frontend", "Backend", "Tools & Others"]);
    }

    #[test]
    fn skill_lists_complete_and_without_duplicates() {
        let frontend = &SKILL_CATEGORIES[0].skills;
        assert_eq!(
            frontend,
            &strings(&[
                "React",
                "TypeScript",
                "Styled-Components",
                "HTML",
                "Tailwind CSS"
            ])
        );
        assert_eq!(SKILL_CATEGORIES[1].skills, strings(&["Ruby", "Rails", "Rspec"]));
        assert_eq!(
            SKILL_CATEGORIES[2].skills,
            strings(&["Git", "Jest", "Jenkins", "Figma", "CI/CD"])
        );
        for category in SKILL_CATEGORIES.iter() {
            let unique: HashSet<_> = category.skills.iter().collect();
            assert_eq!(unique.len(), category.skills.len(), "{}", category.title);
        }
    }

    #[test]
    fn project_detail_fields_present_for_modal() {
        let project = &PROJECTS[0];
        assert_eq!(project.title, "Portfolio Website");
        assert!(project.full_description.is_some());
        assert!(!project.features.is_empty());
        assert_eq!(project.duration.as_deref(), Some("1 month"));
        assert_eq!(project.team.as_deref(), Some("Solo project"));
        assert_eq!(project.status.as_deref(), Some("Live"));
        assert!(!project.featured);
    }

    #[test]
    fn quick_links_cover_every_section_anchor() {
        let hrefs = QUICK_LINKS
            .iter()
            .map(|l| l.href.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            hrefs,
            vec!["#home", "#about", "#experience", "#skills", "#projects", "#contact"]
        );
    }

    #[test]
    fn social_links_have_expected_schemes() {
        assert!(SOCIAL_LINKS[0].href.starts_with("https://github.com/"));
        assert!(SOCIAL_LINKS[1].href.starts_with("https://www.linkedin.com/"));
        assert!(SOCIAL_LINKS[2].href.starts_with("mailto:"));
    }

    #[test]
    fn copyright_line_includes_year_and_author() {
        assert_eq!(
            copyright_line(2024),
            "© 2024 Rishabh Gupta. All rights reserved."
        );
    }
}
