use leptos::prelude::*;

use super::reveal::Reveal;

/// Centered section title with the underline bar used across the page.
#[component]
pub fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">{title}</h2>
            <div class="w-24 h-1 bg-blue-600 mx-auto rounded-full"></div>
        </Reveal>
    }
}

/// Technology pill. `accent` switches to the blue variant used in the
/// experience timeline and the project modal.
#[component]
pub fn TechTag(label: String, #[prop(optional)] accent: bool) -> impl IntoView {
    let class = if accent {
        "px-3 py-1 bg-blue-100 text-blue-800 text-sm rounded-full font-medium"
    } else {
        "px-3 py-1 bg-gray-100 text-gray-700 text-sm rounded-full hover:scale-105 transition-transform duration-200"
    };
    view! { <span class=class>{label}</span> }
}
