use leptos::prelude::*;

use crate::content::{timeline_side, ExperienceEntry, TimelineSide, EXPERIENCES};
use crate::motion::{self, STAGGER_STEP_MS};

use super::reveal::Reveal;
use super::section::{SectionHeading, TechTag};

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Experience" />
                <div class="max-w-4xl mx-auto">
                    <div class="relative">
                        // Timeline line
                        <div class="absolute left-8 md:left-1/2 md:-translate-x-1/2 w-1 h-full bg-blue-200"></div>
                        {EXPERIENCES
                            .iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                view! { <TimelineRow index=index entry=entry.clone() /> }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineRow(index: usize, entry: ExperienceEntry) -> impl IntoView {
    // Rows alternate sides on wide screens; on narrow screens everything
    // stacks to the right of the line.
    let (row_class, content_class) = match timeline_side(index) {
        TimelineSide::Left => (
            "relative flex items-start mb-12 md:flex-row",
            "ml-16 md:ml-0 md:w-1/2 md:pr-12",
        ),
        TimelineSide::Right => (
            "relative flex items-start mb-12 md:flex-row-reverse",
            "ml-16 md:ml-0 md:w-1/2 md:pl-12",
        ),
    };
    let (status_label, status_class) = if entry.current {
        ("Current", "px-3 py-1 text-xs font-medium rounded-full bg-green-100 text-green-800")
    } else {
        ("Past", "px-3 py-1 text-xs font-medium rounded-full bg-gray-100 text-gray-800")
    };

    view! {
        <div class=row_class>
            // Timeline dot
            <div class="absolute left-8 md:left-1/2 -translate-x-1/2 w-4 h-4 bg-blue-600 rounded-full border-4 border-white shadow-lg z-10"></div>
            <div class=content_class>
                <Reveal delay_ms=motion::stagger_delay_ms(0, STAGGER_STEP_MS, index)>
                    <div class="bg-white p-6 rounded-xl shadow-lg hover:shadow-xl transition-shadow duration-300">
                        <div class="flex items-center justify-between mb-3">
                            <span class=status_class>{status_label}</span>
                            <div class="flex items-center text-sm text-gray-500">
                                <i class="extra-calendar mr-1"></i>
                                {entry.period.clone()}
                            </div>
                        </div>
                        <h3 class="text-xl font-bold text-gray-900 mb-2">{entry.title.clone()}</h3>
                        <div class="flex items-center text-blue-600 font-medium mb-2">
                            <span>{entry.company.clone()}</span>
                        </div>
                        <div class="flex items-center text-gray-500 text-sm mb-4">
                            <i class="extra-location mr-1"></i>
                            {entry.location.clone()}
                        </div>
                        <p class="text-gray-600 mb-4 leading-relaxed">{entry.description.clone()}</p>
                        <div class="flex flex-wrap gap-2">
                            {entry
                                .technologies
                                .iter()
                                .map(|tech| view! { <TechTag label=tech.clone() accent=true /> })
                                .collect_view()}
                        </div>
                    </div>
                </Reveal>
            </div>
        </div>
    }
}
