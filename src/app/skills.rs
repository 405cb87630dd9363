use leptos::prelude::*;

use crate::content::SKILL_CATEGORIES;
use crate::motion::{self, STAGGER_STEP_MS};

use super::reveal::Reveal;
use super::section::SectionHeading;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Skills" />
                <div class="grid md:grid-cols-3 gap-8">
                    {SKILL_CATEGORIES
                        .iter()
                        .enumerate()
                        .map(|(category_index, category)| {
                            let category_delay =
                                motion::stagger_delay_ms(0, STAGGER_STEP_MS, category_index);
                            view! {
                                <Reveal delay_ms=category_delay>
                                    <div class="bg-gray-50 p-8 rounded-xl hover:-translate-y-1 transition-transform duration-300">
                                        <h3 class="text-2xl font-bold text-gray-900 mb-6 text-center">
                                            {category.title.clone()}
                                        </h3>
                                        <div class="space-y-3">
                                            {category
                                                .skills
                                                .iter()
                                                .enumerate()
                                                .map(|(skill_index, skill)| {
                                                    let delay = motion::stagger_delay_ms(
                                                        category_delay,
                                                        STAGGER_STEP_MS,
                                                        skill_index,
                                                    );
                                                    view! {
                                                        <Reveal delay_ms=delay>
                                                            <div class="bg-white px-4 py-3 rounded-lg shadow-sm hover:shadow-md hover:scale-[1.02] hover:translate-x-1 active:scale-[0.98] transition-all duration-300">
                                                                <span class="text-gray-700 font-medium">
                                                                    {skill.clone()}
                                                                </span>
                                                            </div>
                                                        </Reveal>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
