use leptos::prelude::*;

use crate::content::{Project, PROJECTS};
use crate::motion::{self, STAGGER_STEP_MS};

use super::reveal::Reveal;
use super::section::{SectionHeading, TechTag};

#[component]
pub fn Projects() -> impl IntoView {
    // Index into PROJECTS; None while the detail modal is closed. Cards set
    // it, the modal backdrop and close button clear it. The overlay blocks
    // the page while open, so there is no re-entrant card click to handle.
    let (selected, set_selected) = signal(None::<usize>);

    view! {
        <section id="projects" class="py-20 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="Featured Projects" />
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            view! {
                                <ProjectCard index=index project=project.clone() set_selected=set_selected />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            {move || {
                selected
                    .get()
                    .and_then(|index| PROJECTS.get(index).cloned())
                    .map(|project| view! { <ProjectModal project=project set_selected=set_selected /> })
            }}
        </section>
    }
}

#[component]
fn ProjectCard(
    index: usize,
    project: Project,
    set_selected: WriteSignal<Option<usize>>,
) -> impl IntoView {
    view! {
        <Reveal delay_ms=motion::stagger_delay_ms(0, STAGGER_STEP_MS, index)>
            <div
                class="bg-white rounded-xl overflow-hidden shadow-lg hover:shadow-xl hover:-translate-y-1 hover:scale-[1.02] active:scale-[0.98] transition-all duration-300 cursor-pointer"
                on:click=move |_| set_selected.set(Some(index))
            >
                <div class="relative overflow-hidden">
                    <img
                        src=project.image.clone()
                        alt=project.title.clone()
                        class="w-full h-48 object-cover hover:scale-110 transition-transform duration-300"
                    />
                    {project.featured.then(|| view! { <FeaturedBadge /> })}
                </div>
                <div class="p-6">
                    <h3 class="text-xl font-bold text-gray-900 mb-3">{project.title.clone()}</h3>
                    <p class="text-gray-600 mb-4 leading-relaxed">{project.description.clone()}</p>
                    <div class="flex flex-wrap gap-2 mb-6">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| view! { <TechTag label=tech.clone() /> })
                            .collect_view()}
                    </div>
                    <div class="flex space-x-4">
                        // These anchors must not trigger the card's modal open
                        <a
                            href=project.live_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center text-blue-600 hover:text-blue-700 hover:scale-105 font-medium transition-all duration-300"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <i class="extra-link mr-2"></i>
                            "Live Demo"
                        </a>
                        <a
                            href=project.github_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center text-gray-600 hover:text-gray-700 hover:scale-105 font-medium transition-all duration-300"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <i class="devicon-github-plain mr-2"></i>
                            "Source Code"
                        </a>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
fn ProjectModal(project: Project, set_selected: WriteSignal<Option<usize>>) -> impl IntoView {
    view! {
        <div
            class="modal-backdrop fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-center justify-center p-4"
            on:click=move |_| set_selected.set(None)
        >
            <div
                class="modal-panel bg-white rounded-2xl max-w-4xl w-full max-h-[90vh] overflow-y-auto"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="relative">
                    <img
                        src=project.image.clone()
                        alt=project.title.clone()
                        class="w-full h-64 object-cover rounded-t-2xl"
                    />
                    <button
                        aria-label="Close"
                        class="absolute top-4 right-4 bg-white/90 hover:bg-white text-gray-800 p-2 rounded-full transition-colors duration-200"
                        on:click=move |_| set_selected.set(None)
                    >
                        "✕"
                    </button>
                    {project.featured.then(|| view! { <FeaturedBadge /> })}
                </div>
                <div class="p-8">
                    <div class="flex flex-wrap items-center gap-4 mb-6">
                        <h2 class="text-3xl font-bold text-gray-900">{project.title.clone()}</h2>
                        {project
                            .status
                            .clone()
                            .map(|status| {
                                view! {
                                    <span class="px-3 py-1 bg-green-100 text-green-800 rounded-full text-sm font-medium">
                                        {status}
                                    </span>
                                }
                            })}
                    </div>
                    <div class="grid md:grid-cols-3 gap-4 mb-6">
                        {project
                            .duration
                            .clone()
                            .map(|duration| {
                                view! {
                                    <div class="flex items-center text-gray-600">
                                        <i class="extra-calendar mr-2"></i>
                                        <span class="text-sm">{duration}</span>
                                    </div>
                                }
                            })}
                        {project
                            .team
                            .clone()
                            .map(|team| {
                                view! {
                                    <div class="flex items-center text-gray-600">
                                        <i class="extra-users mr-2"></i>
                                        <span class="text-sm">{team}</span>
                                    </div>
                                }
                            })}
                    </div>
                    {project
                        .full_description
                        .clone()
                        .map(|full| {
                            view! { <p class="text-gray-600 mb-6 leading-relaxed">{full}</p> }
                        })}
                    {(!project.features.is_empty())
                        .then(|| {
                            view! {
                                <div class="mb-6">
                                    <h3 class="text-xl font-semibold text-gray-900 mb-3">
                                        "Key Features"
                                    </h3>
                                    <ul class="grid md:grid-cols-2 gap-2">
                                        {project
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li class="flex items-center text-gray-600">
                                                        <div class="w-2 h-2 bg-blue-600 rounded-full mr-3"></div>
                                                        {feature.clone()}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })}
                    <div class="mb-8">
                        <h3 class="text-xl font-semibold text-gray-900 mb-3">
                            "Technologies Used"
                        </h3>
                        <div class="flex flex-wrap gap-2">
                            {project
                                .technologies
                                .iter()
                                .map(|tech| view! { <TechTag label=tech.clone() accent=true /> })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href=project.live_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-lg font-medium transition-colors duration-300"
                        >
                            <i class="extra-link mr-2"></i>
                            "View Live Project"
                        </a>
                        <a
                            href=project.github_url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center border-2 border-gray-300 hover:border-gray-400 text-gray-700 px-6 py-3 rounded-lg font-medium transition-colors duration-300"
                        >
                            <i class="devicon-github-plain mr-2"></i>
                            "View Source Code"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn FeaturedBadge() -> impl IntoView {
    view! {
        <div class="absolute top-4 left-4 bg-blue-600 text-white px-3 py-1 rounded-full text-sm font-medium">
            "★ Featured"
        </div>
    }
}
