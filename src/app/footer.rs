use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::content::{copyright_line, EMAIL, QUICK_LINKS, SITE_AUTHOR, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    // Stamped by build.rs; a failed parse just drops the line.
    let built = DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.format("%b %Y").to_string());

    view! {
        <footer id="contact" class="bg-gray-900 text-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="grid md:grid-cols-3 gap-8">
                    // Brand
                    <div>
                        <h3 class="text-2xl font-bold mb-4">{SITE_AUTHOR}</h3>
                        <p class="text-gray-300 mb-6 leading-relaxed">
                            "Passionate full-stack developer creating beautiful and functional \
                            web experiences. Always excited to take on new challenges and learn \
                            cutting-edge technologies."
                        </p>
                        <div class="flex space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href.clone()
                                            aria-label=link.label.clone()
                                            class="text-gray-400 hover:text-white hover:scale-110 transition-all duration-300 text-xl"
                                        >
                                            <i class=link.icon.clone()></i>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    // Quick links
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Quick Links"</h4>
                        <nav class="grid grid-cols-2 gap-2">
                            {QUICK_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href.clone()
                                            class="text-gray-300 hover:text-white transition-colors duration-300"
                                        >
                                            {link.label.clone()}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </nav>
                    </div>
                    // Contact info
                    <div>
                        <h4 class="text-lg font-semibold mb-4">"Get In Touch"</h4>
                        <div class="space-y-2 text-gray-300">
                            <p>"Pune, Maharashtra"</p>
                            <p>{EMAIL}</p>
                            <p>"+91 9120873373"</p>
                        </div>
                    </div>
                </div>
                // Bottom bar
                <div class="border-t border-gray-800 mt-8 pt-8 flex flex-col md:flex-row justify-between items-center">
                    <p class="text-gray-400 text-sm">{copyright_line(year)}</p>
                    <p class="text-gray-400 text-sm flex items-center mt-4 md:mt-0">
                        "Made with " <span class="text-red-500 mx-1">"♥"</span>
                        " and lots of coffee"
                        {built
                            .map(|stamp| {
                                view! {
                                    <span class="ml-2 text-gray-500">{format!("· built {stamp}")}</span>
                                }
                            })}
                    </p>
                </div>
            </div>
        </footer>
    }
}
