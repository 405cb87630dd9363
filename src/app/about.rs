use leptos::prelude::*;

use crate::content::{RESUME_PATH, SITE_AUTHOR};

use super::reveal::Reveal;
use super::section::SectionHeading;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-white">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionHeading title="About Me" />
                <div class="grid lg:grid-cols-2 gap-2 items-center justify-center">
                    <Reveal class="space-y-6">
                        <p class="text-lg text-gray-600 leading-relaxed">
                            "I'm a dedicated frontend-heavy fullstack developer with over 3 years of \
                            experience building scalable and high-performing web applications. I \
                            specialize in technologies like React, Redux, JavaScript, HTML, and CSS, \
                            and I'm well-versed in modern styling tools such as Bootstrap and \
                            Tailwind CSS. I strive to develop clean, efficient interfaces that not \
                            only meet business goals but also provide outstanding user experiences."
                        </p>
                        <div class="pt-6">
                            <a
                                href=RESUME_PATH
                                download="RishabhGuptaResume.pdf"
                                class="inline-flex items-center bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-lg font-medium transition-all duration-300 hover:scale-105 hover:-translate-y-0.5 active:scale-95"
                            >
                                "Download Resume"
                            </a>
                        </div>
                    </Reveal>
                    <Reveal delay_ms=500 class="grid gap-6 place-items-center">
                        <img
                            src="/profile_picture.jpg"
                            alt=SITE_AUTHOR
                            width="400"
                            height="400"
                            class="border border-stone-900 rounded-3xl"
                        />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
