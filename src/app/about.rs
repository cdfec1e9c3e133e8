use leptos::prelude::*;

use super::reveal::RevealOnScroll;
use crate::content::site_content;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 bg-black border-t border-neutral-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <RevealOnScroll>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-12 lg:gap-16 items-center">
                        <div class="order-2 md:order-1">
                            <h2 class="text-3xl md:text-5xl mb-8 text-white font-mono">
                                "<About />"
                            </h2>
                            <p class="text-lg leading-relaxed mb-6 text-neutral-500">
                                "I am a recent graduate passionate about building efficient and scalable web applications. Eager to kickstart my career, I focus on writing clean, maintainable code and constantly expanding my technical skillset."
                            </p>
                            <p class="text-lg leading-relaxed mb-8 text-neutral-500">
                                "As a fresh addition to the tech world, I combine strong academic foundations with hands-on project experience to create functional, user-centric digital solutions."
                            </p>
                            <Skills />
                        </div>

                        <div class="order-1 md:order-2 flex justify-center">
                            <div class="relative w-full max-w-sm aspect-square flex items-center justify-center bg-neutral-950 rounded-none border border-neutral-800 group hover:border-white transition-colors duration-500 overflow-hidden">
                                <img
                                    src="crop.jpg"
                                    alt="Johnlee Jumao-as"
                                    class="w-full h-full object-cover filter grayscale group-hover:grayscale-0 transition-all duration-500"
                                />
                                <div class="absolute top-0 left-0 w-4 h-4 border-t border-l border-white transition-all duration-300 group-hover:w-8 group-hover:h-8 z-10"></div>
                                <div class="absolute top-0 right-0 w-4 h-4 border-t border-r border-white transition-all duration-300 group-hover:w-8 group-hover:h-8 z-10"></div>
                                <div class="absolute bottom-0 left-0 w-4 h-4 border-b border-l border-white transition-all duration-300 group-hover:w-8 group-hover:h-8 z-10"></div>
                                <div class="absolute bottom-0 right-0 w-4 h-4 border-b border-r border-white transition-all duration-300 group-hover:w-8 group-hover:h-8 z-10"></div>
                            </div>
                        </div>
                    </div>
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    let skills = &site_content().skills;
    view! {
        <div class="mt-12">
            <h3 class="font-semibold mb-6 text-white font-mono uppercase tracking-widest text-sm">
                "// Tech_Stack"
            </h3>
            <div class="flex flex-wrap gap-3">
                {skills
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        let delay = (i * 50) as u32;
                        view! {
                            <RevealOnScroll delay=delay class="inline-block">
                                <span class="inline-block px-4 py-2 text-sm font-mono text-neutral-300 bg-neutral-900 border border-neutral-700 hover:bg-white hover:text-black transition-all cursor-default hover:scale-105">
                                    {skill.as_str()}
                                </span>
                            </RevealOnScroll>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
