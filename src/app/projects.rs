use leptos::prelude::*;

use super::reveal::RevealOnScroll;
use crate::content::{site_content, Project};

#[component]
pub fn Projects() -> impl IntoView {
    let content = site_content();
    view! {
        <section id="projects" class="py-24 bg-black border-t border-neutral-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <RevealOnScroll>
                    <div class="mb-20">
                        <h2 class="text-3xl md:text-5xl text-white font-mono">"Projects"</h2>
                        <div class="w-24 h-1 bg-white mt-6"></div>
                    </div>
                </RevealOnScroll>

                <div class="mb-20">
                    <RevealOnScroll>
                        <div class="flex items-center gap-4 mb-8">
                            <span class="text-white font-mono text-lg sm:text-xl tracking-wider uppercase border-l-4 border-white pl-4">
                                "01. Featured Projects"
                            </span>
                            <div class="h-[1px] bg-neutral-800 flex-grow"></div>
                        </div>
                    </RevealOnScroll>
                    <ProjectGrid projects=&content.featured_projects />
                </div>

                <div>
                    <RevealOnScroll>
                        <div class="flex items-center gap-4 mb-8">
                            <span class="text-neutral-300 font-mono text-lg sm:text-xl tracking-wider uppercase border-l-4 border-neutral-600 pl-4">
                                "02. School Projects"
                            </span>
                            <div class="h-[1px] bg-neutral-800 flex-grow"></div>
                        </div>
                    </RevealOnScroll>
                    <ProjectGrid projects=&content.school_projects />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectGrid(projects: &'static [Project]) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
            {projects
                .iter()
                .enumerate()
                .map(|(i, project)| {
                    let delay = (i * 100) as u32;
                    view! {
                        <RevealOnScroll delay=delay>
                            <ProjectCard project=project />
                        </RevealOnScroll>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group flex flex-col p-8 bg-neutral-950 border border-neutral-800 hover:border-white transition-all duration-500 hover:shadow-[0_0_30px_rgba(255,255,255,0.15)] hover:-translate-y-2 h-full">
            <div class="flex justify-between items-start mb-6">
                <div class="p-3 rounded-none bg-black border border-neutral-700 group-hover:bg-white group-hover:text-black transition-colors duration-300 text-3xl">
                    <i class=project.icon.class()></i>
                </div>
                <a
                    href=project.link.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-neutral-500 hover:text-white transition-colors hover:scale-110 text-2xl"
                    aria-label="Project link"
                >
                    <i class="extra-external-link"></i>
                </a>
            </div>

            <h3 class="text-2xl font-bold mb-3 text-white font-mono transition-colors">
                {project.title.as_str()}
            </h3>

            <p class="mb-6 flex-grow text-neutral-500 text-sm leading-relaxed">
                {project.description.as_str()}
            </p>

            <div class="flex flex-wrap gap-2 mt-auto">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="text-xs px-2 py-1 font-mono text-neutral-400 border border-neutral-800 bg-black group-hover:border-neutral-600 transition-colors">
                                "#"
                                {tag.as_str()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
