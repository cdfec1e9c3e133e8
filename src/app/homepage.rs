use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::hero::Hero;
use super::navbar::Navbar;
use super::projects::Projects;
use super::scroll_spy::use_active_section;
use crate::content::site_content;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn HomePage() -> impl IntoView {
    let section_ids = site_content()
        .nav_links
        .iter()
        .map(|link| link.section_id())
        .collect::<Vec<_>>();
    let active_section = use_active_section(section_ids);

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-black">
            <Navbar active_section=active_section />

            <main>
                <Hero />
                <About />
                <Projects />
                <Contact />
            </main>

            <footer class="py-8 text-center text-sm bg-black text-neutral-600 border-t border-neutral-900 font-mono">
                <p class="hover:text-white transition-colors cursor-default">
                    "© " {&BUILD_TIME[..4]} " JOHNLEE JUMAO-AS. "
                    <span class="hidden sm:inline">"All rights reserved."</span>
                </p>
            </footer>
        </div>
    }
}
