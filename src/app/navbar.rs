use leptos::prelude::*;

use crate::content::site_content;

#[component]
pub fn Navbar(active_section: ReadSignal<&'static str>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let nav_links = &site_content().nav_links;

    let desktop_links = nav_links
        .iter()
        .map(|link| {
            let id = link.section_id();
            view! {
                <a
                    href=link.href.as_str()
                    class=move || {
                        format!(
                            "px-4 py-2 text-sm font-mono transition-all duration-300 uppercase tracking-wider relative group hover:text-white {}",
                            if active_section() == id { "text-white" } else { "text-neutral-500" },
                        )
                    }
                >
                    {link.name.as_str()}
                    <span class=move || {
                        format!(
                            "absolute bottom-0 left-0 w-full h-[1px] bg-white transform origin-left transition-transform duration-300 {}",
                            if active_section() == id {
                                "scale-x-100"
                            } else {
                                "scale-x-0 group-hover:scale-x-100"
                            },
                        )
                    }></span>
                </a>
            }
        })
        .collect_view();

    let mobile_links = nav_links
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href.as_str()
                    on:click=move |_| set_menu_open(false)
                    class="block px-4 py-3 text-base font-mono uppercase text-white hover:bg-neutral-900 border-l-2 border-transparent hover:border-white transition-all"
                >
                    {link.name.as_str()}
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="fixed top-0 w-full border-b border-neutral-800 bg-black/90 backdrop-blur-md z-50 transition-all duration-500">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16 md:h-20">
                    <div class="flex-shrink-0 font-bold text-lg sm:text-xl text-white tracking-widest uppercase hover:text-neutral-400 transition-colors cursor-pointer">
                        "Johnlee"
                        <span class="text-neutral-600">".Jumao-as"</span>
                    </div>

                    <div class="hidden md:block">
                        <div class="flex items-baseline space-x-8">{desktop_links}</div>
                    </div>

                    <div class="md:hidden">
                        <button
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            class="p-2 text-white focus:outline-none hover:bg-neutral-900 rounded-sm transition-colors"
                            aria-label="Toggle menu"
                        >
                            {move || if menu_open() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <div class=move || {
                format!(
                    "md:hidden absolute top-16 left-0 w-full bg-black border-b border-neutral-800 transition-all duration-300 ease-in-out overflow-hidden {}",
                    if menu_open() { "max-h-64 opacity-100" } else { "max-h-0 opacity-0" },
                )
            }>
                <div class="flex flex-col p-4 space-y-2">{mobile_links}</div>
            </div>
        </nav>
    }
}
