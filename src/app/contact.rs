use leptos::prelude::*;

use super::reveal::RevealOnScroll;
use crate::content::site_content;

#[component]
pub fn Contact() -> impl IntoView {
    let content = site_content();

    let socials = content
        .social_links
        .iter()
        .map(|social| {
            view! {
                <a
                    href=social.href.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-neutral-600 hover:text-white hover:-translate-y-2 hover:scale-110 transition-all duration-300 text-3xl"
                    aria-label=social.label.as_str()
                >
                    <i class=social.icon.class()></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="contact" class="py-24 bg-black border-t border-neutral-900">
            <div class="max-w-4xl mx-auto px-4 text-center">
                <RevealOnScroll>
                    <h2 class="text-4xl sm:text-5xl md:text-6xl font-bold mb-8 text-white font-mono tracking-tighter">
                        "INITIATE_CONTACT"
                    </h2>
                    <p class="text-lg sm:text-xl text-neutral-500 mb-12 max-w-2xl mx-auto font-light">
                        "Open for new opportunities. Questions or collaborations? Transmit below."
                    </p>

                    <a
                        href=format!("mailto:{}", content.contact_email)
                        class="inline-flex items-center gap-3 px-10 py-5 text-lg font-bold transition-all bg-white hover:bg-neutral-200 text-black font-mono rounded-none hover:scale-105 active:scale-95 shadow-[0_0_20px_rgba(255,255,255,0.1)] hover:shadow-[0_0_30px_rgba(255,255,255,0.3)]"
                    >
                        <i class="extra-mail"></i>
                        "Send Transmission"
                    </a>

                    <div class="flex justify-center gap-8 mt-16">{socials}</div>
                </RevealOnScroll>
            </div>
        </section>
    }
}
