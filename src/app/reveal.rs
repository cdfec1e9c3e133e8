use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};
use wasm_bindgen::JsValue;

use crate::viewport::{RevealLatch, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

/// Wraps content in a region that slides into view the first time it is
/// scrolled on screen. The reveal fires at most once per region; `delay`
/// (milliseconds) staggers sibling regions.
#[component]
pub fn RevealOnScroll(
    children: Children,
    #[prop(into, optional)] class: String,
    #[prop(optional)] delay: u32,
    #[prop(optional)] threshold: Option<f64>,
    #[prop(into, optional)] root_margin: Option<String>,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(false);
    let latch = StoredValue::new(RevealLatch::new());

    let _ = use_intersection_observer_with_options(
        target,
        move |entries, observer| {
            let intersecting = entries.iter().any(|e| e.is_intersecting());
            let tripped = latch
                .try_update_value(|l| l.on_intersection(intersecting))
                .unwrap_or(false);
            if tripped {
                set_revealed(true);
                // one-shot: no further callbacks for this region
                observer.disconnect();
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![threshold.unwrap_or(REVEAL_THRESHOLD)])
            .root_margin(root_margin.unwrap_or_else(|| REVEAL_ROOT_MARGIN.to_string())),
    );

    // Without IntersectionObserver no notification ever arrives - show the
    // content immediately rather than hiding it forever
    Effect::new(move |_| {
        if !observer_supported() {
            set_revealed(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                format!(
                    "{class} transition-all duration-1000 ease-out transform {}",
                    if revealed() {
                        "opacity-100 translate-y-0"
                    } else {
                        "opacity-0 translate-y-12"
                    },
                )
            }
            style=format!("transition-delay: {delay}ms")
        >
            {children()}
        </div>
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| {
            js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        })
        .unwrap_or(false)
}
