use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use crate::viewport::{pick_active, DEFAULT_SECTION};

/// Tracks which of the declared page sections the viewport is currently at,
/// for highlighting in the navigation bar. Starts at the default section and
/// keeps its last value whenever no section is in the focus window. The
/// scroll listener lives on the calling component's scope, so it is removed
/// when that component unmounts.
pub fn use_active_section(section_ids: Vec<&'static str>) -> ReadSignal<&'static str> {
    let (active, set_active) = signal(DEFAULT_SECTION);

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let picked = pick_active(section_ids.iter().map(|id| (*id, section_top(id))));
        if let Some(id) = picked {
            set_active(id);
        }
    });

    active
}

// Top edge of the section's element relative to the viewport top. None when
// the section has no backing element on the page.
fn section_top(id: &str) -> Option<f64> {
    document()
        .get_element_by_id(id)
        .map(|el| el.get_bounding_client_rect().top())
}
