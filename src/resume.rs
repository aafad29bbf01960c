//! Résumé button handlers.
//!
//! Two independently identified buttons share one behavior: suppress the
//! default navigation and open the résumé PDF in a new browsing context.
//! Whether the file actually exists is the browser's concern.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, Window};

const RESUME_PATH: &str = "assets/resume.pdf";
const BUTTON_IDS: [&str; 2] = ["resume-btn", "resume-btn-footer"];

/// Wire both résumé buttons. A missing button skips just that button.
pub fn install(document: &Document, window: &Window) {
    for id in BUTTON_IDS {
        let Some(button) = document.get_element_by_id(id) else {
            continue;
        };
        let win = window.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let _ = win.open_with_url_and_target(RESUME_PATH, "_blank");
        });
        if button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_ok()
        {
            on_click.forget();
        }
    }
}
