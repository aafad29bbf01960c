//! Smooth-scroll handling for in-page anchor links.
//!
//! Every `a[href^='#']` gets a click listener that suppresses the browser's
//! instant jump and smooth-scrolls the target into view instead. A fragment
//! with no matching element stays a silent no-op, default still suppressed.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition};

const ANCHOR_SELECTOR: &str = "a[href^='#']";

/// Extract the fragment name an anchor link points at.
///
/// `"#about"` yields `Some("about")`; a bare `"#"` or a non-fragment href
/// yields `None`.
#[must_use]
pub fn fragment_name(href: &str) -> Option<&str> {
    let name = href.strip_prefix('#')?;
    if name.is_empty() { None } else { Some(name) }
}

/// Wire a click listener onto every in-page anchor link.
pub fn install(document: &Document) {
    let Ok(anchors) = document.query_selector_all(ANCHOR_SELECTOR) else {
        return;
    };
    for i in 0..anchors.length() {
        let Some(anchor) = anchors
            .item(i)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        let doc = document.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            let Some(name) = fragment_name(&href) else {
                return;
            };
            if let Some(target) = doc.get_element_by_id(name) {
                scroll_to(&target);
            }
        });
        if anchor
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_ok()
        {
            on_click.forget();
        }
    }
}

/// Smooth-scroll an element to the top of the viewport.
fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
