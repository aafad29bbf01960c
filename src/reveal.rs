//! Observe-once viewport reveal engine.
//!
//! One [`IntersectionObserver`] per target group. Each group keeps a
//! [`SeenSet`] of stable element keys that have already animated, so an
//! element reveals at most once per page load no matter how often it
//! re-enters the viewport. Because observers only fire on a crossing, an
//! initial pass handles elements that are already inside the viewport when
//! the page loads.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

/// The visual change applied when an element reveals.
pub type Effect = Rc<dyn Fn(&Element)>;

/// Configuration for one group of elements revealed by the same observer.
#[derive(Clone, Copy, Debug)]
pub struct RevealGroup {
    /// CSS selector collecting the group's elements at startup.
    pub selector: &'static str,
    /// Prefix for generated element keys, e.g. `"project"`.
    pub key_prefix: &'static str,
    /// Fraction of the element that must be visible to trigger.
    pub visible_ratio: f64,
    /// Root margin passed to the observer, e.g. `"0px 0px -50px 0px"`.
    pub root_margin: &'static str,
    /// Per-element delay step; zero reveals immediately.
    pub stagger_ms: u32,
}

/// Keys of elements that have already animated within one group.
#[derive(Debug, Default)]
pub struct SeenSet {
    keys: HashSet<String>,
}

impl SeenSet {
    /// Record a sighting. Returns `true` exactly once per key; later calls
    /// for the same key return `false`.
    pub fn first_sighting(&mut self, key: &str) -> bool {
        self.keys.insert(key.to_owned())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Stable identity for an element within a group: its own `id` when it has
/// one, otherwise a key generated from its startup position.
#[must_use]
pub fn element_key(prefix: &str, id: Option<&str>, index: usize) -> String {
    match id {
        Some(id) if !id.is_empty() => id.to_owned(),
        _ => format!("{prefix}-{index}"),
    }
}

/// Delay before the `index`-th element of a staggered group reveals.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index)
        .unwrap_or(u32::MAX)
        .saturating_mul(step_ms)
}

/// Whether an element's top edge is inside the viewport at startup.
#[must_use]
pub fn in_initial_view(top: f64, viewport_height: f64) -> bool {
    top < viewport_height
}

/// Collect the group's elements, register the observer, and run the initial
/// pass. An empty selection skips the group entirely.
pub fn install(document: &Document, window: &Window, group: &RevealGroup, effect: &Effect) {
    let elements = collect(document, group.selector);
    if elements.is_empty() {
        return;
    }

    // Assign stable keys up front. Generated keys are written back to the
    // element's `id` so identity survives later DOM reordering.
    let mut index_by_key = HashMap::new();
    for (index, element) in elements.iter().enumerate() {
        let id = element.id();
        let key = element_key(
            group.key_prefix,
            if id.is_empty() { None } else { Some(&id) },
            index,
        );
        if id.is_empty() {
            element.set_id(&key);
        }
        index_by_key.insert(key, index);
    }

    let seen = Rc::new(RefCell::new(SeenSet::default()));
    observe(&elements, group, Rc::new(index_by_key), &seen, effect);
    initial_pass(window, &elements, group, &seen, effect);
}

fn collect(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut elements = Vec::new();
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    elements
}

fn observe(
    elements: &[Element],
    group: &RevealGroup,
    index_by_key: Rc<HashMap<String, usize>>,
    seen: &Rc<RefCell<SeenSet>>,
    effect: &Effect,
) {
    let step_ms = group.stagger_ms;
    let seen = Rc::clone(seen);
    let effect = Rc::clone(effect);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let key = target.id();
                if !seen.borrow_mut().first_sighting(&key) {
                    continue;
                }
                let index = index_by_key.get(&key).copied().unwrap_or(0);
                schedule(&target, stagger_delay_ms(index, step_ms), &effect);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(group.visible_ratio));
    options.set_root_margin(group.root_margin);

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    for element in elements {
        observer.observe(element);
    }
    // Observer and callback live for the page lifetime.
    callback.forget();
}

/// Reveal elements that are already inside the viewport at startup, through
/// the same seen-set and stagger path as the observer callback.
fn initial_pass(
    window: &Window,
    elements: &[Element],
    group: &RevealGroup,
    seen: &Rc<RefCell<SeenSet>>,
    effect: &Effect,
) {
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    for (index, element) in elements.iter().enumerate() {
        let top = element.get_bounding_client_rect().top();
        if !in_initial_view(top, viewport_height) {
            continue;
        }
        if !seen.borrow_mut().first_sighting(&element.id()) {
            continue;
        }
        schedule(element, stagger_delay_ms(index, group.stagger_ms), effect);
    }
}

/// Apply the effect now, or after a fire-and-forget stagger timer. A timer
/// that fires after page teardown mutates a detached element, which is a
/// harmless no-op.
fn schedule(target: &Element, delay_ms: u32, effect: &Effect) {
    if delay_ms == 0 {
        effect(target);
        return;
    }
    let target = target.clone();
    let effect = Rc::clone(effect);
    Timeout::new(delay_ms, move || effect(&target)).forget();
}
