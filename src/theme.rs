//! Theme preference initialization and toggle.
//!
//! Reads the visitor's choice from `localStorage` and applies the `.dark`
//! class to `<body>` before the page is interactive. The toggle button flips
//! the class, swaps its own label, and writes the new choice back. Requires a
//! browser environment; every DOM hook is optional.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Document;

const STORAGE_KEY: &str = "darkMode";
const DARK_CLASS: &str = "dark";
const TOGGLE_SELECTOR: &str = ".toggle-btn";

/// The two visual themes. Light is the default for first-time visitors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse the persisted `localStorage` value. Only the literal `"true"`
    /// means dark; a missing or malformed value falls back to light.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        if value == Some("true") { Self::Dark } else { Self::Light }
    }

    /// The literal written to `localStorage` for this theme.
    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }

    /// Toggle-button label. It names the mode a click switches to, so it is
    /// the opposite of the active theme.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Light => "Dark Mode",
            Self::Dark => "Light Mode",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Apply a theme to the page: `<body>` class plus the button label.
pub fn apply(document: &Document, theme: Theme) {
    if let Some(body) = document.body() {
        let class_list = body.class_list();
        if theme.is_dark() {
            let _ = class_list.add_1(DARK_CLASS);
        } else {
            let _ = class_list.remove_1(DARK_CLASS);
        }
    }
    if let Ok(Some(button)) = document.query_selector(TOGGLE_SELECTOR) {
        button.set_text_content(Some(theme.button_label()));
    }
}

/// The theme currently displayed, derived from the `<body>` class.
#[must_use]
pub fn current(document: &Document) -> Theme {
    match document.body() {
        Some(body) if body.class_list().contains(DARK_CLASS) => Theme::Dark,
        _ => Theme::Light,
    }
}

/// Restore the persisted preference before first interaction.
///
/// Light is the page's default rendering, so only a stored dark preference
/// needs any DOM writes.
pub fn restore_on_load(document: &Document) {
    let theme = Theme::from_stored(read_stored().as_deref());
    if theme.is_dark() {
        apply(document, theme);
    }
}

/// Flip the theme, update the button label, and persist the new choice.
pub fn toggle(document: &Document) {
    let next = current(document).toggled();
    apply(document, next);
    persist(next);
}

/// Wire the toggle button's click listener. A missing button skips the
/// feature entirely.
pub fn install(document: &Document) {
    let Ok(Some(button)) = document.query_selector(TOGGLE_SELECTOR) else {
        return;
    };
    let doc = document.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || toggle(&doc));
    if button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_ok()
    {
        // Listener lives for the page lifetime.
        on_click.forget();
    }
}

fn read_stored() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    storage.get_item(STORAGE_KEY).ok().flatten()
}

fn persist(theme: Theme) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.stored_value());
        }
    }
}
