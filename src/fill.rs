//! Fill-bar reveal targets.
//!
//! The page has two historic conventions for "grow this bar to its value":
//! skill bars carry a literal CSS width in `data-width`, progress bars carry
//! a bare percentage in `data-progress`. Both are the same animation with a
//! different value source and output format, so one abstraction covers both.

#[cfg(test)]
#[path = "fill_test.rs"]
mod fill_test;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

/// How an element's data attribute maps to a CSS width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillFormat {
    /// The attribute holds a literal CSS width, e.g. `"90%"` or `"120px"`.
    RawWidth,
    /// The attribute holds a bare percentage, e.g. `"80"`. The resolved
    /// value is also mirrored into `aria-valuenow` on the containing
    /// element so screen readers track the bar.
    Percent,
}

/// Value source and output format for one kind of fill bar.
#[derive(Clone, Copy, Debug)]
pub struct FillSpec {
    pub attr: &'static str,
    pub format: FillFormat,
}

/// Skill bars: `data-width` literal.
pub const SKILL_FILL: FillSpec = FillSpec {
    attr: "data-width",
    format: FillFormat::RawWidth,
};

/// Progress bars: `data-progress` percentage.
pub const PROGRESS_FILL: FillSpec = FillSpec {
    attr: "data-progress",
    format: FillFormat::Percent,
};

/// Resolve the CSS width a bar should grow to. `None` means the attribute
/// value is missing or malformed and the element is left untouched.
#[must_use]
pub fn target_width(format: FillFormat, raw: &str) -> Option<String> {
    match format {
        FillFormat::RawWidth => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        FillFormat::Percent => percent_value(raw).map(|value| format!("{value}%")),
    }
}

/// Validate a bare percentage string. Accepts 0–100 inclusive, returns the
/// trimmed literal so `"80"` stays `"80"` rather than `"80.0"`.
#[must_use]
pub fn percent_value(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().ok()?;
    if (0.0..=100.0).contains(&value) {
        Some(trimmed)
    } else {
        None
    }
}

/// Grow a bar to its target width. Percent bars also update the containing
/// element's `aria-valuenow`.
pub fn apply(element: &Element, spec: &FillSpec) {
    let Some(raw) = element.get_attribute(spec.attr) else {
        return;
    };
    let Some(width) = target_width(spec.format, &raw) else {
        return;
    };
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("width", &width);
    }
    if spec.format == FillFormat::Percent {
        if let (Some(value), Some(container)) = (percent_value(&raw), element.parent_element()) {
            let _ = container.set_attribute("aria-valuenow", value);
        }
    }
}
