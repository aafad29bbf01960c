//! Reduce-motion accessibility preference.

use web_sys::Window;

/// Whether the visitor asked the platform to minimize non-essential motion.
///
/// When set, every entrance reveal is skipped and elements stay in their
/// default fully-visible state.
#[must_use]
pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}
