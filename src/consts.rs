//! Shared tuning constants for the page enhancer.

// ── Reveal triggers ─────────────────────────────────────────────

/// Fraction of a fill bar that must be visible before it grows.
pub const FILL_VISIBLE_RATIO: f64 = 0.5;

/// Fill bars trigger 100px before they reach the viewport bottom.
pub const FILL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Fraction of a section or project card that must be visible.
pub const SECTION_VISIBLE_RATIO: f64 = 0.1;

/// Sections and project cards trigger 50px early.
pub const SECTION_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Stagger timing ──────────────────────────────────────────────

/// Per-card delay so project cards enter in sequence.
pub const PROJECT_STAGGER_MS: u32 = 250;
