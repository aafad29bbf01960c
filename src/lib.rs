//! Progressive enhancement layer for the static portfolio page.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It attaches
//! a handful of independent behaviors to an already-rendered page: the
//! dark/light theme toggle, viewport-triggered entrance reveals for skill
//! bars and sections, staggered project-card entrances, smooth-scroll anchor
//! navigation, and the résumé buttons. Each behavior degrades to a no-op when
//! its DOM hooks are absent, so the page works unenhanced.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`enhance`] | Startup wiring that installs every behavior once |
//! | [`theme`] | Theme preference, persistence, and toggle button |
//! | [`motion`] | Reduce-motion accessibility preference |
//! | [`reveal`] | Observe-once viewport reveal engine |
//! | [`fill`] | Fill-bar target widths (skill and progress bars) |
//! | [`anchor`] | Smooth-scroll handling for in-page anchor links |
//! | [`resume`] | Résumé button handlers |
//! | [`consts`] | Shared thresholds, margins, and stagger timing |

pub mod anchor;
pub mod consts;
pub mod enhance;
pub mod fill;
pub mod motion;
pub mod resume;
pub mod reveal;
pub mod theme;

use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point, invoked by the browser once the WASM module loads.
#[wasm_bindgen(start)]
pub fn main_js() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    enhance::run();
}
