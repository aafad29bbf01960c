//! Startup wiring that installs every page enhancement once.
//!
//! Each installer is independent: a missing DOM hook skips that feature
//! without affecting the others.

use std::rc::Rc;

use web_sys::{Document, Element, Window};

use crate::reveal::{Effect, RevealGroup};
use crate::{anchor, consts, fill, motion, resume, reveal, theme};

const REVEAL_CLASS: &str = "show";
const ANIMATED_CLASS: &str = "animated";

/// Install all enhancements. Safe to call outside a browser; it simply
/// returns when `window` or `document` is unavailable.
pub fn run() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    theme::restore_on_load(&document);
    theme::install(&document);

    if motion::prefers_reduced_motion(&window) {
        log::info!("reduce motion is set, entrance reveals disabled");
    } else {
        install_reveals(&document, &window);
    }

    anchor::install(&document);
    resume::install(&document, &window);

    log::info!("page enhancer initialized");
}

/// Register the four reveal groups: both fill-bar kinds, page sections, and
/// the staggered project cards.
fn install_reveals(document: &Document, window: &Window) {
    let skill_effect: Effect = Rc::new(|element: &Element| {
        fill::apply(element, &fill::SKILL_FILL);
        let _ = element.class_list().add_1(ANIMATED_CLASS);
    });
    reveal::install(
        document,
        window,
        &RevealGroup {
            selector: ".skill-fill",
            key_prefix: "skill",
            visible_ratio: consts::FILL_VISIBLE_RATIO,
            root_margin: consts::FILL_ROOT_MARGIN,
            stagger_ms: 0,
        },
        &skill_effect,
    );

    let progress_effect: Effect = Rc::new(|element: &Element| {
        fill::apply(element, &fill::PROGRESS_FILL);
        let _ = element.class_list().add_1(ANIMATED_CLASS);
    });
    reveal::install(
        document,
        window,
        &RevealGroup {
            selector: ".progress-fill",
            key_prefix: "progress",
            visible_ratio: consts::FILL_VISIBLE_RATIO,
            root_margin: consts::FILL_ROOT_MARGIN,
            stagger_ms: 0,
        },
        &progress_effect,
    );

    let show_effect: Effect = Rc::new(|element: &Element| {
        let _ = element.class_list().add_1(REVEAL_CLASS);
    });
    reveal::install(
        document,
        window,
        &RevealGroup {
            selector: "section",
            key_prefix: "section",
            visible_ratio: consts::SECTION_VISIBLE_RATIO,
            root_margin: consts::SECTION_ROOT_MARGIN,
            stagger_ms: 0,
        },
        &show_effect,
    );
    reveal::install(
        document,
        window,
        &RevealGroup {
            selector: ".project",
            key_prefix: "project",
            visible_ratio: consts::SECTION_VISIBLE_RATIO,
            root_margin: consts::SECTION_ROOT_MARGIN,
            stagger_ms: consts::PROJECT_STAGGER_MS,
        },
        &show_effect,
    );
}
