// Host-side tests for layout and timing constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn panels_tilt_harder_than_decorations() {
    assert_eq!(DECOR_TILT_STRENGTH, 15.0);
    assert_eq!(PANEL_TILT_STRENGTH, 25.0);
    assert!(PANEL_DEPTH_PX > DECOR_DEPTH_PX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn mobile_scaling_shrinks_offsets() {
    assert!(MOBILE_DECOR_SCALE_X > 0.0 && MOBILE_DECOR_SCALE_X < 1.0);
    assert!(MOBILE_DECOR_SCALE_Y > 0.0 && MOBILE_DECOR_SCALE_Y < 1.0);
    assert_eq!(MOBILE_BREAKPOINT_PX, 768.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn confirmation_outlives_transition() {
    let transition_ms = (TRANSITION_SECS * 1000.0) as i32;
    assert!(COPY_RESET_DELAY_MS > transition_ms);
    assert!(FORM_RESET_DELAY_MS > COPY_RESET_DELAY_MS);
}

#[test]
fn host_page_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        STAGE_ID,
        SCENE_ID,
        HERO_ID,
        WATERMARK_ID,
        CONTACT_FORM_ID,
        CONTACT_NAME_ID,
        CONTACT_MESSAGE_ID,
        CONTACT_SUBMIT_ID,
        COPY_STATE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn data_attributes_use_the_data_prefix() {
    for attr in [ACTION_ATTR, PANEL_ATTR, CATEGORY_ATTR] {
        assert!(attr.starts_with("data-"), "{attr}");
    }
}
