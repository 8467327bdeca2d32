// Host-side tests for panel markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod content {
        include!("../src/core/content.rs");
    }
    pub mod form {
        include!("../src/core/form.rs");
    }
    pub mod markup {
        include!("../src/core/markup.rs");
    }
    pub mod panel {
        include!("../src/core/panel.rs");
    }
    pub mod projects {
        include!("../src/core/projects.rs");
    }
    pub mod relay {
        include!("../src/core/relay.rs");
    }
}

use crate::core::content::CONTENT;
use crate::core::markup::*;
use crate::core::panel::{Ephemeral, PanelId};

#[test]
fn escapes_markup_characters() {
    assert_eq!(
        escape_html("<a href=\"x\">Tom & Jerry's</a>"),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
}

#[test]
fn every_body_has_a_close_control() {
    let eph = Ephemeral::default();
    for id in PanelId::ALL {
        let html = panel_body(id, &CONTENT, &eph, 2026);
        assert!(html.contains("data-action='close'"), "{:?}", id);
    }
}

#[test]
fn about_shows_years_of_experience() {
    let html = panel_body(PanelId::About, &CONTENT, &Ephemeral::default(), 2026);
    assert!(html.contains("<div class='stat-value'>4</div>"));
    assert!(html.contains("Years Exp"));
    assert!(html.contains(CONTENT.about.portrait));
}

#[test]
fn projects_grid_marks_selected_category() {
    let html = projects_grid(&CONTENT, "Website");
    assert!(html.contains("class='filter is-selected' data-action='filter' data-category='Website'"));
    assert!(html.contains("data-project='p1'"));
    assert!(html.contains("data-project='p4'"));
    assert!(!html.contains("data-project='p2'"));
    assert!(html.find("data-project='p1'") < html.find("data-project='p4'"));
}

#[test]
fn contact_form_reflects_state() {
    let mut eph = Ephemeral::default();
    eph.form.set_name("<Ada>");
    eph.form.set_message("Hi");
    let html = panel_body(PanelId::Contact, &CONTENT, &eph, 2026);
    assert!(html.contains("value='&lt;Ada&gt;'"));
    assert!(html.contains("SEND PACKET"));
    assert!(!html.contains(" disabled"));

    eph.form.submit(CONTENT.identity.email).unwrap();
    let html = panel_body(PanelId::Contact, &CONTENT, &eph, 2026);
    assert!(html.contains("SENDING..."));
    assert!(html.contains(" disabled"));
}

#[test]
fn copy_icon_switches_on_confirmation() {
    assert_eq!(copy_icon(false), "icon-copy");
    assert_eq!(copy_icon(true), "icon-check");
    let mut eph = Ephemeral::default();
    eph.copied.show();
    let html = panel_body(PanelId::Contact, &CONTENT, &eph, 2026);
    assert!(html.contains("id='copy-state' class='icon icon-check'"));
}

#[test]
fn hero_splits_name_into_lines() {
    let html = hero(&CONTENT.identity);
    assert!(html.contains("<span>FAHIM</span><span>KHAN</span>"));
    assert!(html.contains("Creative Engineer &amp; Software Architect"));
}

#[test]
fn stack_tiles_pick_icons() {
    let html = panel_body(PanelId::Stack, &CONTENT, &Ephemeral::default(), 2026);
    for skill in CONTENT.stack {
        assert!(html.contains(&escape_html(skill)), "{}", skill);
    }
}
