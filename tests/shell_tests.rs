// Host-side tests for the UI reducer: every event goes through `dispatch`.
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
    pub mod panel {
        include!("../src/core/panel.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod projects {
        include!("../src/core/projects.rs");
    }
    pub mod relay {
        include!("../src/core/relay.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod shell {
        include!("../src/core/shell.rs");
    }
}

use crate::core::content::CONTENT;
use crate::core::form::SendStatus;
use crate::core::panel::{PanelId, PanelState};
use crate::core::pointer::PointerSignal;
use crate::core::relay::RelayError;
use crate::core::scene::Layout;
use crate::core::shell::*;

fn shell() -> Shell {
    Shell::new(&CONTENT, 1280.0)
}

fn open(s: &mut Shell, id: PanelId) {
    assert_eq!(s.dispatch(Action::Open(id)), vec![Effect::Opened(id), Effect::Layout]);
}

fn move_to(s: &mut Shell, x: f32, y: f32) -> Vec<Effect> {
    s.dispatch(Action::PointerMove {
        x,
        y,
        width: 800.0,
        height: 600.0,
    })
}

fn fill_contact(s: &mut Shell) {
    s.dispatch(Action::EditName("Ada".into()));
    s.dispatch(Action::EditMessage("Hello".into()));
}

fn sent_ticket(effects: &[Effect]) -> u32 {
    effects
        .iter()
        .find_map(|e| match e {
            Effect::Send(sub) => Some(sub.ticket),
            _ => None,
        })
        .expect("no send effect")
}

#[test]
fn viewport_picks_layout() {
    assert_eq!(Shell::new(&CONTENT, 500.0).layout(), Layout::Mobile);
    let mut s = shell();
    assert_eq!(s.layout(), Layout::Desktop);
    assert_eq!(s.dispatch(Action::Viewport { width: 1000.0 }), vec![]);
    assert_eq!(s.dispatch(Action::Viewport { width: 600.0 }), vec![Effect::Layout]);
    assert_eq!(s.frame().layout, Layout::Mobile);
}

#[test]
fn pointer_moves_relayout_while_idle() {
    let mut s = shell();
    assert_eq!(move_to(&mut s, 800.0, 0.0), vec![Effect::Layout]);
    assert_eq!(s.pointer(), PointerSignal { x: 1.0, y: -1.0 });
}

#[test]
fn pointer_freezes_while_a_panel_is_open() {
    let mut s = shell();
    move_to(&mut s, 600.0, 300.0);
    open(&mut s, PanelId::About);
    assert_eq!(move_to(&mut s, 0.0, 0.0), vec![]);
    assert_eq!(s.pointer().x, 0.5);
}

#[test]
fn open_while_active_is_a_no_op() {
    let mut s = shell();
    open(&mut s, PanelId::About);
    assert_eq!(s.dispatch(Action::Open(PanelId::Contact)), vec![]);
    assert_eq!(s.state(), PanelState::Active(PanelId::About));
}

#[test]
fn close_returns_to_idle() {
    let mut s = shell();
    open(&mut s, PanelId::Stack);
    assert_eq!(
        s.dispatch(Action::Close),
        vec![Effect::Closed(PanelId::Stack), Effect::Layout]
    );
    assert_eq!(s.state(), PanelState::Idle);
    assert_eq!(s.dispatch(Action::Close), vec![]);
}

#[test]
fn escape_key_maps_to_close() {
    assert!(matches!(Action::for_key("Escape"), Some(Action::Close)));
    assert!(Action::for_key("Enter").is_none());
}

#[test]
fn dom_actions_are_parsed() {
    assert!(matches!(
        Action::from_dom("open", Some("projects"), None),
        Some(Action::Open(PanelId::Projects))
    ));
    assert!(Action::from_dom("open", Some("nowhere"), None).is_none());
    assert!(matches!(
        Action::from_dom("filter", None, Some("App")),
        Some(Action::Filter(c)) if c == "App"
    ));
    assert!(matches!(Action::from_dom("copy-email", None, None), Some(Action::CopyEmail)));
    assert!(Action::from_dom("explode", None, None).is_none());
}

#[test]
fn filter_only_applies_inside_projects() {
    let mut s = shell();
    assert_eq!(s.dispatch(Action::Filter("App".into())), vec![]);
    open(&mut s, PanelId::Projects);
    assert_eq!(s.dispatch(Action::Filter("App".into())), vec![Effect::PanelBody]);
    assert_eq!(s.dispatch(Action::Filter("App".into())), vec![]);
    assert_eq!(s.panels().ephemeral().filter.selected(), "App");
    s.dispatch(Action::Close);
    assert_eq!(s.panels().ephemeral().filter.selected(), "All");
}

#[test]
fn copy_email_shows_confirmation_until_expired() {
    let mut s = shell();
    open(&mut s, PanelId::Contact);
    let effects = s.dispatch(Action::CopyEmail);
    let ticket = match effects.as_slice() {
        [Effect::Copy { text, ticket }, Effect::CopyState] => {
            assert_eq!(*text, CONTENT.identity.email);
            *ticket
        }
        other => panic!("unexpected effects {:?}", other),
    };
    assert!(s.panels().ephemeral().copied.shown());
    assert_eq!(s.dispatch(Action::CopyExpired(ticket)), vec![Effect::CopyState]);
    assert!(!s.panels().ephemeral().copied.shown());
}

#[test]
fn copy_expiry_after_close_is_dropped() {
    let mut s = shell();
    open(&mut s, PanelId::Contact);
    let effects = s.dispatch(Action::CopyEmail);
    let Effect::Copy { ticket, .. } = effects[0] else {
        panic!("expected copy");
    };
    s.dispatch(Action::Close);
    assert_eq!(s.dispatch(Action::CopyExpired(ticket)), vec![]);
}

#[test]
fn empty_submit_sends_nothing() {
    let mut s = shell();
    open(&mut s, PanelId::Contact);
    assert_eq!(s.dispatch(Action::Submit), vec![]);
    s.dispatch(Action::EditName("Ada".into()));
    assert_eq!(s.dispatch(Action::Submit), vec![]);
    assert_eq!(s.panels().ephemeral().form.status(), SendStatus::Idle);
}

#[test]
fn submit_sends_once() {
    let mut s = shell();
    open(&mut s, PanelId::Contact);
    fill_contact(&mut s);
    let effects = s.dispatch(Action::Submit);
    assert_eq!(effects[0], Effect::Form);
    match &effects[1] {
        Effect::Send(sub) => {
            assert_eq!(sub.params.from_name, "Ada");
            assert_eq!(sub.params.reply_to, CONTENT.identity.email);
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(s.dispatch(Action::Submit), vec![]);
}

#[test]
fn successful_send_clears_form_and_arms_reset() {
    let mut s = shell();
    open(&mut s, PanelId::Contact);
    fill_contact(&mut s);
    let ticket = sent_ticket(&s.dispatch(Action::Submit));
    assert_eq!(
        s.dispatch(Action::SendFinished {
            ticket,
            outcome: Ok(())
        }),
        vec![Effect::Form, Effect::ArmFormReset(ticket)]
    );
    let form = &s.panels().ephemeral().form;
    assert_eq!(form.status(), SendStatus::Success);
    assert_eq!(form.name(), "");
    assert_eq!(s.dispatch(Action::FormExpired(ticket)), vec![Effect::Form]);
    assert_eq!(s.panels().ephemeral().form.status(), SendStatus::Idle);
}

#[test]
fn failed_send_keeps_input() {
    let mut s = shell();
    open(&mut s, PanelId::Contact);
    fill_contact(&mut s);
    let ticket = sent_ticket(&s.dispatch(Action::Submit));
    s.dispatch(Action::SendFinished {
        ticket,
        outcome: Err(RelayError::Rejected {
            status: 400,
            body: "nope".into(),
        }),
    });
    let form = &s.panels().ephemeral().form;
    assert_eq!(form.status(), SendStatus::Error);
    assert_eq!(form.message(), "Hello");
}

#[test]
fn result_after_close_is_ignored() {
    let mut s = shell();
    open(&mut s, PanelId::Contact);
    fill_contact(&mut s);
    let ticket = sent_ticket(&s.dispatch(Action::Submit));
    s.dispatch(Action::Close);
    assert_eq!(
        s.dispatch(Action::SendFinished {
            ticket,
            outcome: Ok(())
        }),
        vec![]
    );
    open(&mut s, PanelId::Contact);
    let form = &s.panels().ephemeral().form;
    assert_eq!(form.status(), SendStatus::Idle);
    assert_eq!(s.dispatch(Action::FormExpired(ticket)), vec![]);
}

#[test]
fn edits_outside_contact_are_dropped() {
    let mut s = shell();
    open(&mut s, PanelId::About);
    fill_contact(&mut s);
    s.dispatch(Action::Close);
    open(&mut s, PanelId::Contact);
    assert_eq!(s.panels().ephemeral().form.name(), "");
}
