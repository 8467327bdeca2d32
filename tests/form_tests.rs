// Host-side tests for the contact form lifecycle.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod form {
        include!("../src/core/form.rs");
    }
    pub mod relay {
        include!("../src/core/relay.rs");
    }
}

use crate::core::form::*;
use crate::core::relay::RelayError;

const REPLY_TO: &str = "owner@example.com";

fn filled() -> ContactForm {
    let mut f = ContactForm::default();
    f.set_name("Ada");
    f.set_message("Hello there");
    f
}

#[test]
fn empty_fields_block_submit() {
    let mut f = ContactForm::default();
    assert_eq!(f.submit(REPLY_TO), Err(SubmitBlocked::EmptyField));
    f.set_name("Ada");
    assert_eq!(f.submit(REPLY_TO), Err(SubmitBlocked::EmptyField));
    assert_eq!(f.status(), SendStatus::Idle);
}

#[test]
fn whitespace_counts_as_content() {
    let mut f = ContactForm::default();
    f.set_name(" ");
    f.set_message(" ");
    assert!(f.submit(REPLY_TO).is_ok());
}

#[test]
fn submit_moves_to_sending_and_carries_fields() {
    let mut f = filled();
    let sub = f.submit(REPLY_TO).unwrap();
    assert_eq!(f.status(), SendStatus::Sending);
    assert_eq!(sub.ticket, f.ticket());
    assert_eq!(sub.params.from_name, "Ada");
    assert_eq!(sub.params.message, "Hello there");
    assert_eq!(sub.params.reply_to, REPLY_TO);
}

#[test]
fn inputs_locked_while_sending() {
    let mut f = filled();
    f.submit(REPLY_TO).unwrap();
    assert!(!f.inputs_enabled());
    assert!(!f.set_name("Bob"));
    assert_eq!(f.name(), "Ada");
    assert_eq!(f.submit(REPLY_TO), Err(SubmitBlocked::InFlight));
}

#[test]
fn success_clears_fields() {
    let mut f = filled();
    let sub = f.submit(REPLY_TO).unwrap();
    assert!(f.finish(sub.ticket, &Ok(())));
    assert_eq!(f.status(), SendStatus::Success);
    assert_eq!(f.name(), "");
    assert_eq!(f.message(), "");
}

#[test]
fn failure_keeps_fields() {
    let mut f = filled();
    let sub = f.submit(REPLY_TO).unwrap();
    let err = Err(RelayError::Transport("offline".into()));
    assert!(f.finish(sub.ticket, &err));
    assert_eq!(f.status(), SendStatus::Error);
    assert_eq!(f.name(), "Ada");
    assert!(f.inputs_enabled());
}

#[test]
fn expire_returns_to_idle() {
    let mut f = filled();
    let sub = f.submit(REPLY_TO).unwrap();
    f.finish(sub.ticket, &Ok(()));
    assert!(f.expire(sub.ticket));
    assert_eq!(f.status(), SendStatus::Idle);
    assert!(!f.expire(sub.ticket));
}

#[test]
fn stale_completion_after_reset_is_ignored() {
    let mut f = filled();
    let sub = f.submit(REPLY_TO).unwrap();
    f.reset();
    assert!(!f.finish(sub.ticket, &Ok(())));
    assert_eq!(f.status(), SendStatus::Idle);
}

#[test]
fn old_timer_does_not_reset_newer_submission() {
    let mut f = filled();
    let first = f.submit(REPLY_TO).unwrap();
    let err = Err(RelayError::Timeout(15_000));
    f.finish(first.ticket, &err);
    let second = f.submit(REPLY_TO).unwrap();
    f.finish(second.ticket, &err);
    assert!(!f.expire(first.ticket));
    assert_eq!(f.status(), SendStatus::Error);
    assert!(f.expire(second.ticket));
}

#[test]
fn labels_follow_status() {
    assert_eq!(SendStatus::Idle.button_label(), "SEND PACKET");
    assert_eq!(SendStatus::Sending.button_label(), "SENDING...");
    assert_eq!(SendStatus::Success.button_label(), "PACKET SENT");
    assert_eq!(SendStatus::Error.button_label(), "FAILED - TRY AGAIN");
}
