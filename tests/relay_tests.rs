// Host-side tests for relay configuration and request encoding.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod relay {
    include!("../src/core/relay.rs");
}

use relay::*;

fn config() -> RelayConfig {
    RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("key")).unwrap()
}

#[test]
fn all_parts_required() {
    assert!(matches!(
        RelayConfig::from_parts(None, Some("tpl"), Some("key")),
        Err(RelayError::MissingConfig("EMAILJS_SERVICE_ID"))
    ));
    assert!(matches!(
        RelayConfig::from_parts(Some("svc"), Some("  "), Some("key")),
        Err(RelayError::MissingConfig("EMAILJS_TEMPLATE_ID"))
    ));
    assert!(matches!(
        RelayConfig::from_parts(Some("svc"), Some("tpl"), Some("")),
        Err(RelayError::MissingConfig("EMAILJS_PUBLIC_KEY"))
    ));
}

#[test]
fn parts_are_trimmed() {
    let c = RelayConfig::from_parts(Some(" svc "), Some("tpl\n"), Some("key")).unwrap();
    assert_eq!(c.service_id, "svc");
    assert_eq!(c.template_id, "tpl");
}

#[test]
fn request_body_matches_relay_schema() {
    let params = TemplateParams {
        from_name: "Ada".into(),
        message: "Hi \"there\"".into(),
        reply_to: "owner@example.com".into(),
    };
    let body = encode_request(&config(), &params).unwrap();
    let v: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(v["service_id"], "svc");
    assert_eq!(v["template_id"], "tpl");
    assert_eq!(v["user_id"], "key");
    assert_eq!(v["template_params"]["from_name"], "Ada");
    assert_eq!(v["template_params"]["message"], "Hi \"there\"");
    assert_eq!(v["template_params"]["reply_to"], "owner@example.com");
}

#[test]
fn errors_render_readable_messages() {
    let e = RelayError::Rejected {
        status: 400,
        body: "bad template".into(),
    };
    assert_eq!(
        e.to_string(),
        "relay rejected the message (status 400): bad template"
    );
    assert_eq!(
        RelayError::Timeout(RELAY_TIMEOUT_MS).to_string(),
        "relay did not answer within 15000 ms"
    );
}

#[test]
fn endpoint_is_https() {
    assert!(RELAY_ENDPOINT.starts_with("https://"));
}
