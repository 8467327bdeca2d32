use crate::app::{self, AppHandle};
use crate::core::form::Submission;
use crate::core::relay::{encode_request, TemplateParams, RELAY_ENDPOINT, RELAY_TIMEOUT_MS};
use crate::core::{Action, RelayConfig, RelayError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn js_err(e: JsValue) -> RelayError {
    RelayError::Transport(format!("{:?}", e))
}

/// One POST to the relay. Aborts after `RELAY_TIMEOUT_MS`.
pub async fn send(config: &RelayConfig, params: &TemplateParams) -> Result<(), RelayError> {
    let body = encode_request(config, params)?;
    let window = web::window().ok_or_else(|| RelayError::Transport("no window".into()))?;

    let headers = web::Headers::new().map_err(js_err)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_err)?;
    let controller = web::AbortController::new().map_err(js_err)?;
    let signal = controller.signal();

    let opts = web::RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(web::RequestMode::Cors);
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(&body));
    opts.set_signal(Some(&signal));
    let request = web::Request::new_with_str_and_init(RELAY_ENDPOINT, &opts).map_err(js_err)?;

    let abort = Closure::once(move || controller.abort());
    let timeout = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            abort.as_ref().unchecked_ref(),
            RELAY_TIMEOUT_MS,
        )
        .ok();

    let result = JsFuture::from(window.fetch_with_request(&request)).await;
    if let Some(handle) = timeout {
        window.clear_timeout_with_handle(handle);
    }
    drop(abort);

    let response: web::Response = match result {
        Ok(v) => v.dyn_into().map_err(js_err)?,
        Err(_) if signal.aborted() => return Err(RelayError::Timeout(RELAY_TIMEOUT_MS)),
        Err(e) => return Err(js_err(e)),
    };
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = match response.text() {
        Ok(p) => JsFuture::from(p)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };
    Err(RelayError::Rejected { status, body })
}

/// Run `sub` in the background and feed the outcome back into the shell.
pub fn spawn_send(app: &AppHandle, sub: Submission) {
    let config = app.borrow().relay.clone();
    let app = app.clone();
    spawn_local(async move {
        let outcome = match config {
            Some(config) => send(&config, &sub.params).await,
            None => Err(RelayError::MissingConfig("EMAILJS_*")),
        };
        if outcome.is_ok() {
            log::info!("[relay] delivered (ticket {})", sub.ticket);
        }
        app::dispatch(
            &app,
            Action::SendFinished {
                ticket: sub.ticket,
                outcome,
            },
        );
    });
}
