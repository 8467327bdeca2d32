use crate::app::{self, AppHandle};
use crate::core::schedule::TimerSlot;
use crate::core::Action;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
pub enum TimerKind {
    CopyConfirm,
    FormReset,
}

/// One-shot timeouts owned by the open panel.
#[derive(Default)]
pub struct Timers {
    copy_confirm: TimerSlot,
    form_reset: TimerSlot,
}

impl Timers {
    fn slot(&mut self, kind: TimerKind) -> &mut TimerSlot {
        match kind {
            TimerKind::CopyConfirm => &mut self.copy_confirm,
            TimerKind::FormReset => &mut self.form_reset,
        }
    }

    /// Cancel everything; used when the owning panel closes.
    pub fn clear_all(&mut self) {
        if !self.copy_confirm.is_armed() && !self.form_reset.is_armed() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        for handle in [self.copy_confirm.disarm(), self.form_reset.disarm()]
            .into_iter()
            .flatten()
        {
            window.clear_timeout_with_handle(handle);
        }
    }
}

/// Dispatch `action` after `delay_ms`, replacing any pending timer of `kind`.
pub fn arm(app: &AppHandle, kind: TimerKind, delay_ms: i32, action: Action) {
    let Some(window) = web::window() else {
        return;
    };
    let own_handle = Rc::new(Cell::new(None::<i32>));
    let handle_in_cb = own_handle.clone();
    let app_cb = app.clone();
    let callback = Closure::once_into_js(move || {
        if let Some(h) = handle_in_cb.get() {
            app_cb.borrow_mut().timers.slot(kind).fired(h);
        }
        app::dispatch(&app_cb, action);
    });
    match window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
    {
        Ok(handle) => {
            own_handle.set(Some(handle));
            if let Some(prev) = app.borrow_mut().timers.slot(kind).arm(handle) {
                window.clear_timeout_with_handle(prev);
            }
        }
        Err(e) => log::warn!("[timer] {:?} not armed: {:?}", kind, e),
    }
}
