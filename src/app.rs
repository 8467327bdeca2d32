use crate::core::constants::{COPY_RESET_DELAY_MS, FORM_RESET_DELAY_MS};
use crate::core::{Action, Effect, RelayConfig, Shell};
use crate::stage::Stage;
use crate::timers::{self, TimerKind, Timers};
use crate::{dom, relay};
use std::cell::RefCell;
use std::rc::Rc;

/// Page-wide state: the shell (pure UI state) plus the browser resources
/// that render it.
pub struct App {
    pub shell: Shell,
    pub stage: Stage,
    pub relay: Option<RelayConfig>,
    pub timers: Timers,
}

pub type AppHandle = Rc<RefCell<App>>;

/// Single entry point for every UI event.
pub fn dispatch(app: &AppHandle, action: Action) {
    let effects = app.borrow_mut().shell.dispatch(action);
    for effect in effects {
        run_effect(app, effect);
    }
}

fn run_effect(app: &AppHandle, effect: Effect) {
    match effect {
        Effect::Layout => {
            let mut a = app.borrow_mut();
            let frame = a.shell.frame();
            a.stage.apply(&frame);
        }
        Effect::Opened(id) => {
            let a = app.borrow();
            a.stage.open(id, a.shell.content(), a.shell.panels().ephemeral());
        }
        Effect::Closed(id) => {
            let mut a = app.borrow_mut();
            a.timers.clear_all();
            a.stage.close(id);
        }
        Effect::PanelBody => {
            let a = app.borrow();
            a.stage
                .refresh_projects(a.shell.content(), a.shell.panels().ephemeral());
        }
        Effect::Form => {
            let a = app.borrow();
            a.stage.sync_form(&a.shell.panels().ephemeral().form);
        }
        Effect::Copy { text, ticket } => {
            dom::copy_to_clipboard(text);
            timers::arm(
                app,
                TimerKind::CopyConfirm,
                COPY_RESET_DELAY_MS,
                Action::CopyExpired(ticket),
            );
        }
        Effect::CopyState => {
            let a = app.borrow();
            a.stage
                .sync_copy(a.shell.panels().ephemeral().copied.shown());
        }
        Effect::Send(sub) => relay::spawn_send(app, sub),
        Effect::ArmFormReset(ticket) => timers::arm(
            app,
            TimerKind::FormReset,
            FORM_RESET_DELAY_MS,
            Action::FormExpired(ticket),
        ),
    }
}
