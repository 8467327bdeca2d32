use crate::app::{self, AppHandle};
use crate::core::Action;
use crate::dom;
use web_sys as web;

pub fn wire_global_keydown(app: &AppHandle) {
    let Some(window) = web::window() else {
        return;
    };
    let app = app.clone();
    dom::add_listener(&window, "keydown", move |ev: web::KeyboardEvent| {
        if let Some(action) = Action::for_key(&ev.key()) {
            app::dispatch(&app, action);
        }
    });
}
