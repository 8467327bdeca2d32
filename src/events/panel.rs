use crate::app::{self, AppHandle};
use crate::constants::{
    ACTION_ATTR, CATEGORY_ATTR, CONTACT_FORM_ID, CONTACT_MESSAGE_ID, CONTACT_NAME_ID, PANEL_ATTR,
};
use crate::core::Action;
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Delegated handlers on the stage: `data-action` clicks, form submit and
/// field edits. Panel bodies are re-rendered freely, so nothing binds to
/// elements inside them.
pub fn wire_stage(app: &AppHandle, stage: &web::HtmlElement) {
    wire_clicks(app, stage);
    wire_submit(app, stage);
    wire_inputs(app, stage);
}

fn wire_clicks(app: &AppHandle, stage: &web::HtmlElement) {
    let app = app.clone();
    dom::add_listener(stage, "click", move |ev: web::MouseEvent| {
        let Some(el) = dom::closest_with_attr(&ev, ACTION_ATTR) else {
            return;
        };
        let Some(name) = el.get_attribute(ACTION_ATTR) else {
            return;
        };
        let panel = el.get_attribute(PANEL_ATTR);
        let category = el.get_attribute(CATEGORY_ATTR);
        match Action::from_dom(&name, panel.as_deref(), category.as_deref()) {
            Some(action) => app::dispatch(&app, action),
            None => log::debug!("[events] unknown action {:?}", name),
        }
    });
}

fn wire_submit(app: &AppHandle, stage: &web::HtmlElement) {
    let app = app.clone();
    dom::add_listener(stage, "submit", move |ev: web::Event| {
        let is_contact = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .is_some_and(|el| el.id() == CONTACT_FORM_ID);
        if !is_contact {
            return;
        }
        ev.prevent_default();
        app::dispatch(&app, Action::Submit);
    });
}

fn wire_inputs(app: &AppHandle, stage: &web::HtmlElement) {
    let app = app.clone();
    dom::add_listener(stage, "input", move |ev: web::Event| {
        let Some(target) = ev.target() else {
            return;
        };
        let action = if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
            (input.id() == CONTACT_NAME_ID).then(|| Action::EditName(input.value()))
        } else if let Some(area) = target.dyn_ref::<web::HtmlTextAreaElement>() {
            (area.id() == CONTACT_MESSAGE_ID).then(|| Action::EditMessage(area.value()))
        } else {
            None
        };
        if let Some(action) = action {
            app::dispatch(&app, action);
        }
    });
}

pub fn wire_viewport(app: &AppHandle) {
    let Some(window) = web::window() else {
        return;
    };
    let app = app.clone();
    dom::add_listener(&window, "resize", move |_: web::Event| {
        app::dispatch(
            &app,
            Action::Viewport {
                width: dom::viewport_width(),
            },
        );
    });
}
