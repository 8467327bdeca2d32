use crate::app::{self, AppHandle};
use crate::core::pointer::surface_local;
use crate::core::Action;
use crate::dom;
use web_sys as web;

/// Pointer position relative to the stage, in CSS pixels.
fn stage_local(ev: &web::PointerEvent, stage: &web::Element) -> Action {
    let rect = stage.get_bounding_client_rect();
    let [x, y] = surface_local(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
    );
    Action::PointerMove {
        x,
        y,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}

pub fn wire_pointermove(app: &AppHandle, stage: &web::HtmlElement) {
    let app = app.clone();
    let surface = stage.clone();
    dom::add_listener(stage, "pointermove", move |ev: web::PointerEvent| {
        let action = stage_local(&ev, &surface);
        app::dispatch(&app, action);
    });
}
