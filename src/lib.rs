#![cfg(target_arch = "wasm32")]
use crate::app::App;
use crate::core::{RelayConfig, Shell, CONTENT};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod relay;
mod render;
mod stage;
mod timers;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("prism-folio starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn load_relay_config() -> Option<RelayConfig> {
    match RelayConfig::from_env() {
        Ok(c) => Some(c),
        Err(e) => {
            log::warn!("[relay] {}; contact form will report failures", e);
            None
        }
    }
}

// Pause rendering while the tab is hidden; resume with a fresh loop.
fn wire_visibility(document: &web::Document, lp: &frame::LoopHandle) {
    let doc = document.clone();
    let lp = lp.clone();
    dom::add_listener(document, "visibilitychange", move |_: web::Event| {
        if doc.visibility_state() == web::VisibilityState::Hidden {
            frame::stop_loop(&lp);
        } else {
            frame::start_loop(&lp);
        }
    });
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    dom::sync_canvas_backing_size(&canvas);

    let stage = stage::Stage::build(&document, &CONTENT)?;
    let stage_el = stage.root().clone();
    let app = Rc::new(RefCell::new(App {
        shell: Shell::new(&CONTENT, dom::viewport_width()),
        stage,
        relay: load_relay_config(),
        timers: timers::Timers::default(),
    }));
    {
        let mut a = app.borrow_mut();
        let first = a.shell.frame();
        a.stage.apply(&first);
    }

    events::pointer::wire_pointermove(&app, &stage_el);
    events::keyboard::wire_global_keydown(&app);
    events::panel::wire_stage(&app, &stage_el);
    events::panel::wire_viewport(&app);

    // The page stays fully usable without a background
    let Some(gpu) = frame::init_gpu(&canvas).await else {
        return Ok(());
    };
    let lp = frame::new_loop(frame::FrameContext {
        app: app.clone(),
        canvas,
        gpu,
        started: Instant::now(),
    });
    wire_visibility(&document, &lp);
    if document.visibility_state() != web::VisibilityState::Hidden {
        frame::start_loop(&lp);
    }
    Ok(())
}
