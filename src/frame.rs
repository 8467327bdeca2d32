use crate::app::AppHandle;
use crate::constants::MAX_FRAME_TIME_SEC;
use crate::core::schedule::FrameSlot;
use crate::dom;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: AppHandle,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
    pub started: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let time_sec = self.started.elapsed().as_secs_f32() % MAX_FRAME_TIME_SEC;
        let pointer = self.app.borrow().shell.pointer();

        dom::sync_canvas_backing_size(&self.canvas);
        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(time_sec, pointer) {
            log::error!("[frame] render error: {:?}", e);
        }
    }
}

/// requestAnimationFrame loop with at most one pending frame.
pub struct FrameLoop {
    slot: FrameSlot,
    tick: Option<Closure<dyn FnMut()>>,
    ctx: FrameContext,
}

pub type LoopHandle = Rc<RefCell<FrameLoop>>;

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("[gpu] background disabled: {:?}", e);
            None
        }
    }
}

pub fn new_loop(ctx: FrameContext) -> LoopHandle {
    Rc::new(RefCell::new(FrameLoop {
        slot: FrameSlot::default(),
        tick: None,
        ctx,
    }))
}

/// (Re)start the loop: cancel whatever is pending, then schedule a fresh tick.
pub fn start_loop(lp: &LoopHandle) {
    let Some(window) = web::window() else {
        return;
    };
    let (generation, stale) = lp.borrow_mut().slot.restart();
    if let Some(handle) = stale {
        _ = window.cancel_animation_frame(handle);
    }

    let weak = Rc::downgrade(lp);
    let tick = Closure::wrap(Box::new(move || {
        let Some(lp) = weak.upgrade() else {
            return;
        };
        {
            let mut l = lp.borrow_mut();
            l.slot.fired();
            if !l.slot.is_current(generation) {
                return;
            }
            l.ctx.frame();
        }
        request_next(&lp);
    }) as Box<dyn FnMut()>);
    lp.borrow_mut().tick = Some(tick);
    request_next(lp);
    log::debug!("[frame] loop started (generation {})", generation);
}

pub fn stop_loop(lp: &LoopHandle) {
    if !lp.borrow().slot.is_running() {
        return;
    }
    let stale = lp.borrow_mut().slot.stop();
    if let (Some(handle), Some(window)) = (stale, web::window()) {
        _ = window.cancel_animation_frame(handle);
    }
    log::debug!("[frame] loop stopped");
}

fn request_next(lp: &LoopHandle) {
    let Some(window) = web::window() else {
        return;
    };
    let mut l = lp.borrow_mut();
    let Some(tick) = l.tick.as_ref() else {
        return;
    };
    match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
        Ok(handle) => {
            if let Some(prev) = l.slot.scheduled(handle) {
                _ = window.cancel_animation_frame(prev);
            }
        }
        Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
    }
}
