use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::host::SharedRuntime;
use crate::camera_sync::{self, PendingPose};

pub struct FrameContext {
    pub runtime: SharedRuntime,
    pub pending_pose: PendingPose,
    pub started: Instant,
    pub frames: u64,
}

impl FrameContext {
    pub fn new(runtime: SharedRuntime, pending_pose: PendingPose) -> Self {
        Self {
            runtime,
            pending_pose,
            started: Instant::now(),
            frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let now = self.started.elapsed().as_secs_f64();
        // an event handler may hold the runtime; skip this frame rather than panic
        let Ok(mut runtime) = self.runtime.try_borrow_mut() else {
            log::warn!("[frame] runtime busy, skipping frame {}", self.frames);
            return;
        };
        camera_sync::apply_pending(&mut runtime, &self.pending_pose);
        runtime.frame(now);
        self.frames += 1;
        if self.frames == 1 {
            log::info!("[frame] first frame rendered");
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
