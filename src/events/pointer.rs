use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::host::SharedRuntime;

pub fn wire_pointer_handlers(runtime: &SharedRuntime, canvas: &web::HtmlCanvasElement) {
    wire_mousemove(runtime);
    wire_touchstart(runtime);
    wire_touchend(runtime, canvas);
    wire_click(runtime, canvas);
}

fn wire_mousemove(runtime: &SharedRuntime) {
    let runtime = runtime.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        runtime.borrow_mut().pointer_move(client);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchstart(runtime: &SharedRuntime) {
    let Some(wnd) = web::window() else {
        return;
    };
    let runtime = runtime.clone();
    // non-passive so mobile browsers deliver the position before the tap
    dom::add_active_listener(&wnd, "touchstart", move |ev: web::Event| {
        let Some(touch) = ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().get(0))
        else {
            return;
        };
        let client = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
        runtime.borrow_mut().touch_start(client);
    });
}

// marks the gesture as touch so its synthetic click is told apart from a mouse click
fn wire_touchend(runtime: &SharedRuntime, canvas: &web::HtmlCanvasElement) {
    let runtime = runtime.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        if let Ok(mut runtime) = runtime.try_borrow_mut() {
            runtime.touch_end();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(runtime: &SharedRuntime, canvas: &web::HtmlCanvasElement) {
    let runtime = runtime.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        let hit = runtime.borrow_mut().click();
        if let Some(id) = hit {
            log::debug!("[click] object {}", id.0);
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
