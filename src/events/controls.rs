use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CAMERA_CYCLE_ID, MUSIC_TOGGLE_ID, THEME_TOGGLE_ID};
use crate::dom;
use crate::host::SharedRuntime;

pub fn wire_ui_buttons(runtime: &SharedRuntime, document: &web::Document) {
    let rt = runtime.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let theme = rt.borrow_mut().toggle_theme();
        log::info!("[theme] toggled to {}", theme);
    });

    let rt = runtime.clone();
    dom::add_click_listener(document, CAMERA_CYCLE_ID, move || {
        rt.borrow_mut().cycle_camera();
    });

    let rt = runtime.clone();
    dom::add_click_listener(document, MUSIC_TOGGLE_ID, move || {
        let playing = rt.borrow_mut().toggle_background_music();
        log::info!("[audio] background {}", if playing { "on" } else { "off" });
    });
}

pub fn wire_video_ended(runtime: &SharedRuntime, video: &web::HtmlVideoElement) {
    let rt = runtime.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let action = rt.borrow_mut().video_ended();
        log::info!("[monitor] video ended -> {:?}", action);
    }) as Box<dyn FnMut()>);
    _ = video.add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_resize(runtime: &SharedRuntime, canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let rt = runtime.clone();
    let canvas_resize = canvas.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        rt.borrow_mut().resize(dom::viewport());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
