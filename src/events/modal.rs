use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::MODAL_EXIT_SELECTOR;
use crate::dom;
use crate::host::SharedRuntime;

/// Exit buttons react to `touchend` directly; the click the browser
/// synthesises for the same tap is then swallowed by the runtime.
pub fn wire_modal_exit_buttons(runtime: &SharedRuntime, document: &web::Document) {
    let Ok(buttons) = document.query_selector_all(MODAL_EXIT_SELECTOR) else {
        return;
    };
    for i in 0..buttons.length() {
        let Some(button) = buttons
            .item(i)
            .and_then(|n| n.dyn_into::<web::EventTarget>().ok())
        else {
            continue;
        };

        let rt_touch = runtime.clone();
        dom::add_active_listener(&button, "touchend", move |ev: web::Event| {
            ev.prevent_default();
            rt_touch.borrow_mut().modal_exit_touch();
        });

        let rt_click = runtime.clone();
        dom::add_active_listener(&button, "click", move |_ev: web::Event| {
            rt_click.borrow_mut().modal_exit_click();
        });
    }
    log::info!("[modal] wired {} exit buttons", buttons.length());
}
