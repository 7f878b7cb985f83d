use diorama_core::Modal;
use web_sys as web;

use crate::constants::{HIDDEN_CLASS, MODAL_SELECTOR};

fn modal_element(document: &web::Document, modal: Modal) -> Option<web::Element> {
    let selector = format!("{}.{}", MODAL_SELECTOR, modal.name());
    document.query_selector(&selector).ok().flatten()
}

#[inline]
pub fn show(document: &web::Document, modal: Modal) {
    if let Some(el) = modal_element(document, modal) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:block");
    } else {
        log::warn!("[modal] no element for {}", modal.name());
    }
}

#[inline]
pub fn hide(document: &web::Document, modal: Modal) {
    if let Some(el) = modal_element(document, modal) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, modal: Modal) -> bool {
    if let Some(el) = modal_element(document, modal) {
        if el.class_list().contains(HIDDEN_CLASS) {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    true
}

