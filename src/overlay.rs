use crate::constants::{
    EXIT_FOCUS_ID, EXPLORE_TOGGLE_ID, HOTSPOT_STATUS_ID, LOADER_ID, NAV_ACTIVE_CLASS,
    NAV_SELECTOR, SCROLL_HINT_ID,
};
use crate::core::{HotspotFocus, SectionId, ViewMode};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Highlight the nav entries for `current` (desktop pills and mobile dots).
pub fn highlight_section(document: &web::Document, current: SectionId) {
    let Ok(nodes) = document.query_selector_all(NAV_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let is_current = el
            .get_attribute("data-section")
            .and_then(|id| SectionId::from_dom_id(&id))
            == Some(current);
        let cl = el.class_list();
        if is_current {
            _ = cl.add_1(NAV_ACTIVE_CLASS);
            _ = el.set_attribute("aria-current", "true");
        } else {
            _ = cl.remove_1(NAV_ACTIVE_CLASS);
            _ = el.remove_attribute("aria-current");
        }
    }
}

pub fn show_explore_mode(document: &web::Document, mode: ViewMode) {
    if let Some(el) = document.get_element_by_id(EXPLORE_TOGGLE_ID) {
        let exploring = mode == ViewMode::Explore;
        _ = el.set_attribute("aria-pressed", if exploring { "true" } else { "false" });
        _ = el.set_attribute(
            "aria-label",
            if exploring {
                "Exit explore mode"
            } else {
                "Enter explore mode"
            },
        );
        let label = if exploring { "Exit Explore" } else { "Explore" };
        match el.query_selector("[data-label]") {
            Ok(Some(span)) => span.set_text_content(Some(label)),
            _ => el.set_text_content(Some(label)),
        }
    }
}

/// Sync focus-dependent controls: exit button, scroll hint and the status region.
pub fn show_focus(document: &web::Document, focus: &HotspotFocus, current: SectionId) {
    if let Some(el) = document.get_element_by_id(EXIT_FOCUS_ID) {
        dom::set_visible(&el, focus.is_focused());
    }
    if let Some(el) = document.get_element_by_id(SCROLL_HINT_ID) {
        dom::set_visible(&el, current == SectionId::Hero && !focus.is_focused());
    }
    show_hovered(document, focus);
}

pub fn show_hovered(document: &web::Document, focus: &HotspotFocus) {
    if let Some(el) = document.get_element_by_id(HOTSPOT_STATUS_ID) {
        el.set_text_content(focus.hovered().map(|h| h.description));
    }
    dom::set_body_cursor(
        document,
        if focus.hovered().is_some() {
            "pointer"
        } else {
            "auto"
        },
    );
}

#[inline]
pub fn hide_loader(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        dom::set_visible(&el, false);
    }
}

/// Replace the status region text, e.g. when the model cannot be shown.
pub fn show_status(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(HOTSPOT_STATUS_ID) {
        el.set_text_content(Some(text));
    }
}
