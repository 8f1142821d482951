use crate::constants::{EXIT_FOCUS_ID, EXPLORE_TOGGLE_ID, NAV_SELECTOR};
use crate::core::{SectionId, ViewerState};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Explore toggle, exit-focus button and section navigation.
pub fn wire_page_controls(document: &web::Document, viewer: &Rc<RefCell<ViewerState>>) {
    let viewer_toggle = viewer.clone();
    dom::add_click_listener(document, EXPLORE_TOGGLE_ID, move || {
        let mode = viewer_toggle.borrow_mut().toggle_mode();
        log::info!("[mode] {:?}", mode);
        if let Some(d) = dom::window_document() {
            overlay::show_explore_mode(&d, mode);
        }
    });

    let viewer_exit = viewer.clone();
    dom::add_click_listener(document, EXIT_FOCUS_ID, move || {
        if viewer_exit.borrow_mut().focus.exit_focus() {
            log::info!("[focus] exit");
        }
        if let Some(d) = dom::window_document() {
            let v = viewer_exit.borrow();
            overlay::show_focus(&d, &v.focus, v.tracker.current());
        }
    });

    wire_section_nav(document);
}

fn wire_section_nav(document: &web::Document) {
    let Ok(nodes) = document.query_selector_all(NAV_SELECTOR) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let Some(section) = el
            .get_attribute("data-section")
            .and_then(|id| SectionId::from_dom_id(&id))
        else {
            log::warn!("[scroll] nav entry without a known data-section");
            continue;
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            if let Some(d) = dom::window_document() {
                dom::scroll_to_element(&d, section.dom_id());
            }
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
