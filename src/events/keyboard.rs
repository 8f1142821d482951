use crate::core::ViewerState;
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_global_keydown(viewer: Rc<RefCell<ViewerState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.key() != "Escape" {
            return;
        }
        let exited = viewer.borrow_mut().focus.exit_focus();
        if exited {
            log::info!("[focus] exit (escape)");
            if let Some(document) = dom::window_document() {
                let v = viewer.borrow();
                overlay::show_focus(&document, &v.focus, v.tracker.current());
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

