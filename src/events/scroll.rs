use crate::core::{DeviceClass, ViewerState};
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn handle_scroll(viewer: &Rc<RefCell<ViewerState>>) {
    let metrics = dom::scroll_metrics();
    let Some(section) = viewer.borrow_mut().on_scroll(metrics) else {
        return;
    };
    log::info!(
        "[scroll] section -> {} (progress {:.3})",
        section.dom_id(),
        viewer.borrow().tracker.target().progress
    );
    if let Some(document) = dom::window_document() {
        overlay::highlight_section(&document, section);
        overlay::show_focus(&document, &viewer.borrow().focus, section);
    }
}

/// Track page scroll. Runs once immediately so a restored scroll position
/// is picked up before the first event.
pub fn wire_scroll(viewer: Rc<RefCell<ViewerState>>) {
    handle_scroll(&viewer);
    dom::add_passive_window_listener("scroll", move || handle_scroll(&viewer));
}

/// Keep the canvas backing store, device class and scroll range in step with the viewport.
pub fn wire_resize(viewer: Rc<RefCell<ViewerState>>, canvas: web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(&canvas);
    dom::add_passive_window_listener("resize", move || {
        dom::sync_canvas_backing_size(&canvas);
        let device = DeviceClass::from_viewport_width(dom::viewport_width());
        if device != viewer.borrow().device() {
            log::info!("[scroll] device class -> {:?}", device);
            viewer.borrow_mut().set_device(device);
        }
        // document height may have changed under the same scroll offset
        handle_scroll(&viewer);
    });
}
