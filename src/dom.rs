use crate::core::ScrollMetrics;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Register a passive window listener that lives for the page lifetime.
pub fn add_passive_window_listener(event: &str, mut handler: impl FnMut() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Current scroll offset and page/viewport heights.
pub fn scroll_metrics() -> ScrollMetrics {
    let Some(window) = web::window() else {
        return ScrollMetrics::default();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let viewport_height = js_number(window.inner_height());
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(viewport_height);
    ScrollMetrics {
        scroll_y,
        document_height,
        viewport_height,
    }
}

pub fn viewport_width() -> f64 {
    web::window()
        .map(|w| js_number(w.inner_width()))
        .unwrap_or(0.0)
}

#[inline]
fn js_number(v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

/// Smoothly scroll the element with `id` into view.
pub fn scroll_to_element(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[inline]
pub fn set_visible(el: &web::Element, visible: bool) {
    let cl = el.class_list();
    if visible {
        _ = cl.remove_1("hidden");
        _ = el.remove_attribute("hidden");
    } else {
        _ = cl.add_1("hidden");
        _ = el.set_attribute("hidden", "");
    }
}

pub fn set_body_cursor(document: &web::Document, cursor: &str) {
    if let Some(body) = document.body() {
        _ = body.style().set_property("cursor", cursor);
    }
}
