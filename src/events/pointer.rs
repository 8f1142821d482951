use crate::constants::{CLICK_SLOP_PX, HOTSPOT_PICK_RADIUS, MODEL_SCALE};
use crate::core::{ViewMode, ViewerState, HOTSPOTS};
use crate::dom;
use crate::input;
use crate::overlay;
use crate::render;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub viewer: Rc<RefCell<ViewerState>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

/// Hotspot under the canvas pixel, if any.
fn pick_hotspot(w: &InputWiring, sx: f32, sy: f32) -> Option<&'static str> {
    let viewer = w.viewer.borrow();
    let (ro, rd) = render::screen_to_world_ray(&w.canvas, sx, sy, &viewer.live.camera);
    let anchors: Vec<Vec3> = HOTSPOTS
        .iter()
        .map(|h| input::anchor_world_position(h.position, viewer.live.model_yaw, MODEL_SCALE))
        .collect();
    input::pick_nearest(ro, rd, &anchors, HOTSPOT_PICK_RADIUS).map(|i| HOTSPOTS[i].id)
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.canvas.is_connected() {
            return;
        }
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let delta = w.drag_state.borrow_mut().advance(
            ev.pointer_id(),
            ev.client_x() as f32,
            ev.client_y() as f32,
        );
        if let Some(d) = delta {
            if let Some(orbit) = w.viewer.borrow_mut().orbit_mut() {
                orbit.rotate(d.x, d.y);
            }
            return;
        }

        let picked = pick_hotspot(&w, pos.x, pos.y);
        let changed = w.viewer.borrow_mut().focus.set_hovered(picked);
        if changed {
            if let Some(document) = dom::window_document() {
                overlay::show_hovered(&document, &w.viewer.borrow().focus);
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let (x, y) = (ev.client_x() as f32, ev.client_y() as f32);
        w.mouse_state.borrow_mut().press(x, y);
        if w.viewer.borrow().mode() == ViewMode::Explore {
            w.drag_state.borrow_mut().begin(ev.pointer_id(), x, y);
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if w.drag_state.borrow_mut().end(ev.pointer_id()) {
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
        }
        let clicked = w.mouse_state.borrow_mut().release(
            ev.client_x() as f32,
            ev.client_y() as f32,
            CLICK_SLOP_PX,
        );
        if !clicked {
            return;
        }

        let hovered = w.viewer.borrow().focus.hovered().map(|h| h.id);
        let Some(id) = hovered else {
            return;
        };
        if w.viewer.borrow_mut().focus.focus_on_hotspot(id) {
            log::info!("[focus] hotspot {}", id);
            if let Some(document) = dom::window_document() {
                let v = w.viewer.borrow();
                overlay::show_focus(&document, &v.focus, v.tracker.current());
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Wheel zooms the orbit in explore mode; otherwise the page scrolls as usual.
fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let mut viewer = w.viewer.borrow_mut();
        let Some(orbit) = viewer.orbit_mut() else {
            return;
        };
        ev.prevent_default();
        let viewport_height = web::window()
            .and_then(|wnd| wnd.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        orbit.zoom(input::wheel_delta_px(
            ev.delta_y(),
            ev.delta_mode(),
            viewport_height,
        ));
    }) as Box<dyn FnMut(_)>);

    // passive: false so preventDefault can stop the page scrolling under an orbit zoom
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}
