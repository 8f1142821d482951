#![cfg(target_arch = "wasm32")]
use crate::core::model::MeshData;
use crate::core::ready::{self, Fulfill, Ready};
use crate::core::{DeviceClass, ViewerState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cleaver-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Fetch the product model in the background and publish it once decoded.
/// On failure `fulfill` is dropped, which cancels every waiter.
fn spawn_model_load(fulfill: Fulfill<Rc<MeshData>>) {
    spawn_local(async move {
        let started = Instant::now();
        match assets::load_model(constants::MODEL_PATH).await {
            Ok(mesh) => {
                log::info!("[model] decoded in {} ms", started.elapsed().as_millis());
                if let Err(e) = fulfill.fulfill(Rc::new(mesh)) {
                    log::warn!("[model] {}", e);
                }
            }
            Err(e) => log::error!("[model] load failed: {:?}", e),
        }
    });
}

/// Upload the model once both the model and the renderer exist, then drop
/// the loader. A failed load also drops it so the page stays usable.
fn spawn_model_attach(
    ready: Ready<Rc<MeshData>>,
    frame_ctx: Rc<RefCell<frame::FrameContext<'static>>>,
) {
    spawn_local(async move {
        let outcome = ready.wait().await;
        let Some(document) = dom::window_document() else {
            return;
        };
        match outcome {
            Ok(mesh) => frame_ctx.borrow_mut().attach_model(&mesh),
            Err(e) => {
                log::warn!("[model] not shown: {}", e);
                overlay::show_status(&document, constants::MODEL_UNAVAILABLE_TEXT);
            }
        }
        overlay::hide_loader(&document);
    });
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // start the download before the GPU handshake; they proceed in parallel
    let (model_fulfill, model_ready) = ready::channel::<Rc<MeshData>>();
    spawn_model_load(model_fulfill);

    let device = DeviceClass::from_viewport_width(dom::viewport_width());
    log::info!("[scroll] device class {:?}", device);
    let viewer = Rc::new(RefCell::new(ViewerState::new(device)));

    events::wire_resize(viewer.clone(), canvas.clone());
    events::wire_scroll(viewer.clone());
    events::wire_page_controls(&document, &viewer);
    events::wire_global_keydown(viewer.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        viewer: viewer.clone(),
        mouse_state: Rc::new(RefCell::new(input::MouseState::default())),
        drag_state: Rc::new(RefCell::new(input::DragState::default())),
    });

    {
        let v = viewer.borrow();
        overlay::highlight_section(&document, v.tracker.current());
        overlay::show_explore_mode(&document, v.mode());
        overlay::show_focus(&document, &v.focus, v.tracker.current());
    }

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        viewer,
        canvas,
        gpu,
    }));
    spawn_model_attach(model_ready, frame_ctx.clone());
    frame::start_loop(frame_ctx);

    Ok(())
}
