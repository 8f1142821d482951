use crate::core::model::MeshData;
use crate::core::ViewerState;
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub viewer: Rc<RefCell<ViewerState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
}

impl<'a> FrameContext<'a> {
    /// Runs once per animation frame; must not block or await.
    pub fn frame(&mut self) {
        let w = self.canvas.width();
        let h = self.canvas.height();
        {
            let mut viewer = self.viewer.borrow_mut();
            viewer.set_aspect(w, h);
            viewer.frame();
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            let viewer = self.viewer.borrow();
            match g.render(&viewer.live) {
                Ok(()) => {}
                // surface is reconfigured on the next resize check
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {}
                Err(e) => log::error!("render error: {:?}", e),
            }
        }
    }

    pub fn attach_model(&mut self, mesh: &MeshData) {
        match &mut self.gpu {
            Some(g) => g.set_model(mesh),
            None => log::warn!("[gpu] model ready but no renderer; skipping upload"),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
