use glam::{Mat4, Vec2, Vec3};
use web_sys as web;

/// Press position for telling clicks from drags.
#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub down: bool,
    pub down_x: f32,
    pub down_y: f32,
}

impl MouseState {
    pub fn press(&mut self, x: f32, y: f32) {
        self.down = true;
        self.down_x = x;
        self.down_y = y;
    }

    /// Release; true when the pointer stayed within `slop` of where it went down.
    pub fn release(&mut self, x: f32, y: f32, slop: f32) -> bool {
        let was_down = self.down;
        self.down = false;
        was_down && Vec2::new(x - self.down_x, y - self.down_y).length() <= slop
    }
}

/// Explore-mode drag in progress, tracked in css pixels.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last_x: f32,
    pub last_y: f32,
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, x: f32, y: f32) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last_x = x;
        self.last_y = y;
    }

    /// Movement since the previous sample, or `None` if this pointer is not dragging.
    pub fn advance(&mut self, pointer_id: i32, x: f32, y: f32) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = Vec2::new(x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            return true;
        }
        false
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// World position of a model-space anchor under the live model transform.
#[inline]
pub fn anchor_world_position(anchor: Vec3, model_yaw: f32, model_scale: f32) -> Vec3 {
    (Mat4::from_rotation_y(model_yaw) * Mat4::from_scale(Vec3::splat(model_scale)))
        .transform_point3(anchor)
}

/// Index of the nearest anchor hit by the ray.
pub fn pick_nearest(ray_origin: Vec3, ray_dir: Vec3, anchors: &[Vec3], radius: f32) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, c) in anchors.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *c, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width().max(1.0) as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height().max(1.0) as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Normalize wheel delta to css pixels regardless of `deltaMode`.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, viewport_height: f64) -> f32 {
    match delta_mode {
        1 => (delta_y * 16.0) as f32,              // lines
        2 => (delta_y * viewport_height) as f32,   // pages
        _ => delta_y as f32,
    }
}
