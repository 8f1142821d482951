// Live view state owned by the frame loop.
//
// These types avoid platform APIs so the host-side tests can drive them
// directly; the web frontend reads them to build matrices each frame.

use crate::core::constants::{LOOK_AT, MOBILE_BREAKPOINT_PX};
use crate::core::scene::KeyLight;
use glam::{Mat4, Vec3};

/// Right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(eye: Vec3, fovy_radians: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye,
            target: LOOK_AT,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians,
            znear,
            zfar,
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    #[inline]
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }
}

/// Camera, model yaw and key light as currently displayed.
///
/// Approaches the scroll target through smoothing only; nothing assigns the
/// target to it directly.
#[derive(Clone, Debug)]
pub struct LiveTransform {
    pub camera: Camera,
    pub model_yaw: f32,
    pub light: KeyLight,
}

/// Scroll choreography or free orbit. Only a user toggle switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Scroll,
    Explore,
}

impl ViewMode {
    #[must_use]
    pub fn toggled(self) -> ViewMode {
        match self {
            ViewMode::Scroll => ViewMode::Explore,
            ViewMode::Explore => ViewMode::Scroll,
        }
    }

    #[inline]
    pub fn is_choreographed(self) -> bool {
        self == ViewMode::Scroll
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn from_viewport_width(css_px: f64) -> DeviceClass {
        if css_px < MOBILE_BREAKPOINT_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }
}
