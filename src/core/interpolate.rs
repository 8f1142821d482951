use crate::core::choreography::ScrollTarget;
use crate::core::constants::{LOOK_AT, MOBILE_CAMERA_POSITION, SMOOTHING_FACTOR};
use crate::core::state::{DeviceClass, LiveTransform, ViewMode};
use glam::Vec3;

/// Per-frame exponential smoothing of the live transform toward the scroll target.
#[derive(Clone, Copy, Debug)]
pub struct Interpolator {
    pub smoothing: f32,
    pub device: DeviceClass,
}

impl Default for Interpolator {
    fn default() -> Self {
        Self {
            smoothing: SMOOTHING_FACTOR,
            device: DeviceClass::Desktop,
        }
    }
}

impl Interpolator {
    pub fn new(device: DeviceClass) -> Self {
        Self {
            device,
            ..Self::default()
        }
    }

    /// Where the camera is heading. Small screens hold a fixed framing instead
    /// of following the orbit.
    #[inline]
    pub fn camera_goal(&self, target: &ScrollTarget) -> Vec3 {
        match self.device {
            DeviceClass::Desktop => target.camera,
            DeviceClass::Mobile => MOBILE_CAMERA_POSITION,
        }
    }

    /// Advance one frame. Returns false without touching `live` when the
    /// orbit control owns the camera.
    pub fn step(&self, mode: ViewMode, live: &mut LiveTransform, target: &ScrollTarget) -> bool {
        if !mode.is_choreographed() {
            return false;
        }
        let k = self.smoothing;
        let eye = live.camera.eye;
        live.camera.eye = eye + (self.camera_goal(target) - eye) * k;
        live.camera.look_at(LOOK_AT);
        live.model_yaw += (target.model_yaw - live.model_yaw) * k;
        live.light = live.light.lerp(target.light, k);
        true
    }
}
