use crate::core::constants::{
    LOOK_AT, ORBIT_DAMPING, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPSILON,
    ORBIT_REST_VELOCITY, ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED,
};
use crate::core::state::Camera;
use glam::Vec3;
use std::f32::consts::PI;

/// Free pointer-driven orbit around the origin used in explore mode.
///
/// Azimuth is unrestricted, polar angle spans the full sphere (minus a small
/// epsilon at the poles), distance is clamped and there is no panning.
/// Rotation input is accumulated and released gradually each frame, giving
/// the damped inertia of a typical orbit control.
#[derive(Clone, Debug)]
pub struct OrbitControl {
    distance: f32,
    azimuth: f32,
    polar: f32,
    pending_azimuth: f32,
    pending_polar: f32,
    dirty: bool,
}

impl OrbitControl {
    /// Seed from an existing eye position so entering explore mode does not jump.
    pub fn from_eye(eye: Vec3) -> Self {
        let offset = eye - LOOK_AT;
        let len = offset.length();
        let (azimuth, polar) = if len > f32::EPSILON {
            (
                offset.x.atan2(offset.z),
                (offset.y / len).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, PI * 0.5)
        };
        Self {
            distance: len.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE),
            azimuth,
            polar: polar.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON),
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            dirty: (len - len.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE)).abs() > f32::EPSILON,
        }
    }

    #[inline]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    #[inline]
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    #[inline]
    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn position(&self) -> Vec3 {
        let s = self.polar.sin();
        LOOK_AT
            + Vec3::new(
                self.distance * s * self.azimuth.sin(),
                self.distance * self.polar.cos(),
                self.distance * s * self.azimuth.cos(),
            )
    }

    /// Queue a drag of `dx`, `dy` css pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if !dx.is_finite() || !dy.is_finite() {
            return;
        }
        self.pending_azimuth -= dx * ORBIT_ROTATE_SPEED;
        self.pending_polar -= dy * ORBIT_ROTATE_SPEED;
    }

    /// Wheel zoom; positive `delta` moves away from the model.
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        let scale = (1.0 + delta * ORBIT_ZOOM_SPEED).max(0.1);
        self.distance = (self.distance * scale).clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.dirty = true;
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.dirty
            || self.pending_azimuth.abs() > ORBIT_REST_VELOCITY
            || self.pending_polar.abs() > ORBIT_REST_VELOCITY
    }

    /// Apply one frame of damped motion to `camera`. Leaves the camera
    /// untouched and returns false when at rest.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if !self.is_moving() {
            self.pending_azimuth = 0.0;
            self.pending_polar = 0.0;
            return false;
        }
        self.azimuth += self.pending_azimuth * ORBIT_DAMPING;
        self.polar = (self.polar + self.pending_polar * ORBIT_DAMPING)
            .clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        self.pending_azimuth *= 1.0 - ORBIT_DAMPING;
        self.pending_polar *= 1.0 - ORBIT_DAMPING;
        self.dirty = false;
        camera.eye = self.position();
        camera.look_at(LOOK_AT);
        true
    }
}
