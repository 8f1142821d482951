use crate::core::choreography::{ScrollMetrics, ScrollTracker};
use crate::core::constants::{
    CAMERA_FAR, CAMERA_NEAR, FOV_DESKTOP_DEG, FOV_MOBILE_DEG, MOBILE_CAMERA_POSITION,
};
use crate::core::focus::HotspotFocus;
use crate::core::interpolate::Interpolator;
use crate::core::orbit::OrbitControl;
use crate::core::scene::{section, SectionId};
use crate::core::state::{Camera, DeviceClass, LiveTransform, ViewMode};

/// All mutable view state shared by the scroll handler, pointer handlers
/// and the frame callback. Lives in one `Rc<RefCell<_>>` on the page thread.
#[derive(Clone, Debug)]
pub struct ViewerState {
    pub tracker: ScrollTracker,
    pub live: LiveTransform,
    pub focus: HotspotFocus,
    interpolator: Interpolator,
    mode: ViewMode,
    orbit: Option<OrbitControl>,
}

impl ViewerState {
    pub fn new(device: DeviceClass) -> Self {
        let hero = section(SectionId::Hero);
        let eye = match device {
            DeviceClass::Desktop => hero.camera_position,
            DeviceClass::Mobile => MOBILE_CAMERA_POSITION,
        };
        Self {
            tracker: ScrollTracker::new(),
            live: LiveTransform {
                camera: Camera::new(eye, fov_for(device), CAMERA_NEAR, CAMERA_FAR),
                model_yaw: hero.model_yaw,
                light: hero.light,
            },
            focus: HotspotFocus::default(),
            interpolator: Interpolator::new(device),
            mode: ViewMode::Scroll,
            orbit: None,
        }
    }

    #[inline]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[inline]
    pub fn device(&self) -> DeviceClass {
        self.interpolator.device
    }

    pub fn set_device(&mut self, device: DeviceClass) {
        self.interpolator.device = device;
        self.live.camera.fovy_radians = fov_for(device);
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.live.camera.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Scroll event entry point; `Some` only when the section changed.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> Option<SectionId> {
        self.tracker.observe(metrics)
    }

    /// Flip between scroll choreography and explore. Entering explore seeds
    /// the orbit control from the live camera; leaving drops it and the
    /// interpolator resumes from wherever the camera is.
    pub fn toggle_mode(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        self.orbit = match self.mode {
            ViewMode::Explore => Some(OrbitControl::from_eye(self.live.camera.eye)),
            ViewMode::Scroll => None,
        };
        self.mode
    }

    #[inline]
    pub fn orbit_mut(&mut self) -> Option<&mut OrbitControl> {
        self.orbit.as_mut()
    }

    /// One animation frame. Returns whether anything moved.
    pub fn frame(&mut self) -> bool {
        match self.mode {
            ViewMode::Scroll => {
                self.interpolator
                    .step(self.mode, &mut self.live, self.tracker.target())
            }
            ViewMode::Explore => match self.orbit.as_mut() {
                Some(orbit) => orbit.update(&mut self.live.camera),
                None => false,
            },
        }
    }
}

#[inline]
fn fov_for(device: DeviceClass) -> f32 {
    match device {
        DeviceClass::Desktop => FOV_DESKTOP_DEG.to_radians(),
        DeviceClass::Mobile => FOV_MOBILE_DEG.to_radians(),
    }
}
