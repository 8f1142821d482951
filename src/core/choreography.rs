use crate::core::constants::{
    AZIMUTH_END, AZIMUTH_START, ELEVATION_END, ELEVATION_START, MIN_SCROLLABLE_PX, ORBIT_RADIUS,
};
use crate::core::scene::{section, KeyLight, SectionId};
use glam::Vec3;

/// Raw page geometry sampled on each scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    #[inline]
    pub fn scrollable(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        scroll_progress(self.scroll_y, self.scrollable())
    }
}

/// Normalize a scroll offset to [0, 1].
///
/// Pages shorter than the viewport have a scrollable height of zero or less;
/// the divisor is clamped so the result stays finite.
pub fn scroll_progress(offset: f64, scrollable: f64) -> f32 {
    let denom = if scrollable.is_finite() {
        scrollable.max(MIN_SCROLLABLE_PX)
    } else {
        MIN_SCROLLABLE_PX
    };
    let p = offset / denom;
    if !p.is_finite() {
        return 0.0;
    }
    p.clamp(0.0, 1.0) as f32
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Azimuth and elevation (radians) of the scroll orbit, linear in overall progress.
#[inline]
pub fn orbit_angles(progress: f32) -> (f32, f32) {
    let p = progress.clamp(0.0, 1.0);
    (
        lerp(AZIMUTH_START, AZIMUTH_END, p),
        lerp(ELEVATION_START, ELEVATION_END, p),
    )
}

/// Camera target on the fixed-radius orbit for a given progress.
pub fn orbit_position(progress: f32) -> Vec3 {
    let (azimuth, elevation) = orbit_angles(progress);
    let flat = ORBIT_RADIUS * elevation.cos();
    Vec3::new(
        flat * azimuth.sin(),
        ORBIT_RADIUS * elevation.sin(),
        flat * azimuth.cos(),
    )
}

/// Discrete section pair plus the local blend factor between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBlend {
    pub current: SectionId,
    pub next: SectionId,
    pub blend: f32,
}

pub fn section_blend(progress: f32) -> SectionBlend {
    let count = SectionId::ALL.len();
    let scaled = progress.clamp(0.0, 1.0) * count as f32;
    let index = (scaled.floor() as usize).min(count - 1);
    SectionBlend {
        current: SectionId::from_index(index),
        next: SectionId::from_index(index + 1),
        blend: scaled.fract(),
    }
}

/// Everything the frame loop chases, recomputed per scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTarget {
    pub progress: f32,
    pub sections: SectionBlend,
    pub camera: Vec3,
    pub model_yaw: f32,
    pub light: KeyLight,
}

pub fn map_scroll(progress: f32) -> ScrollTarget {
    let progress = progress.clamp(0.0, 1.0);
    let sections = section_blend(progress);
    let from = section(sections.current);
    let to = section(sections.next);
    ScrollTarget {
        progress,
        sections,
        camera: orbit_position(progress),
        model_yaw: lerp(from.model_yaw, to.model_yaw, sections.blend),
        light: from.light.lerp(to.light, sections.blend),
    }
}

/// Latest scroll-derived target plus the section last reported to the page.
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    current: SectionId,
    target: ScrollTarget,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            current: SectionId::Hero,
            target: map_scroll(0.0),
        }
    }

    /// Recompute the target. Returns the new section only when it differs
    /// from the previously reported one.
    pub fn observe(&mut self, metrics: ScrollMetrics) -> Option<SectionId> {
        self.observe_progress(metrics.progress())
    }

    pub fn observe_progress(&mut self, progress: f32) -> Option<SectionId> {
        self.target = map_scroll(progress);
        let section = self.target.sections.current;
        if section == self.current {
            return None;
        }
        self.current = section;
        Some(section)
    }

    #[inline]
    pub fn current(&self) -> SectionId {
        self.current
    }

    #[inline]
    pub fn target(&self) -> &ScrollTarget {
        &self.target
    }
}
