// Host-side tests for the scroll-to-camera mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod choreography {
        include!("../src/core/choreography.rs");
    }
}

use crate::core::choreography::*;
use crate::core::constants::*;
use crate::core::scene::{section, SectionId};
use std::f32::consts::PI;

const EPS: f32 = 1e-4;

#[test]
fn azimuth_runs_from_sixty_to_forty_five_degrees() {
    assert!((orbit_angles(0.0).0 - PI / 3.0).abs() < EPS);
    assert!((orbit_angles(0.5).0 - 0.9163).abs() < EPS);
    assert!((orbit_angles(1.0).0 - PI / 4.0).abs() < EPS);
}

#[test]
fn azimuth_never_increases_with_progress() {
    let mut prev = orbit_angles(0.0).0;
    for i in 1..=200 {
        let az = orbit_angles(i as f32 / 200.0).0;
        assert!(az <= prev + 1e-6, "azimuth went up at step {i}");
        prev = az;
    }
}

#[test]
fn scroll_orbit_keeps_a_constant_radius() {
    for i in 0..=20 {
        let p = i as f32 / 20.0;
        let r = orbit_position(p).length();
        assert!((r - ORBIT_RADIUS).abs() < EPS, "radius {r} at progress {p}");
    }
}

#[test]
fn orbit_elevation_is_above_the_model() {
    for p in [0.0, 0.5, 1.0] {
        assert!(orbit_position(p).y > 0.0);
    }
}

#[test]
fn progress_is_finite_for_degenerate_pages() {
    for scrollable in [0.0, -300.0, f64::NAN, f64::INFINITY] {
        for offset in [0.0, 10.0, 5000.0, f64::NAN] {
            let p = scroll_progress(offset, scrollable);
            assert!(p.is_finite());
            assert!((0.0..=1.0).contains(&p));
        }
    }
}

#[test]
fn progress_uses_document_minus_viewport() {
    let m = ScrollMetrics {
        scroll_y: 500.0,
        document_height: 3000.0,
        viewport_height: 1000.0,
    };
    assert!((m.progress() - 0.25).abs() < EPS);

    let short_page = ScrollMetrics {
        scroll_y: 0.0,
        document_height: 600.0,
        viewport_height: 900.0,
    };
    assert_eq!(short_page.progress(), 0.0);
}

#[test]
fn progress_clamps_overscroll() {
    assert_eq!(scroll_progress(-40.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(1200.0, 1000.0), 1.0);
}

#[test]
fn section_blend_splits_page_into_quarters() {
    let b = section_blend(0.375);
    assert_eq!(b.current, SectionId::Features);
    assert_eq!(b.next, SectionId::Details);
    assert!((b.blend - 0.5).abs() < EPS);

    let end = section_blend(1.0);
    assert_eq!(end.current, SectionId::Cta);
    assert_eq!(end.next, SectionId::Cta);
    assert!(end.blend.abs() < EPS);
}

#[test]
fn model_yaw_and_light_blend_between_sections() {
    let t = map_scroll(0.375);
    assert!((t.model_yaw - PI * 0.45).abs() < EPS);

    let features = section(SectionId::Features).light;
    let details = section(SectionId::Details).light;
    assert!((t.light.intensity - (features.intensity + details.intensity) * 0.5).abs() < EPS);

    let top = map_scroll(0.0);
    assert_eq!(top.model_yaw, section(SectionId::Hero).model_yaw);
}

#[test]
fn section_change_fires_once_per_boundary() {
    let mut tracker = ScrollTracker::new();
    assert_eq!(tracker.current(), SectionId::Hero);

    let mut changes = Vec::new();
    for i in 0..=1000 {
        if let Some(s) = tracker.observe_progress(i as f32 / 1000.0) {
            changes.push(s);
        }
    }
    assert_eq!(
        changes,
        vec![SectionId::Features, SectionId::Details, SectionId::Cta]
    );

    let mut back = 0;
    for i in (0..=1000).rev() {
        if tracker.observe_progress(i as f32 / 1000.0).is_some() {
            back += 1;
        }
    }
    assert_eq!(back, 3);
    assert_eq!(tracker.current(), SectionId::Hero);
}

#[test]
fn repeated_scroll_in_one_section_reports_nothing() {
    let mut tracker = ScrollTracker::new();
    assert_eq!(tracker.observe_progress(0.30), Some(SectionId::Features));
    assert_eq!(tracker.observe_progress(0.31), None);
    assert_eq!(tracker.observe_progress(0.49), None);
    assert!((tracker.target().progress - 0.49).abs() < EPS);
}

#[test]
fn target_follows_every_scroll_sample() {
    let mut tracker = ScrollTracker::new();
    tracker.observe(ScrollMetrics {
        scroll_y: 2000.0,
        document_height: 3000.0,
        viewport_height: 1000.0,
    });
    assert!((tracker.target().camera - orbit_position(1.0)).length() < EPS);
}

#[test]
fn dom_ids_round_trip() {
    for id in SectionId::ALL {
        assert_eq!(SectionId::from_dom_id(id.dom_id()), Some(id));
    }
    assert_eq!(SectionId::from_dom_id("footer"), None);
}
