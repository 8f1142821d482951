use crate::core::scene::{hotspot, Hotspot};

/// Hotspot selection and focus flags shown by the page.
///
/// Entering or leaving focus only changes this state; camera framing for a
/// focused hotspot is not defined, so neither mode nor camera is touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HotspotFocus {
    active: Option<&'static str>,
    hovered: Option<&'static str>,
    focused: bool,
}

impl HotspotFocus {
    /// Returns true when the state changed. Unknown ids are ignored.
    pub fn focus_on_hotspot(&mut self, id: &str) -> bool {
        let Some(h) = hotspot(id) else {
            return false;
        };
        if self.focused && self.active == Some(h.id) {
            return false;
        }
        self.active = Some(h.id);
        self.focused = true;
        true
    }

    pub fn exit_focus(&mut self) -> bool {
        if !self.focused && self.active.is_none() {
            return false;
        }
        self.focused = false;
        self.active = None;
        true
    }

    pub fn set_hovered(&mut self, id: Option<&str>) -> bool {
        let next = id.and_then(hotspot).map(|h| h.id);
        if next == self.hovered {
            return false;
        }
        self.hovered = next;
        true
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn active(&self) -> Option<&'static Hotspot> {
        self.active.and_then(hotspot)
    }

    #[inline]
    pub fn hovered(&self) -> Option<&'static Hotspot> {
        self.hovered.and_then(hotspot)
    }
}
