use glam::Vec3;

/// Scroll-anchored content regions, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Features,
    Details,
    Cta,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::Features,
        SectionId::Details,
        SectionId::Cta,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            SectionId::Hero => 0,
            SectionId::Features => 1,
            SectionId::Details => 2,
            SectionId::Cta => 3,
        }
    }

    /// Section at `index`, clamped to the last section.
    #[inline]
    pub fn from_index(index: usize) -> SectionId {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    /// Element id of the section in the page markup.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Features => "features",
            SectionId::Details => "details",
            SectionId::Cta => "cta",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<SectionId> {
        Self::ALL.iter().copied().find(|s| s.dom_id() == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyLight {
    pub position: Vec3,
    pub intensity: f32,
}

impl KeyLight {
    pub fn lerp(self, other: KeyLight, t: f32) -> KeyLight {
        KeyLight {
            position: self.position.lerp(other.position, t),
            intensity: self.intensity + (other.intensity - self.intensity) * t,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Section {
    pub id: SectionId,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
    /// Model rotation about +Y, radians.
    pub model_yaw: f32,
    pub light: KeyLight,
}

pub static SECTIONS: [Section; 4] = [
    Section {
        id: SectionId::Hero,
        camera_position: Vec3::new(0.8, 0.4, 1.0),
        camera_target: Vec3::ZERO,
        model_yaw: -0.5,
        light: KeyLight {
            position: Vec3::new(3.0, 3.0, 3.0),
            intensity: 2.0,
        },
    },
    Section {
        id: SectionId::Features,
        camera_position: Vec3::new(0.6, 0.1, 0.8),
        camera_target: Vec3::new(0.0, 0.05, 0.0),
        model_yaw: std::f32::consts::PI * 0.3,
        light: KeyLight {
            position: Vec3::new(2.0, 3.0, 2.0),
            intensity: 2.5,
        },
    },
    Section {
        id: SectionId::Details,
        camera_position: Vec3::new(0.5, 0.2, 0.7),
        camera_target: Vec3::ZERO,
        model_yaw: std::f32::consts::PI * 0.6,
        light: KeyLight {
            position: Vec3::new(2.0, 2.0, 3.0),
            intensity: 2.2,
        },
    },
    Section {
        id: SectionId::Cta,
        camera_position: Vec3::new(1.0, 0.3, 0.9),
        camera_target: Vec3::ZERO,
        model_yaw: std::f32::consts::PI * 0.9,
        light: KeyLight {
            position: Vec3::new(3.0, 3.0, 2.0),
            intensity: 2.8,
        },
    },
];

#[inline]
pub fn section(id: SectionId) -> &'static Section {
    &SECTIONS[id.index()]
}

/// Labeled anchor on the product model, in model space.
#[derive(Clone, Copy, Debug)]
pub struct Hotspot {
    pub id: &'static str,
    pub position: Vec3,
    pub label: &'static str,
    pub description: &'static str,
    pub camera_position: Vec3,
    pub camera_target: Vec3,
}

pub static HOTSPOTS: [Hotspot; 3] = [
    Hotspot {
        id: "blade",
        position: Vec3::new(0.02, 0.12, 0.0),
        label: "Razor Edge",
        description: "Hand-sharpened carbon steel blade with 15° cutting angle for precision cuts",
        camera_position: Vec3::new(0.4, 0.15, 0.5),
        camera_target: Vec3::new(0.02, 0.12, 0.0),
    },
    Hotspot {
        id: "handle",
        position: Vec3::new(0.0, -0.05, 0.0),
        label: "Ergonomic Grip",
        description: "Pakkawood handle contoured for comfort during extended use",
        camera_position: Vec3::new(0.35, 0.0, 0.4),
        camera_target: Vec3::new(0.0, -0.05, 0.0),
    },
    Hotspot {
        id: "rivets",
        position: Vec3::new(0.01, -0.02, 0.01),
        label: "Triple Rivets",
        description: "Brass rivets ensure lifetime handle-to-blade bond",
        camera_position: Vec3::new(0.4, 0.05, 0.35),
        camera_target: Vec3::new(0.01, -0.02, 0.01),
    },
];

pub fn hotspot(id: &str) -> Option<&'static Hotspot> {
    HOTSPOTS.iter().find(|h| h.id == id)
}
