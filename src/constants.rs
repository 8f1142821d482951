// Page binding, camera and renderer tuning constants.
//
// Choreography tuning lives in `core::constants`; this file holds the values
// only the browser frontend needs.
// Page elements
pub const CANVAS_ID: &str = "app-canvas";
pub const EXPLORE_TOGGLE_ID: &str = "explore-toggle";
pub const EXIT_FOCUS_ID: &str = "exit-focus";
pub const SCROLL_HINT_ID: &str = "scroll-hint";
pub const HOTSPOT_STATUS_ID: &str = "hotspot-status";
pub const LOADER_ID: &str = "loader";
pub const NAV_SELECTOR: &str = "[data-section]";
pub const NAV_ACTIVE_CLASS: &str = "active";

// Model asset
pub const MODEL_PATH: &str = "/models/cleaver/scene.gltf";
pub const MODEL_SCALE: f32 = 3.0;
pub const MODEL_UNAVAILABLE_TEXT: &str = "The 3D model could not be loaded.";

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const FILL_LIGHT_POSITION: [f32; 3] = [-2.0, 2.0, -2.0];
pub const FILL_LIGHT_INTENSITY: f32 = 0.8;

// Background and fog: page colour #0a0a0a in linear space for the sRGB surface
pub const BACKGROUND_RGB: [f32; 3] = [0.003, 0.003, 0.003];
pub const FOG_NEAR: f32 = 2.0;
pub const FOG_FAR: f32 = 5.0;

// Picking
pub const HOTSPOT_PICK_RADIUS: f32 = 0.03; // world units, after model scale
pub const CLICK_SLOP_PX: f32 = 4.0; // pointer travel that still counts as a click
