pub mod choreography;
pub mod constants;
pub mod focus;
pub mod interpolate;
pub mod model;
pub mod orbit;
pub mod ready;
pub mod scene;
pub mod state;
pub mod viewer;

pub use choreography::*;
pub use focus::HotspotFocus;
pub use interpolate::Interpolator;
pub use orbit::OrbitControl;
pub use scene::*;
pub use state::*;
pub use viewer::ViewerState;

// Shaders bundled as string constants
pub static MODEL_WGSL: &str = include_str!("../../shaders/model.wgsl");
