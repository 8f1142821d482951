use glam::Vec3;

// Choreography tuning shared by the scroll mapper and the frame interpolator.

// Scroll orbit (spherical, centred on the origin)
pub const ORBIT_RADIUS: f32 = 1.45; // constant camera distance while scrolling
pub const AZIMUTH_START: f32 = std::f32::consts::FRAC_PI_3; // 60 degrees at the top of the page
pub const AZIMUTH_END: f32 = std::f32::consts::FRAC_PI_4; // 45 degrees at the bottom
pub const ELEVATION_START: f32 = 0.25; // radians
pub const ELEVATION_END: f32 = 0.15;

// Smallest scrollable height used as a divisor
pub const MIN_SCROLLABLE_PX: f64 = 1.0;

// Fraction of the remaining distance covered per frame
pub const SMOOTHING_FACTOR: f32 = 0.08;

// Perspective camera
pub const FOV_DESKTOP_DEG: f32 = 45.0;
pub const FOV_MOBILE_DEG: f32 = 55.0; // wider on small screens
pub const CAMERA_NEAR: f32 = 0.01;
pub const CAMERA_FAR: f32 = 50.0;

// Camera always aims here after moving
pub const LOOK_AT: Vec3 = Vec3::ZERO;

// Lower and further back on small screens
pub const MOBILE_CAMERA_POSITION: Vec3 = Vec3::new(0.5, -0.2, 1.5);
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Explore-mode orbit control
pub const ORBIT_MIN_DISTANCE: f32 = 0.3;
pub const ORBIT_MAX_DISTANCE: f32 = 3.0;
pub const ORBIT_DAMPING: f32 = 0.05; // velocity lost per frame
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per css pixel
pub const ORBIT_ZOOM_SPEED: f32 = 0.001; // distance fraction per wheel delta unit
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3; // keeps look_at away from the poles
pub const ORBIT_REST_VELOCITY: f32 = 1e-5; // below this inertia stops
