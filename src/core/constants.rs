pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 400.0;
pub const LAUNCH_ORIGIN_X: f64 = 20.0;
pub const PROJECTILE_RADIUS: f64 = 5.0;

pub const TARGET_WIDTH: f64 = 40.0;
pub const TARGET_HEIGHT: f64 = 40.0;
pub const TARGET_BAND_MIN_X: f64 = 200.0;
pub const TARGET_BAND_MAX_X: f64 = 750.0;

pub const DRAG_RAW_SCALE: f64 = 1000.0; // slider units per unit of drag coefficient
pub const DEFAULT_SAMPLE_SPACING: f64 = 5.0;
pub const COARSE_TIME_STEP_S: f64 = 0.1;
pub const FINE_TIME_STEP_S: f64 = 0.01;
pub const FINE_SUB_STEPS: u32 = 10;
pub const MAX_PREVIEW_TIME_S: f64 = 120.0;

pub const DEFAULT_ANGLE_DEG: f64 = 45.0;
pub const DEFAULT_POWER_MPS: f64 = 50.0;
pub const DEFAULT_MASS_KG: f64 = 1.0;
pub const DEFAULT_DRAG_RAW: u32 = 5;
pub const EARTH_GRAVITY_MPS2: f64 = 9.8;
