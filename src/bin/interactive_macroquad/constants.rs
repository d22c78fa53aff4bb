use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1440;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 400.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 140.0;
pub const BOTTOM_MARGIN: f32 = 150.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 92.0;
pub const PANEL_POS: (f32, f32) = (18.0, 120.0);
pub const PANEL_SIZE: (f32, f32) = (360.0, 470.0);

pub const CANNON_LENGTH: f32 = 40.0;
pub const CANNON_THICKNESS: f32 = 10.0;
pub const OFFSCREEN_MARKER_PX: f32 = 14.0;

pub const ANGLE_RANGE_DEG: (f32, f32) = (0.0, 90.0);
pub const POWER_RANGE_MPS: (f32, f32) = (10.0, 150.0);
pub const MASS_RANGE_KG: (f32, f32) = (1.0, 20.0);
pub const DRAG_RAW_RANGE: (f32, f32) = (0.0, 50.0);
pub const GRAVITY_RANGE_MPS2: (f32, f32) = (1.0, 25.0);
pub const TICKS_PER_FRAME_RANGE: (f32, f32) = (1.0, 5.0);

pub const ARENA_BG: Color = Color::new(0.11, 0.12, 0.15, 1.0);
pub const GROUND_COLOR: Color = Color::new(0.2, 0.2, 0.2, 1.0);
pub const TARGET_COLOR: Color = Color::new(0.91, 0.12, 0.39, 1.0);
pub const TRAIL_COLOR: Color = Color::new(0.0, 0.74, 0.83, 0.5);
pub const PREVIEW_COLOR: Color = Color::new(0.46, 0.55, 0.96, 0.45);
pub const PROJECTILE_COLOR: Color = Color::new(0.0, 0.74, 0.83, 1.0);
pub const CANNON_COLOR: Color = Color::new(0.73, 0.73, 0.73, 1.0);
