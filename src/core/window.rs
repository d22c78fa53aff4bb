use crate::core::config::Arena;
use crate::core::state::SamplePoint;

pub const DISTANCE_TO_HEIGHT_RATIO: f64 = 2.0; // x:y data window ratio

const X_PADDING_RATIO: f64 = 0.06;
const Y_PADDING_RATIO: f64 = 0.10;

/// Pads the raw extents and widens one axis so the window keeps a 2:1
/// distance-to-height ratio.
pub fn fixed_ratio_axis_window(raw_max_x: f64, raw_max_y: f64) -> (f64, f64) {
    let raw_x_span = raw_max_x.max(1.0);
    let raw_y_span = raw_max_y.max(1.0);
    let x_pad = raw_x_span * X_PADDING_RATIO;
    let y_pad = raw_y_span * Y_PADDING_RATIO;

    let mut x_span = (raw_max_x + x_pad).max(1.0);
    let mut y_span = (raw_max_y + y_pad).max(1.0);

    if x_span / y_span < DISTANCE_TO_HEIGHT_RATIO {
        x_span = y_span * DISTANCE_TO_HEIGHT_RATIO;
    } else {
        y_span = x_span / DISTANCE_TO_HEIGHT_RATIO;
    }

    (x_span, y_span)
}

/// Window covering the visible arena and every sampled point, in
/// launch-relative distance and height above ground.
pub fn flight_window(arena: &Arena, points: &[SamplePoint]) -> (f64, f64) {
    let visible_x = arena.width - arena.launch_origin_x;
    let (max_x, max_y) = points.iter().fold((visible_x, 0.0f64), |(mx, my), p| {
        (
            mx.max(p.x - arena.launch_origin_x),
            my.max(arena.height_of(p.y)),
        )
    });
    fixed_ratio_axis_window(max_x, max_y)
}
