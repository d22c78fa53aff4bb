use crate::core::config::PhysicsParams;
use crate::core::state::KinematicState;

/// Acceleration from gravity plus quadratic drag opposing the velocity.
///
/// Drag magnitude is `drag_coefficient * speed^2`, split along the unit
/// velocity vector. A projectile at rest, or one flying with a zero drag
/// coefficient, feels gravity only. `gravity` is a positive scalar pointing
/// toward increasing `y`.
///
/// `params.mass` must be positive; callers validate before integrating.
pub fn acceleration(state: &KinematicState, params: &PhysicsParams) -> (f64, f64) {
    let speed = state.speed();
    if params.drag_coefficient == 0.0 || speed == 0.0 {
        return (0.0, params.gravity);
    }

    let drag = params.drag_coefficient * speed * speed;
    let (drag_x, drag_y) = (drag * (state.vx / speed), drag * (state.vy / speed));

    let ax = -drag_x / params.mass;
    let ay = params.gravity - drag_y / params.mass;
    (ax, ay)
}
