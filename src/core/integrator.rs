use crate::core::config::PhysicsParams;
use crate::core::forces::acceleration;
use crate::core::state::KinematicState;

/// Advances `state` by `dt` with semi-implicit Euler: velocity is updated
/// from the acceleration at the current velocity, then position moves with
/// the updated velocity.
pub fn step(state: &mut KinematicState, params: &PhysicsParams, dt: f64) {
    let (ax, ay) = acceleration(state, params);
    state.vx += ax * dt;
    state.vy += ay * dt;
    state.x += state.vx * dt;
    state.y += state.vy * dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_uses_updated_velocity() {
        let mut state = KinematicState {
            x: 0.0,
            y: 0.0,
            vx: 1.0,
            vy: 0.0,
        };
        let params = PhysicsParams {
            mass: 1.0,
            drag_coefficient: 0.0,
            gravity: 10.0,
        };
        step(&mut state, &params, 0.1);
        assert_eq!(state.vy, 1.0);
        // explicit Euler would leave y at 0.0
        assert!((state.y - 0.1).abs() < 1e-12);
        assert!((state.x - 0.1).abs() < 1e-12);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let start = KinematicState {
            x: 20.0,
            y: 395.0,
            vx: 21.2,
            vy: -21.2,
        };
        let params = PhysicsParams {
            mass: 3.0,
            drag_coefficient: 0.02,
            gravity: 9.8,
        };
        let mut a = start;
        let mut b = start;
        for _ in 0..50 {
            step(&mut a, &params, 0.05);
            step(&mut b, &params, 0.05);
        }
        assert_eq!(a, b);
    }
}
