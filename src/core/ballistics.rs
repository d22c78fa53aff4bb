//! Closed-form drag-free reference flight, measured as distance and height
//! above the launch point (height grows upward here, unlike the engine's
//! display coordinates).

use serde::Serialize;

use crate::core::config::LaunchInputs;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IdealFlight {
    pub time_s: f64,
    pub range: f64,
    pub apex: f64,
}

/// Distance and height above the launch point at `time_s`.
pub fn position_at(inputs: LaunchInputs, gravity: f64, time_s: f64) -> (f64, f64) {
    let (vx, vy) = inputs.velocity();
    let x = vx * time_s;
    let height = (-vy * time_s) - (0.5 * gravity * time_s * time_s);
    (x, height)
}

/// Flight time, range and apex for a launch `height` above the landing line.
/// `None` when the projectile never comes back down.
pub fn ideal_flight(inputs: LaunchInputs, gravity: f64, height: f64) -> Option<IdealFlight> {
    if !gravity.is_finite() || gravity <= 0.0 || inputs.validate().is_err() {
        return None;
    }

    let (_, vy) = inputs.velocity();
    let up = -vy;
    let disc = up * up + 2.0 * gravity * height;
    if disc < 0.0 {
        return None;
    }

    let time_s = (up + disc.sqrt()) / gravity;
    if time_s < 0.0 {
        return None;
    }

    let (range, _) = position_at(inputs, gravity, time_s);
    let apex = height + (up.max(0.0) * up.max(0.0)) / (2.0 * gravity);
    Some(IdealFlight {
        time_s,
        range,
        apex,
    })
}

/// Evenly spaced points along the ideal path, in launch-relative coordinates.
pub fn sample_ideal_path(
    inputs: LaunchInputs,
    gravity: f64,
    time_of_flight_s: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let sample_count = samples.max(2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * time_of_flight_s) / sample_count as f64;
            position_at(inputs, gravity, t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn computes_known_range_for_flat_ground() {
        let flight = ideal_flight(
            LaunchInputs {
                angle_deg: 45.0,
                power: 30.0,
            },
            9.8,
            0.0,
        )
        .expect("flight should land");

        assert_close(flight.range, 91.8367, 0.001);
        assert_close(flight.time_s, 4.3293, 0.001);
        assert_close(flight.apex, 22.9592, 0.001);
    }

    #[test]
    fn raised_launch_flies_longer() {
        let inputs = LaunchInputs {
            angle_deg: 45.0,
            power: 30.0,
        };
        let flat = ideal_flight(inputs, 9.8, 0.0).expect("lands");
        let raised = ideal_flight(inputs, 9.8, 5.0).expect("lands");
        assert!(raised.range > flat.range);
        assert!(raised.time_s > flat.time_s);
    }

    #[test]
    fn no_landing_without_gravity() {
        let inputs = LaunchInputs {
            angle_deg: 30.0,
            power: 10.0,
        };
        assert_eq!(ideal_flight(inputs, 0.0, 0.0), None);
        assert_eq!(ideal_flight(inputs, 9.8, -1000.0), None);
    }

    #[test]
    fn sampled_path_starts_and_ends_on_the_ground() {
        let inputs = LaunchInputs {
            angle_deg: 60.0,
            power: 20.0,
        };
        let flight = ideal_flight(inputs, 9.8, 0.0).expect("lands");
        let path = sample_ideal_path(inputs, 9.8, flight.time_s, 50);
        assert_eq!(path.len(), 51);
        assert_close(path[0].1, 0.0, 1e-9);
        assert_close(path[50].1, 0.0, 1e-6);
        assert_close(path[50].0, flight.range, 1e-6);
    }
}
