use serde::Serialize;

use crate::core::config::{Arena, EnvironmentConfig, LaunchInputs};
use crate::core::constants::MAX_PREVIEW_TIME_S;
use crate::core::error::ConfigError;
use crate::core::session::{FlightPhase, FlightSession};
use crate::core::state::{FlightMeasurement, KinematicState, SamplePoint};
use crate::core::target::Target;

/// A complete flight flown ahead of time on a private session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    pub points: Vec<SamplePoint>,
    pub phase: FlightPhase,
    pub measurement: FlightMeasurement,
    pub final_state: KinematicState,
    /// The flight was still going when `max_flight_time` ran out.
    pub timed_out: bool,
}

/// Flies `inputs` to a terminal event, or until `max_flight_time` simulated
/// seconds have passed. A non-finite limit falls back to `MAX_PREVIEW_TIME_S`.
pub fn predict(
    config: &EnvironmentConfig,
    arena: Arena,
    target: Target,
    inputs: LaunchInputs,
    max_flight_time: f64,
) -> Result<Prediction, ConfigError> {
    let limit = if max_flight_time.is_finite() {
        max_flight_time
    } else {
        MAX_PREVIEW_TIME_S
    };

    let mut session = FlightSession::with_target(arena, target);
    session.launch(config, inputs)?;

    let mut timed_out = false;
    while session.is_active() {
        if session.measurement().elapsed_time >= limit {
            session.abort();
            timed_out = true;
            break;
        }
        session.advance();
    }

    Ok(Prediction {
        points: session.trajectory().points().to_vec(),
        phase: session.phase(),
        measurement: *session.measurement(),
        final_state: *session.state(),
        timed_out,
    })
}
