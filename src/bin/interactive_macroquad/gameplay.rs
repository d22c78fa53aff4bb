use tracing::warn;

use projectile_sim::core::{FlightPhase, LaunchOutcome};

use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if actions.fire {
        let config = state.launch_config();
        let inputs = state.sliders.controls().launch();
        match state.session.launch(&config, inputs) {
            Ok(LaunchOutcome::Started) => state.status_line = "Simulation running...".to_string(),
            Ok(LaunchOutcome::Ignored) => {}
            Err(err) => {
                warn!(%err, "launch rejected");
                state.status_line = format!("Cannot launch: {err}");
            }
        }
    }

    if actions.abort && state.session.abort() {
        state.status_line = "Flight aborted.".to_string();
    }

    if actions.reset {
        state.session.reset(&mut state.rng);
        state.status_line = "Target moved.".to_string();
    }
}

pub(crate) fn step_active_flight(state: &mut AppRuntime) {
    if !state.session.is_active() {
        return;
    }

    let live = state.sliders.controls().physics();
    for _ in 0..state.ticks_this_frame() {
        let report = match state.session.advance_live(&live) {
            Ok(report) => report,
            Err(err) => {
                warn!(%err, "live values rejected, aborting flight");
                state.session.abort();
                state.status_line = format!("Flight aborted: {err}");
                return;
            }
        };

        match report.phase {
            FlightPhase::Landed => {
                state.status_line = "Done.".to_string();
                return;
            }
            FlightPhase::TargetHit => {
                state.status_line = "TARGET DESTROYED!".to_string();
                return;
            }
            FlightPhase::OutOfBounds => {
                state.status_line = "Out of range.".to_string();
                return;
            }
            FlightPhase::Active if report.off_screen => {
                state.status_line = "Off screen, still tracking...".to_string();
            }
            FlightPhase::Active | FlightPhase::Idle => {}
        }
    }
}
