//! Step-driven projectile flight engine.
//!
//! Coordinates follow the display convention: `x` grows to the right and `y`
//! grows downward, so "up" is a decreasing `y` and the ground sits at
//! `y = Arena::ground_level`.

pub mod ballistics;
pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod preview;
pub mod session;
pub mod state;
pub mod target;
pub mod window;

pub use config::{
    Arena, ControlValues, EnvironmentConfig, GroundMode, LaunchInputs, OutOfBoundsPolicy,
    PhysicsParams, Preset,
};
pub use error::ConfigError;
pub use session::{AdvanceReport, FlightPhase, FlightSession, LaunchOutcome};
pub use state::{FlightMeasurement, KinematicState, SamplePoint, Trajectory};
pub use target::Target;
