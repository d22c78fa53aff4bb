use thiserror::Error;

/// Reasons a configuration snapshot or launch request is refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("drag coefficient must be finite and non-negative, got {0}")]
    InvalidDrag(f64),
    #[error("gravity must be finite, got {0}")]
    InvalidGravity(f64),
    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),
    #[error("sub-step count must be at least 1")]
    ZeroSubSteps,
    #[error("sample spacing must be finite and non-negative, got {0}")]
    InvalidSampleSpacing(f64),
    #[error("launch angle and power must be finite, got angle={angle_deg} power={power}")]
    NonFiniteLaunch { angle_deg: f64, power: f64 },
    #[error("launch power cannot be negative, got {0}")]
    NegativePower(f64),
    #[error("launch power {0} is too large to integrate")]
    PowerOverflow(f64),
    #[error("drag coefficient {drag} is too large for mass {mass}")]
    DragMassOverflow { drag: f64, mass: f64 },
}
