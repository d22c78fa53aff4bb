use serde::{Deserialize, Serialize};

use crate::core::constants::{
    COARSE_TIME_STEP_S, DEFAULT_ANGLE_DEG, DEFAULT_DRAG_RAW, DEFAULT_MASS_KG, DEFAULT_POWER_MPS,
    DEFAULT_SAMPLE_SPACING, DRAG_RAW_SCALE, EARTH_GRAVITY_MPS2, FINE_SUB_STEPS, FINE_TIME_STEP_S,
    LAUNCH_ORIGIN_X, PROJECTILE_RADIUS, TARGET_BAND_MAX_X, TARGET_BAND_MIN_X, TARGET_HEIGHT,
    TARGET_WIDTH, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};
use crate::core::error::ConfigError;

/// Whether ground contact is measured at the projectile's centre or its edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundMode {
    #[default]
    RadiusOffset,
    PointParticle,
}

impl GroundMode {
    /// Height above the ground at which the projectile counts as touching it.
    pub fn clearance(self, radius: f64) -> f64 {
        match self {
            GroundMode::RadiusOffset => radius,
            GroundMode::PointParticle => 0.0,
        }
    }
}

/// What happens when the projectile passes the right edge of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfBoundsPolicy {
    /// The flight ends immediately with no distance recorded.
    #[default]
    Terminal,
    /// Only the off-screen flag is raised; integration continues until landing.
    Advisory,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub mass: f64,
    pub drag_coefficient: f64,
    pub gravity: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS_KG,
            drag_coefficient: f64::from(DEFAULT_DRAG_RAW) / DRAG_RAW_SCALE,
            gravity: EARTH_GRAVITY_MPS2,
        }
    }
}

impl PhysicsParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        if !self.drag_coefficient.is_finite() || self.drag_coefficient < 0.0 {
            return Err(ConfigError::InvalidDrag(self.drag_coefficient));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::InvalidGravity(self.gravity));
        }
        if !(self.drag_coefficient / self.mass).is_finite() {
            return Err(ConfigError::DragMassOverflow {
                drag: self.drag_coefficient,
                mass: self.mass,
            });
        }
        Ok(())
    }
}

/// Snapshot of everything the engine needs to fly one projectile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub physics: PhysicsParams,
    pub time_step: f64,
    pub sub_steps: u32,
    pub ground_mode: GroundMode,
    pub out_of_bounds: OutOfBoundsPolicy,
    pub live_reconfiguration: bool,
    /// Minimum horizontal distance between retained trajectory samples.
    pub sample_spacing: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Preset::Arcade.config(PhysicsParams::default())
    }
}

impl EnvironmentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()?;
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(ConfigError::InvalidTimeStep(self.time_step));
        }
        if self.sub_steps == 0 {
            return Err(ConfigError::ZeroSubSteps);
        }
        if !self.sample_spacing.is_finite() || self.sample_spacing < 0.0 {
            return Err(ConfigError::InvalidSampleSpacing(self.sample_spacing));
        }
        Ok(())
    }

    /// Simulated seconds covered by one call to `FlightSession::advance`.
    pub fn tick_duration(&self) -> f64 {
        self.time_step * f64::from(self.sub_steps)
    }
}

/// Named engine variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Coarse single step per tick; leaving the viewport ends the flight.
    #[default]
    Arcade,
    /// Fine sub-stepped integration with the same boundary rules as `Arcade`.
    Smooth,
    /// Point particle that keeps flying off-screen to report its true landing.
    Theoretical,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Arcade, Preset::Smooth, Preset::Theoretical];

    pub fn config(self, physics: PhysicsParams) -> EnvironmentConfig {
        let (time_step, sub_steps, ground_mode, out_of_bounds) = match self {
            Preset::Arcade => (
                COARSE_TIME_STEP_S,
                1,
                GroundMode::RadiusOffset,
                OutOfBoundsPolicy::Terminal,
            ),
            Preset::Smooth => (
                FINE_TIME_STEP_S,
                FINE_SUB_STEPS,
                GroundMode::RadiusOffset,
                OutOfBoundsPolicy::Terminal,
            ),
            Preset::Theoretical => (
                FINE_TIME_STEP_S,
                FINE_SUB_STEPS,
                GroundMode::PointParticle,
                OutOfBoundsPolicy::Advisory,
            ),
        };
        EnvironmentConfig {
            physics,
            time_step,
            sub_steps,
            ground_mode,
            out_of_bounds,
            live_reconfiguration: false,
            sample_spacing: DEFAULT_SAMPLE_SPACING,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Arcade => "Arcade",
            Preset::Smooth => "Smooth",
            Preset::Theoretical => "Theoretical",
        }
    }
}

/// Fixed geometry of the playing field, in viewport units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub ground_level: f64,
    pub launch_origin_x: f64,
    pub projectile_radius: f64,
    pub target_width: f64,
    pub target_height: f64,
    pub target_band: (f64, f64),
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            ground_level: VIEWPORT_HEIGHT,
            launch_origin_x: LAUNCH_ORIGIN_X,
            projectile_radius: PROJECTILE_RADIUS,
            target_width: TARGET_WIDTH,
            target_height: TARGET_HEIGHT,
            target_band: (TARGET_BAND_MIN_X, TARGET_BAND_MAX_X),
        }
    }
}

impl Arena {
    /// The `y` at which ground contact fires and to which the projectile snaps.
    pub fn ground_contact_y(&self, mode: GroundMode) -> f64 {
        self.ground_level - mode.clearance(self.projectile_radius)
    }

    /// Height above ground for a display-space `y`.
    pub fn height_of(&self, y: f64) -> f64 {
        self.ground_level - y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchInputs {
    pub angle_deg: f64,
    pub power: f64,
}

impl LaunchInputs {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.angle_deg.is_finite() || !self.power.is_finite() {
            return Err(ConfigError::NonFiniteLaunch {
                angle_deg: self.angle_deg,
                power: self.power,
            });
        }
        if self.power < 0.0 {
            return Err(ConfigError::NegativePower(self.power));
        }
        // Speed is squared every step.
        if !(self.power * self.power).is_finite() {
            return Err(ConfigError::PowerOverflow(self.power));
        }
        Ok(())
    }

    /// Initial velocity; `vy` is negative for upward launches.
    pub fn velocity(&self) -> (f64, f64) {
        let theta = self.angle_deg.to_radians();
        (self.power * theta.cos(), -self.power * theta.sin())
    }
}

/// Raw values as read from the user's controls.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlValues {
    pub angle_deg: f64,
    pub power: f64,
    pub mass: f64,
    /// Drag in slider units; divided by `DRAG_RAW_SCALE` before use.
    pub drag_raw: u32,
    pub gravity: f64,
}

impl Default for ControlValues {
    fn default() -> Self {
        Self {
            angle_deg: DEFAULT_ANGLE_DEG,
            power: DEFAULT_POWER_MPS,
            mass: DEFAULT_MASS_KG,
            drag_raw: DEFAULT_DRAG_RAW,
            gravity: EARTH_GRAVITY_MPS2,
        }
    }
}

impl ControlValues {
    pub fn drag_coefficient(&self) -> f64 {
        f64::from(self.drag_raw) / DRAG_RAW_SCALE
    }

    pub fn physics(&self) -> PhysicsParams {
        PhysicsParams {
            mass: self.mass,
            drag_coefficient: self.drag_coefficient(),
            gravity: self.gravity,
        }
    }

    pub fn launch(&self) -> LaunchInputs {
        LaunchInputs {
            angle_deg: self.angle_deg,
            power: self.power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_raw_is_scaled_by_a_thousand() {
        let controls = ControlValues {
            drag_raw: 25,
            ..Default::default()
        };
        assert_eq!(controls.physics().drag_coefficient, 0.025);
    }

    #[test]
    fn rejects_non_positive_mass() {
        let mut config = EnvironmentConfig::default();
        config.physics.mass = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidMass(0.0)));
        config.physics.mass = -2.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidMass(-2.0)));
    }

    #[test]
    fn rejects_bad_stepping() {
        let mut config = EnvironmentConfig {
            time_step: -0.1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidTimeStep(-0.1)));
        config.time_step = 0.1;
        config.sub_steps = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroSubSteps));
    }

    #[test]
    fn rejects_non_finite_launch() {
        let inputs = LaunchInputs {
            angle_deg: f64::NAN,
            power: 30.0,
        };
        assert!(matches!(
            inputs.validate(),
            Err(ConfigError::NonFiniteLaunch { .. })
        ));
        let inputs = LaunchInputs {
            angle_deg: 45.0,
            power: f64::INFINITY,
        };
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn rejects_overflowing_power_and_drag_ratio() {
        let inputs = LaunchInputs {
            angle_deg: 45.0,
            power: 1e160,
        };
        assert_eq!(inputs.validate(), Err(ConfigError::PowerOverflow(1e160)));

        let physics = PhysicsParams {
            mass: 1e-310,
            drag_coefficient: 0.05,
            gravity: 9.8,
        };
        assert!(matches!(
            physics.validate(),
            Err(ConfigError::DragMassOverflow { .. })
        ));
        let weightless_drag_free = PhysicsParams {
            drag_coefficient: 0.0,
            ..physics
        };
        assert_eq!(weightless_drag_free.validate(), Ok(()));
    }

    #[test]
    fn upward_launch_has_negative_vertical_velocity() {
        let (vx, vy) = LaunchInputs {
            angle_deg: 90.0,
            power: 10.0,
        }
        .velocity();
        assert!(vx.abs() < 1e-9);
        assert!((vy + 10.0).abs() < 1e-9);
    }

    #[test]
    fn ground_contact_depends_on_mode() {
        let arena = Arena::default();
        assert_eq!(arena.ground_contact_y(GroundMode::PointParticle), 400.0);
        assert_eq!(arena.ground_contact_y(GroundMode::RadiusOffset), 395.0);
    }

    #[test]
    fn presets_are_valid() {
        for preset in Preset::ALL {
            assert!(preset.config(PhysicsParams::default()).validate().is_ok());
        }
        let theoretical = Preset::Theoretical.config(PhysicsParams::default());
        assert_eq!(theoretical.out_of_bounds, OutOfBoundsPolicy::Advisory);
        assert_eq!(theoretical.ground_mode, GroundMode::PointParticle);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: EnvironmentConfig = toml::from_str(
            r#"
            time_step = 0.02
            out_of_bounds = "advisory"

            [physics]
            mass = 2.0
            drag_coefficient = 0.0
            gravity = 1.62
            "#,
        )
        .expect("config should parse");
        assert_eq!(config.time_step, 0.02);
        assert_eq!(config.sub_steps, 1);
        assert_eq!(config.out_of_bounds, OutOfBoundsPolicy::Advisory);
        assert_eq!(config.physics.gravity, 1.62);
        assert!(!config.live_reconfiguration);
    }
}
