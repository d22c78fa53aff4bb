//! Flight lifecycle: launch, step-by-step advance, terminal events, reset.
//!
//! A session owns exactly one projectile. The driver calls [`FlightSession::advance`]
//! at its own cadence until [`FlightPhase::is_terminal`] holds; each call runs
//! `sub_steps` integrator steps and checks, after every step, for ground
//! contact, then a target hit, then the viewport's right edge.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, trace};

use crate::core::config::{Arena, EnvironmentConfig, LaunchInputs, OutOfBoundsPolicy, PhysicsParams};
use crate::core::error::ConfigError;
use crate::core::{forces, integrator};
use crate::core::state::{FlightMeasurement, KinematicState, Trajectory};
use crate::core::target::Target;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlightPhase {
    Idle,
    Active,
    Landed,
    TargetHit,
    OutOfBounds,
}

impl FlightPhase {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            FlightPhase::Landed | FlightPhase::TargetHit | FlightPhase::OutOfBounds
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            FlightPhase::Idle => "Idle",
            FlightPhase::Active => "Active",
            FlightPhase::Landed => "Landed",
            FlightPhase::TargetHit => "Target hit",
            FlightPhase::OutOfBounds => "Out of bounds",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaunchOutcome {
    Started,
    /// A flight was already active; nothing changed.
    Ignored,
}

/// What one call to `advance` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdvanceReport {
    pub phase: FlightPhase,
    /// Integrator steps actually taken; fewer than `sub_steps` when the flight ended early.
    pub steps: u32,
    pub off_screen: bool,
}

pub struct FlightSession {
    arena: Arena,
    target: Target,
    config: EnvironmentConfig,
    state: KinematicState,
    measurement: FlightMeasurement,
    trajectory: Trajectory,
    phase: FlightPhase,
    off_screen: bool,
}

impl FlightSession {
    pub fn new<R: Rng + ?Sized>(arena: Arena, rng: &mut R) -> Self {
        let target = Target::random(&arena, rng);
        Self::with_target(arena, target)
    }

    pub fn with_target(arena: Arena, target: Target) -> Self {
        let config = EnvironmentConfig::default();
        Self {
            arena,
            target,
            state: KinematicState {
                x: arena.launch_origin_x,
                y: arena.ground_contact_y(config.ground_mode),
                vx: 0.0,
                vy: 0.0,
            },
            measurement: FlightMeasurement::default(),
            trajectory: Trajectory::new(config.sample_spacing),
            config,
            phase: FlightPhase::Idle,
            off_screen: false,
        }
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Configuration captured by the most recent launch.
    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    pub fn measurement(&self) -> &FlightMeasurement {
        &self.measurement
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == FlightPhase::Active
    }

    /// Whether the projectile is currently past the viewport's right edge.
    pub fn is_off_screen(&self) -> bool {
        self.off_screen
    }

    /// Starts a flight from the launch origin.
    ///
    /// Ignored while a flight is active. The configuration is validated and
    /// copied; later edits to the caller's value do not reach this flight
    /// unless it was launched with `live_reconfiguration`.
    pub fn launch(
        &mut self,
        config: &EnvironmentConfig,
        inputs: LaunchInputs,
    ) -> Result<LaunchOutcome, ConfigError> {
        if self.is_active() {
            trace!("launch ignored: flight already active");
            return Ok(LaunchOutcome::Ignored);
        }
        config.validate()?;
        inputs.validate()?;

        let (vx, vy) = inputs.velocity();
        let start = KinematicState {
            x: self.arena.launch_origin_x,
            y: self.arena.ground_contact_y(config.ground_mode),
            vx,
            vy,
        };
        let (ax, ay) = forces::acceleration(&start, &config.physics);
        if !(ax.is_finite() && ay.is_finite()) {
            return Err(ConfigError::DragMassOverflow {
                drag: config.physics.drag_coefficient,
                mass: config.physics.mass,
            });
        }

        self.config = *config;
        self.state = start;
        self.measurement = FlightMeasurement::default();
        self.trajectory.restart(config.sample_spacing);
        self.off_screen = false;
        self.phase = FlightPhase::Active;

        debug!(
            angle_deg = inputs.angle_deg,
            power = inputs.power,
            mass = config.physics.mass,
            drag = config.physics.drag_coefficient,
            gravity = config.physics.gravity,
            "flight launched"
        );
        Ok(LaunchOutcome::Started)
    }

    /// Runs up to `sub_steps` integrator steps using the launch snapshot.
    /// A no-op outside the active phase.
    pub fn advance(&mut self) -> AdvanceReport {
        if !self.is_active() {
            return self.report(0);
        }

        let mut steps = 0;
        for _ in 0..self.config.sub_steps {
            steps += 1;
            if let Some(event) = self.sub_step() {
                self.finish(event);
                break;
            }
        }
        self.report(steps)
    }

    /// Like [`advance`](Self::advance), but first adopts `live` physics when
    /// the flight was launched with live reconfiguration.
    pub fn advance_live(&mut self, live: &PhysicsParams) -> Result<AdvanceReport, ConfigError> {
        if self.is_active() {
            if self.config.live_reconfiguration {
                live.validate()?;
                self.config.physics = *live;
            } else if *live != self.config.physics {
                trace!("live physics ignored: flight uses its launch snapshot");
            }
        }
        Ok(self.advance())
    }

    /// Ends an active flight without recording a result. Returns whether a
    /// flight was aborted.
    pub fn abort(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.phase = FlightPhase::Idle;
        self.off_screen = false;
        debug!(elapsed = self.measurement.elapsed_time, "flight aborted");
        true
    }

    /// Aborts any active flight, moves the target and clears the path and
    /// telemetry. The projectile's last state is left in place.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.abort();
        self.target.relocate(&self.arena, rng);
        self.trajectory.clear();
        self.measurement = FlightMeasurement::default();
        self.off_screen = false;
        self.phase = FlightPhase::Idle;
        debug!(target_x = self.target.x, "target relocated");
    }

    /// Places the target explicitly. Refused while a flight is active.
    pub fn place_target(&mut self, target: Target) -> bool {
        if self.is_active() {
            return false;
        }
        self.target = target;
        true
    }

    fn report(&self, steps: u32) -> AdvanceReport {
        AdvanceReport {
            phase: self.phase,
            steps,
            off_screen: self.off_screen,
        }
    }

    fn sub_step(&mut self) -> Option<FlightPhase> {
        integrator::step(&mut self.state, &self.config.physics, self.config.time_step);
        self.measurement.elapsed_time += self.config.time_step;
        self.measurement.record_height(self.arena.height_of(self.state.y));
        self.trajectory.record(self.state.x, self.state.y);
        self.detect_event()
    }

    fn detect_event(&mut self) -> Option<FlightPhase> {
        self.off_screen = self.state.x > self.arena.width;

        let contact_y = self.arena.ground_contact_y(self.config.ground_mode);
        if self.state.y >= contact_y {
            self.state.y = contact_y;
            return Some(FlightPhase::Landed);
        }
        if self.target.contains(self.state.x, self.state.y) {
            return Some(FlightPhase::TargetHit);
        }
        if self.off_screen && self.config.out_of_bounds == OutOfBoundsPolicy::Terminal {
            return Some(FlightPhase::OutOfBounds);
        }
        None
    }

    fn finish(&mut self, event: FlightPhase) {
        let range = self.state.x - self.arena.launch_origin_x;
        match event {
            FlightPhase::Landed => {
                self.measurement.landed = true;
                self.measurement.final_range = Some(range);
            }
            FlightPhase::TargetHit => {
                self.measurement.final_range = Some(range);
            }
            _ => {}
        }
        self.phase = event;
        info!(
            outcome = event.label(),
            elapsed = self.measurement.elapsed_time,
            max_height = self.measurement.max_height,
            range = ?self.measurement.final_range,
            "flight finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{GroundMode, Preset};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn far_target(arena: &Arena) -> Target {
        Target::on_ground(arena, 700.0)
    }

    fn point_config(time_step: f64, sub_steps: u32) -> EnvironmentConfig {
        EnvironmentConfig {
            physics: PhysicsParams {
                mass: 1.0,
                drag_coefficient: 0.0,
                gravity: 9.8,
            },
            time_step,
            sub_steps,
            ground_mode: GroundMode::PointParticle,
            ..Default::default()
        }
    }

    fn inputs(angle_deg: f64, power: f64) -> LaunchInputs {
        LaunchInputs { angle_deg, power }
    }

    #[test]
    fn launch_starts_at_origin_for_each_ground_mode() {
        let arena = Arena::default();
        let mut session = FlightSession::with_target(arena, far_target(&arena));

        session
            .launch(&point_config(0.1, 1), inputs(45.0, 30.0))
            .expect("valid launch");
        assert_eq!(session.state().x, 20.0);
        assert_eq!(session.state().y, 400.0);
        assert!(session.state().vy < 0.0);
        session.abort();

        let radius = EnvironmentConfig {
            ground_mode: GroundMode::RadiusOffset,
            ..point_config(0.1, 1)
        };
        session.launch(&radius, inputs(45.0, 30.0)).expect("valid launch");
        assert_eq!(session.state().y, 395.0);
    }

    #[test]
    fn relaunch_while_active_is_ignored() {
        let arena = Arena::default();
        let mut session = FlightSession::with_target(arena, far_target(&arena));
        let config = point_config(0.1, 1);
        session.launch(&config, inputs(45.0, 30.0)).expect("valid launch");
        session.advance();
        let before = *session.state();

        let outcome = session.launch(&config, inputs(10.0, 90.0)).expect("no error");
        assert_eq!(outcome, LaunchOutcome::Ignored);
        assert_eq!(*session.state(), before);
        assert!(session.is_active());
    }

    #[test]
    fn invalid_config_is_rejected_before_any_state_change() {
        let arena = Arena::default();
        let mut session = FlightSession::with_target(arena, far_target(&arena));
        let mut config = point_config(0.1, 1);
        config.physics.mass = 0.0;

        let err = session.launch(&config, inputs(45.0, 30.0)).unwrap_err();
        assert_eq!(err, ConfigError::InvalidMass(0.0));
        assert_eq!(session.phase(), FlightPhase::Idle);
    }

    #[test]
    fn overflowing_launches_are_refused() {
        let arena = Arena::default();
        let mut session = FlightSession::with_target(arena, far_target(&arena));
        let mut config = EnvironmentConfig {
            out_of_bounds: OutOfBoundsPolicy::Advisory,
            ..point_config(0.1, 1)
        };

        assert_eq!(
            session.launch(&config, inputs(45.0, 1e160)),
            Err(ConfigError::PowerOverflow(1e160))
        );

        // drag / mass overflows outright
        config.physics.mass = 1e-310;
        config.physics.drag_coefficient = 0.05;
        assert!(matches!(
            session.launch(&config, inputs(45.0, 30.0)),
            Err(ConfigError::DragMassOverflow { .. })
        ));

        // the ratio is finite but the first drag force is not
        config.physics.drag_coefficient = 0.005;
        assert!(matches!(
            session.launch(&config, inputs(45.0, 30.0)),
            Err(ConfigError::DragMassOverflow { .. })
        ));
        assert_eq!(session.phase(), FlightPhase::Idle);
    }

    #[test]
    fn tiny_mass_without_drag_flies_normally() {
        let arena = Arena::default();
        let mut session = FlightSession::with_target(arena, far_target(&arena));
        let mut config = point_config(0.1, 1);
        config.physics.mass = 1e-310;
        session
            .launch(&config, inputs(45.0, 30.0))
            .expect("zero drag makes mass irrelevant");

        while session.is_active() {
            session.advance();
            let state = session.state();
            assert!(state.x.is_finite() && state.y.is_finite());
        }
        assert_eq!(session.phase(), FlightPhase::Landed);
    }

    #[test]
    fn ground_contact_wins_over_target_hit_in_the_same_step() {
        let arena = Arena::default();
        let target = Target::on_ground(&arena, 100.0);
        let mut session = FlightSession::with_target(arena, target);
        let config = EnvironmentConfig {
            ground_mode: GroundMode::RadiusOffset,
            ..point_config(0.1, 1)
        };
        session.launch(&config, inputs(45.0, 30.0)).expect("valid launch");

        // Inside the target rectangle and below the radius-offset contact line.
        session.state.x = 120.0;
        session.state.y = 397.0;
        assert!(session.target().contains(120.0, 397.0));
        assert_eq!(session.detect_event(), Some(FlightPhase::Landed));
        assert_eq!(session.state().y, 395.0);
    }

    #[test]
    fn terminal_policy_ends_flight_off_screen() {
        let arena = Arena::default();
        let mut session = FlightSession::with_target(arena, far_target(&arena));
        session
            .launch(&point_config(0.1, 1), inputs(60.0, 100.0))
            .expect("valid launch");

        let mut ticks = 0;
        while session.is_active() && ticks < 10_000 {
            session.advance();
            ticks += 1;
        }
        assert_eq!(session.phase(), FlightPhase::OutOfBounds);
        assert!(session.is_off_screen());
        assert_eq!(session.measurement().final_range, None);
        assert!(!session.measurement().landed);
    }

    #[test]
    fn live_values_only_apply_when_enabled() {
        let arena = Arena::default();
        let mut session = FlightSession::with_target(arena, far_target(&arena));
        let heavy_drag = PhysicsParams {
            mass: 1.0,
            drag_coefficient: 0.05,
            gravity: 9.8,
        };

        session
            .launch(&point_config(0.1, 1), inputs(45.0, 30.0))
            .expect("valid launch");
        session.advance_live(&heavy_drag).expect("snapshot mode");
        assert_eq!(session.config().physics.drag_coefficient, 0.0);
        session.abort();

        let live = EnvironmentConfig {
            live_reconfiguration: true,
            ..point_config(0.1, 1)
        };
        session.launch(&live, inputs(45.0, 30.0)).expect("valid launch");
        session.advance_live(&heavy_drag).expect("valid live values");
        assert_eq!(session.config().physics.drag_coefficient, 0.05);

        let broken = PhysicsParams {
            mass: -1.0,
            ..heavy_drag
        };
        assert_eq!(
            session.advance_live(&broken),
            Err(ConfigError::InvalidMass(-1.0))
        );
    }

    #[test]
    fn abort_leaves_no_result() {
        let arena = Arena::default();
        let mut session = FlightSession::with_target(arena, far_target(&arena));
        session
            .launch(&Preset::Arcade.config(PhysicsParams::default()), inputs(45.0, 50.0))
            .expect("valid launch");
        session.advance();
        assert!(session.abort());
        assert_eq!(session.phase(), FlightPhase::Idle);
        assert_eq!(session.measurement().final_range, None);
        assert!(!session.abort());
    }

    #[test]
    fn place_target_is_refused_mid_flight() {
        let arena = Arena::default();
        let mut session = FlightSession::with_target(arena, far_target(&arena));
        session
            .launch(&point_config(0.1, 1), inputs(45.0, 30.0))
            .expect("valid launch");
        assert!(!session.place_target(Target::on_ground(&arena, 250.0)));
        session.abort();
        assert!(session.place_target(Target::on_ground(&arena, 250.0)));
        assert_eq!(session.target().x, 250.0);
    }

    #[test]
    fn new_session_places_target_in_band() {
        let mut rng = StdRng::seed_from_u64(11);
        let session = FlightSession::new(Arena::default(), &mut rng);
        assert!((200.0..750.0).contains(&session.target().x));
        assert_eq!(session.phase(), FlightPhase::Idle);
    }
}
