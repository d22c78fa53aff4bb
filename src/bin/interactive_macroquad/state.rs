use rand::SeedableRng;
use rand::rngs::StdRng;

use projectile_sim::core::{
    Arena, ControlValues, EnvironmentConfig, FlightSession, GroundMode, OutOfBoundsPolicy,
    Preset,
};

/// Slider positions; the UI widgets only edit `f32`.
#[derive(Clone, Copy)]
pub(crate) struct SliderValues {
    pub(crate) angle_deg: f32,
    pub(crate) power: f32,
    pub(crate) mass: f32,
    pub(crate) drag_raw: f32,
    pub(crate) gravity: f32,
}

impl SliderValues {
    pub(crate) fn from_controls(controls: ControlValues) -> Self {
        Self {
            angle_deg: controls.angle_deg as f32,
            power: controls.power as f32,
            mass: controls.mass as f32,
            drag_raw: controls.drag_raw as f32,
            gravity: controls.gravity as f32,
        }
    }

    pub(crate) fn controls(&self) -> ControlValues {
        ControlValues {
            angle_deg: f64::from(self.angle_deg),
            power: f64::from(self.power),
            mass: f64::from(self.mass),
            drag_raw: self.drag_raw.round().max(0.0) as u32,
            gravity: f64::from(self.gravity),
        }
    }
}

pub(crate) struct AppRuntime {
    pub(crate) session: FlightSession,
    pub(crate) sliders: SliderValues,
    pub(crate) preset: Preset,
    /// Stepping and boundary options; physics comes from the sliders.
    pub(crate) options: EnvironmentConfig,
    pub(crate) show_preview: bool,
    pub(crate) ticks_per_frame: f32,
    pub(crate) status_line: String,
    pub(crate) rng: StdRng,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let controls = ControlValues::default();
        let preset = Preset::default();
        Self {
            session: FlightSession::new(Arena::default(), &mut rng),
            sliders: SliderValues::from_controls(controls),
            preset,
            options: preset.config(controls.physics()),
            show_preview: true,
            ticks_per_frame: 1.0,
            status_line: "Ready".to_string(),
            rng,
        }
    }

    /// Snapshot handed to the engine at launch.
    pub(crate) fn launch_config(&self) -> EnvironmentConfig {
        EnvironmentConfig {
            physics: self.sliders.controls().physics(),
            ..self.options
        }
    }

    pub(crate) fn cycle_preset(&mut self) {
        let idx = Preset::ALL
            .iter()
            .position(|p| *p == self.preset)
            .unwrap_or(0);
        self.preset = Preset::ALL[(idx + 1) % Preset::ALL.len()];
        let live = self.options.live_reconfiguration;
        self.options = self.preset.config(self.sliders.controls().physics());
        self.options.live_reconfiguration = live;
        self.status_line = format!("Preset: {}", self.preset.label());
    }

    pub(crate) fn toggle_ground_mode(&mut self) {
        self.options.ground_mode = match self.options.ground_mode {
            GroundMode::RadiusOffset => GroundMode::PointParticle,
            GroundMode::PointParticle => GroundMode::RadiusOffset,
        };
    }

    pub(crate) fn toggle_out_of_bounds(&mut self) {
        self.options.out_of_bounds = match self.options.out_of_bounds {
            OutOfBoundsPolicy::Terminal => OutOfBoundsPolicy::Advisory,
            OutOfBoundsPolicy::Advisory => OutOfBoundsPolicy::Terminal,
        };
    }

    pub(crate) fn ticks_this_frame(&self) -> u32 {
        self.ticks_per_frame.round().max(1.0) as u32
    }
}
