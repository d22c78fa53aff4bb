use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use projectile_sim::core::{FlightPhase, GroundMode, OutOfBoundsPolicy};

use crate::constants::{
    ANGLE_RANGE_DEG, DRAG_RAW_RANGE, GRAVITY_RANGE_MPS2, MASS_RANGE_KG, PANEL_POS, PANEL_SIZE,
    POWER_RANGE_MPS, TICKS_PER_FRAME_RANGE,
};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) fire: bool,
    pub(crate) reset: bool,
    pub(crate) abort: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            fire: self.fire || other.fire,
            reset: self.reset || other.reset,
            abort: self.abort || other.abort,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        fire: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
        abort: is_key_pressed(KeyCode::Escape),
    }
}

fn ground_text(mode: GroundMode) -> &'static str {
    match mode {
        GroundMode::RadiusOffset => "Ground: radius offset",
        GroundMode::PointParticle => "Ground: point particle",
    }
}

fn bounds_text(policy: OutOfBoundsPolicy) -> &'static str {
    match policy {
        OutOfBoundsPolicy::Terminal => "Off-screen: end flight",
        OutOfBoundsPolicy::Advisory => "Off-screen: keep tracking",
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let drag_label = format!(
        "Drag coefficient: {:.3}",
        state.sliders.controls().drag_coefficient()
    );
    let stepping_label = format!(
        "dt = {:.3} s x {} sub-steps",
        state.options.time_step, state.options.sub_steps
    );

    let mut actions = FrameActions::default();
    widgets::Window::new(
        hash!(),
        vec2(PANEL_POS.0, PANEL_POS.1),
        vec2(PANEL_SIZE.0, PANEL_SIZE.1),
    )
    .label("Launch Controls")
    .ui(&mut *root_ui(), |ui| {
        ui.slider(
            hash!(),
            "Angle (deg)",
            ANGLE_RANGE_DEG.0..ANGLE_RANGE_DEG.1,
            &mut state.sliders.angle_deg,
        );
        ui.slider(
            hash!(),
            "Power (m/s)",
            POWER_RANGE_MPS.0..POWER_RANGE_MPS.1,
            &mut state.sliders.power,
        );
        ui.slider(
            hash!(),
            "Mass (kg)",
            MASS_RANGE_KG.0..MASS_RANGE_KG.1,
            &mut state.sliders.mass,
        );
        ui.slider(
            hash!(),
            "Drag",
            DRAG_RAW_RANGE.0..DRAG_RAW_RANGE.1,
            &mut state.sliders.drag_raw,
        );
        ui.label(None, &drag_label);
        ui.slider(
            hash!(),
            "Gravity (m/s^2)",
            GRAVITY_RANGE_MPS2.0..GRAVITY_RANGE_MPS2.1,
            &mut state.sliders.gravity,
        );
        ui.slider(
            hash!(),
            "Ticks per frame",
            TICKS_PER_FRAME_RANGE.0..TICKS_PER_FRAME_RANGE.1,
            &mut state.ticks_per_frame,
        );
        ui.separator();
        if ui.button(None, "Fire (Space)") {
            actions.fire = true;
        }
        if ui.button(None, "Reset Target (R)") {
            actions.reset = true;
        }
        if ui.button(None, "Abort (Esc)") {
            actions.abort = true;
        }
        ui.separator();
        if ui.button(None, format!("Preset: {}", state.preset.label()).as_str()) {
            state.cycle_preset();
        }
        ui.label(None, &stepping_label);
        if ui.button(None, ground_text(state.options.ground_mode)) {
            state.toggle_ground_mode();
        }
        if ui.button(None, bounds_text(state.options.out_of_bounds)) {
            state.toggle_out_of_bounds();
        }
        let live_text = if state.options.live_reconfiguration {
            "Live tuning: on"
        } else {
            "Live tuning: off"
        };
        if ui.button(None, live_text) {
            state.options.live_reconfiguration = !state.options.live_reconfiguration;
        }
        if ui.button(None, "Toggle Preview") {
            state.show_preview = !state.show_preview;
        }
    });

    actions
}

pub(crate) fn phase_text(phase: FlightPhase, off_screen: bool) -> &'static str {
    match phase {
        FlightPhase::Active if off_screen => "Flying (off-screen)",
        FlightPhase::Active => "Flying",
        other => other.label(),
    }
}
