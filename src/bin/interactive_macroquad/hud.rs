use macroquad::prelude::*;

use projectile_sim::core::preview::Prediction;
use projectile_sim::core::{FlightPhase, FlightSession};

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::controls::phase_text;
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(
    state: &AppRuntime,
    prediction: Option<&Prediction>,
    left: f32,
    right: f32,
    top: f32,
    screen_h: f32,
    font: Option<&Font>,
) {
    draw_header_block(left, font);
    draw_position_readout(&state.session, left, top, font);
    draw_results_block(&state.session, right, top, font);
    draw_status_block(state, prediction, left, screen_h, font);
}

fn draw_header_block(left: f32, font: Option<&Font>) {
    draw_ui_text(
        "Projectile Lab - Drag & Gravity Sandbox",
        left,
        TITLE_Y,
        30,
        Color::from_rgba(30, 30, 35, 255),
        font,
    );
    draw_ui_text(
        "Controls: sliders set launch and environment | Space fire | R move target | Esc abort",
        left,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );
}

/// Live position relative to the launch point, drawn inside the arena.
fn draw_position_readout(session: &FlightSession, left: f32, top: f32, font: Option<&Font>) {
    if !session.is_active() && session.measurement().elapsed_time <= 0.0 {
        return;
    }
    let arena = session.arena();
    let state = session.state();
    let lines = [
        format!("Position X : {:.1} m", state.x - arena.launch_origin_x),
        format!("Position Y : {:.1} m", arena.height_of(state.y)),
        format!("Speed      : {:.1} m/s", state.speed()),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_ui_text(line, left + 10.0, top + 22.0 + (i as f32 * 20.0), 16, WHITE, font);
    }
}

/// Telemetry is only final once a terminal event has fired.
fn draw_results_block(session: &FlightSession, right: f32, top: f32, font: Option<&Font>) {
    let measurement = session.measurement();
    let (time, height) = if session.phase().is_terminal() {
        (measurement.elapsed_time, measurement.max_height)
    } else {
        (0.0, 0.0)
    };
    let range = measurement.final_range.unwrap_or(0.0);
    let lines = [
        format!("Time   : {time:.2} s"),
        format!("Range  : {range:.2} m"),
        format!("Height : {height:.2} m"),
    ];
    for (i, line) in lines.iter().enumerate() {
        let size = measure_text(line, font, 18, 1.0);
        draw_ui_text(
            line,
            right - size.width - 10.0,
            top + 22.0 + (i as f32 * 22.0),
            18,
            WHITE,
            font,
        );
    }
}

fn draw_status_block(
    state: &AppRuntime,
    prediction: Option<&Prediction>,
    left: f32,
    screen_h: f32,
    font: Option<&Font>,
) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    let controls = state.sliders.controls();
    let phase = phase_text(state.session.phase(), state.session.is_off_screen());

    draw_ui_text(
        &format!(
            "Angle: {:.0} deg | Power: {:.0} m/s | Mass: {:.1} kg | Drag: {:.3} | g: {:.2} m/s^2",
            controls.angle_deg,
            controls.power,
            controls.mass,
            controls.drag_coefficient(),
            controls.gravity
        ),
        left,
        screen_h - 76.0,
        22,
        header_color,
        font,
    );
    draw_ui_text(
        &format!(
            "{} | State: {} | Preset: {}",
            state.status_line,
            phase,
            state.preset.label()
        ),
        left,
        screen_h - 45.0,
        20,
        BLUE,
        font,
    );

    if let Some(prediction) = prediction {
        let range = prediction
            .measurement
            .final_range
            .map_or_else(|| "-".to_string(), |r| format!("{r:.2} m"));
        let verdict = match prediction.phase {
            FlightPhase::TargetHit => "on target",
            FlightPhase::OutOfBounds => "leaves the field",
            _ if prediction.timed_out => "never lands",
            _ => "misses",
        };
        draw_ui_text(
            &format!(
                "Preview -> range {range}, flight {:.2} s, {verdict}",
                prediction.measurement.elapsed_time
            ),
            left,
            screen_h - 14.0,
            18,
            DARKGRAY,
            font,
        );
    }
}
