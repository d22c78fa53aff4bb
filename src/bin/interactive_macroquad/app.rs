use macroquad::prelude::*;
use tracing::warn;

use projectile_sim::core::constants::MAX_PREVIEW_TIME_S;
use projectile_sim::core::preview::{Prediction, predict};

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    PREVIEW_COLOR, RIGHT_MARGIN, TOP_MARGIN, TRAIL_COLOR, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::{apply_actions, step_active_flight};
use crate::hud::draw_hud;
use crate::render::{
    ArenaView, draw_arena, draw_cannon, draw_path, draw_projectile, draw_target,
};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Lab".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn aiming_preview(state: &AppRuntime) -> Option<Prediction> {
    if !state.show_preview || state.session.is_active() {
        return None;
    }
    let session = &state.session;
    predict(
        &state.launch_config(),
        *session.arena(),
        *session.target(),
        state.sliders.controls().launch(),
        MAX_PREVIEW_TIME_S,
    )
    .ok()
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new();

    loop {
        let screen_w = screen_width();
        let screen_h = screen_height();

        let left = LEFT_MARGIN;
        let right = screen_w - RIGHT_MARGIN;
        let top = TOP_MARGIN;
        let bottom = screen_h - BOTTOM_MARGIN;

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        step_active_flight(&mut state);

        let prediction = aiming_preview(&state);
        let arena = *state.session.arena();
        let view = ArenaView::fit(&arena, left, right, top, bottom);
        let arena_right = view.to_screen(arena.width, 0.0).x;

        clear_background(Color::from_rgba(250, 251, 253, 255));
        draw_arena(&view, &arena);
        draw_target(&view, state.session.target());

        if let Some(prediction) = &prediction {
            draw_path(&view, &arena, &prediction.points, 2.0, PREVIEW_COLOR);
        }
        draw_path(
            &view,
            &arena,
            state.session.trajectory().points(),
            2.0,
            TRAIL_COLOR,
        );

        draw_cannon(
            &view,
            &arena,
            state.options.ground_mode,
            state.sliders.angle_deg,
        );
        draw_projectile(&view, &state.session);

        draw_hud(
            &state,
            prediction.as_ref(),
            left,
            arena_right,
            top,
            screen_h,
            ui_font.as_ref(),
        );

        next_frame().await;
    }
}
