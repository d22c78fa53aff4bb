use macroquad::prelude::*;

use projectile_sim::core::{Arena, FlightSession, GroundMode, SamplePoint, Target};

use crate::constants::{
    ARENA_BG, CANNON_COLOR, CANNON_LENGTH, CANNON_THICKNESS, GROUND_COLOR, OFFSCREEN_MARKER_PX,
    PROJECTILE_COLOR, TARGET_COLOR,
};

/// Uniform scaling of the arena's viewport units into the plot rectangle.
#[derive(Clone, Copy)]
pub(crate) struct ArenaView {
    pub(crate) left: f32,
    pub(crate) top: f32,
    pub(crate) scale: f32,
}

impl ArenaView {
    pub(crate) fn fit(arena: &Arena, left: f32, right: f32, top: f32, bottom: f32) -> Self {
        let scale_x = (right - left).max(1.0) / arena.width as f32;
        let scale_y = (bottom - top).max(1.0) / arena.ground_level as f32;
        Self {
            left,
            top,
            scale: scale_x.min(scale_y),
        }
    }

    pub(crate) fn to_screen(&self, x: f64, y: f64) -> Vec2 {
        vec2(
            self.left + (x as f32 * self.scale),
            self.top + (y as f32 * self.scale),
        )
    }

    pub(crate) fn length(&self, units: f64) -> f32 {
        units as f32 * self.scale
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_arena(view: &ArenaView, arena: &Arena) {
    let top_left = view.to_screen(0.0, 0.0);
    let w = view.length(arena.width);
    let h = view.length(arena.ground_level);
    draw_rectangle(top_left.x, top_left.y, w, h, ARENA_BG);
    draw_rectangle(top_left.x, top_left.y + h - 2.0, w, 2.0, GROUND_COLOR);
}

pub(crate) fn draw_target(view: &ArenaView, target: &Target) {
    let corner = view.to_screen(target.x, target.y);
    draw_rectangle(
        corner.x,
        corner.y,
        view.length(target.width),
        view.length(target.height),
        TARGET_COLOR,
    );
}

pub(crate) fn draw_path(
    view: &ArenaView,
    arena: &Arena,
    points: &[SamplePoint],
    thickness: f32,
    color: Color,
) {
    if points.len() < 2 {
        return;
    }
    // Segments past the viewport are not drawn.
    let visible = points.iter().take_while(|p| p.x <= arena.width);
    let mut prev: Option<Vec2> = None;
    for point in visible {
        let cur = view.to_screen(point.x, point.y);
        if let Some(prev) = prev {
            draw_line(prev.x, prev.y, cur.x, cur.y, thickness, color);
        }
        prev = Some(cur);
    }
}

pub(crate) fn draw_cannon(view: &ArenaView, arena: &Arena, mode: GroundMode, angle_deg: f32) {
    let base = view.to_screen(arena.launch_origin_x, arena.ground_contact_y(mode));
    let theta = angle_deg.to_radians();
    let tip = base + vec2(theta.cos(), -theta.sin()) * (CANNON_LENGTH * view.scale);
    draw_line(
        base.x,
        base.y,
        tip.x,
        tip.y,
        CANNON_THICKNESS * view.scale,
        CANNON_COLOR,
    );
}

pub(crate) fn draw_projectile(view: &ArenaView, session: &FlightSession) {
    let flown = session.is_active() || session.measurement().elapsed_time > 0.0;
    if !flown {
        return;
    }

    let arena = session.arena();
    let state = session.state();
    if state.x > arena.width + arena.projectile_radius {
        draw_offscreen_marker(view, arena, state.y);
        return;
    }

    let p = view.to_screen(state.x, state.y);
    draw_circle(p.x, p.y, view.length(arena.projectile_radius), PROJECTILE_COLOR);
}

fn draw_offscreen_marker(view: &ArenaView, arena: &Arena, y: f64) {
    let clamped_y = y.clamp(0.0, arena.ground_level);
    let edge = view.to_screen(arena.width, clamped_y);
    let size = OFFSCREEN_MARKER_PX;
    draw_triangle(
        vec2(edge.x, edge.y),
        vec2(edge.x - size, edge.y - size * 0.6),
        vec2(edge.x - size, edge.y + size * 0.6),
        ORANGE,
    );
}
