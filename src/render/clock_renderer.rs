// src/render/clock_renderer.rs
//
// Draws the clock: background, vehicles, colon, AM/PM text, flair
// buttons and the debug overlay.

use nannou::prelude::*;
use rand::Rng;

use crate::controllers::ClockController;
use crate::render::taxi_icon::draw_taxi;
use crate::views::{theme::BUTTON_SIZE, to_screen, ClockLayout, FlairControls, FlairMode};

pub struct Palette {
    pub background: Rgb,
    pub accent: Rgba,
    pub text: Rgba,
    pub button: Rgba,
    pub button_active: Rgba,
}

pub fn palette(mode: FlairMode) -> Palette {
    match mode {
        FlairMode::Cinematic => Palette {
            background: rgb(0.04, 0.045, 0.06),
            accent: rgba(1.0, 0.85, 0.29, 0.9),
            text: rgba(0.92, 0.92, 0.9, 1.0),
            button: rgba(0.16, 0.17, 0.2, 1.0),
            button_active: rgba(1.0, 0.85, 0.29, 1.0),
        },
        FlairMode::Neon => Palette {
            background: rgb(0.02, 0.0, 0.05),
            accent: rgba(1.0, 0.2, 0.85, 0.95),
            text: rgba(0.6, 1.0, 0.98, 1.0),
            button: rgba(0.12, 0.02, 0.2, 1.0),
            button_active: rgba(0.2, 1.0, 0.95, 1.0),
        },
    }
}

pub fn draw_background(draw: &Draw, mode: FlairMode) {
    draw.background().color(palette(mode).background);
}

/// Soft, flickering glow behind each digit in neon mode.
pub fn draw_neon_glow<R: Rng>(draw: &Draw, layout: &ClockLayout, rng: &mut R) {
    for rect in layout.containers.iter() {
        let flicker: f32 = rng.gen_range(0.75..=1.0);
        let center = to_screen(layout.window_size, rect.origin + rect.size / 2.0);
        for (grow, alpha) in [(1.12_f32, 0.05_f32), (1.04, 0.08)] {
            draw.rect()
                .x_y(center.x, center.y)
                .w_h(rect.size.x * grow, rect.size.y * grow)
                .color(rgba(1.0, 0.1, 0.8, alpha * flicker));
        }
    }
}

pub fn draw_vehicles(draw: &Draw, clock: &ClockController, layout: &ClockLayout, size: Vec2) {
    for container in clock.containers() {
        for vehicle in container.vehicles().filter(|v| v.is_visible()) {
            draw_taxi(
                draw,
                layout.window_size,
                vehicle.orientation(),
                container.rect.origin + vehicle.position(),
                size,
                vehicle.opacity(),
            );
        }
    }
}

pub fn draw_colon(draw: &Draw, layout: &ClockLayout, mode: FlairMode) {
    let radius = (layout.containers[0].size.x / 18.0).max(3.0);
    for dot in layout.colon_dots.iter() {
        let p = to_screen(layout.window_size, *dot);
        draw.ellipse()
            .x_y(p.x, p.y)
            .radius(radius)
            .color(palette(mode).accent);
    }
}

/// Legacy AM/PM region; the 24-hour clock leaves it empty.
pub fn draw_ampm(draw: &Draw, layout: &ClockLayout, text: &str, mode: FlairMode) {
    if text.is_empty() {
        return;
    }
    let p = to_screen(layout.window_size, layout.ampm_anchor);
    draw.text(text)
        .x_y(p.x, p.y)
        .font_size(18)
        .color(palette(mode).text);
}

pub fn draw_controls(draw: &Draw, layout: &ClockLayout, controls: &FlairControls) {
    let colors = palette(controls.mode());
    for button in controls.buttons() {
        let p = to_screen(layout.window_size, button.center);
        let (fill, label) = if button.active {
            (colors.button_active, colors.button)
        } else {
            (colors.button, colors.text)
        };
        draw.rect()
            .x_y(p.x, p.y)
            .w_h(BUTTON_SIZE.0, BUTTON_SIZE.1)
            .color(fill);
        draw.text(button.mode.label())
            .x_y(p.x, p.y)
            .w_h(BUTTON_SIZE.0, BUTTON_SIZE.1)
            .font_size(16)
            .color(label);
    }
}

pub fn draw_debug(draw: &Draw, clock: &ClockController, layout: &ClockLayout, fps: f32) {
    for container in clock.containers() {
        let center = to_screen(
            layout.window_size,
            container.rect.origin + container.rect.size / 2.0,
        );
        draw.rect()
            .x_y(center.x, center.y)
            .w_h(container.rect.size.x, container.rect.size.y)
            .no_fill()
            .stroke(RED)
            .stroke_weight(1.0);

        let label = format!(
            "{} '{}' {}",
            container.position.key(),
            container.digit.unwrap_or(' '),
            container.in_place_cells().len()
        );
        let top = to_screen(layout.window_size, container.rect.origin);
        draw.text(&label)
            .x_y(center.x, top.y + 12.0)
            .font_size(12)
            .color(RED);
    }

    let corner = to_screen(layout.window_size, vec2(60.0, 16.0));
    draw.text(&format!("FPS: {:.1}  timers: {}", fps, clock.pending_timers()))
        .x_y(corner.x, corner.y)
        .w(120.0)
        .font_size(12)
        .color(RED);
}
