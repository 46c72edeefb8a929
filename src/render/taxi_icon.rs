// src/render/taxi_icon.rs
//
// The two taxi templates, laid out in a 60x60 view box (y down).
// Horizontal cabs face along the lane, vertical cabs are the same
// artwork turned a quarter.

use nannou::prelude::*;

use crate::models::Orientation;
use crate::views::to_screen;

pub const ICON_VIEWBOX: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconShape {
    Rect,
    Ellipse,
}

#[derive(Debug, Clone, Copy)]
pub struct IconPart {
    pub shape: IconShape,
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub color: u32, // 0xRRGGBB
    pub alpha: f32,
}

const fn rect(x: f32, y: f32, w: f32, h: f32, color: u32, alpha: f32) -> IconPart {
    IconPart {
        shape: IconShape::Rect,
        x,
        y,
        w,
        h,
        color,
        alpha,
    }
}

// bounding box of the ellipse
const fn ellipse(x: f32, y: f32, w: f32, h: f32, color: u32, alpha: f32) -> IconPart {
    IconPart {
        shape: IconShape::Ellipse,
        x,
        y,
        w,
        h,
        color,
        alpha,
    }
}

const SHADOW: u32 = 0x000000;
const OUTLINE: u32 = 0xb88912;
const BODY: u32 = 0xffd94a;
const SHINE: u32 = 0xffe684;
const GLASS: u32 = 0x1e232e;
const ROOF: u32 = 0xffe06a;
const BAND: u32 = 0x111521;
const SIGN: u32 = 0xffffff;
const TYRE: u32 = 0x313744;
const STRIPE_LIGHT: u32 = 0xfff3b8;
const STRIPE_DARK: u32 = 0xcc9d1c;

pub static HORIZONTAL_TAXI: [IconPart; 18] = [
    ellipse(16.0, 39.0, 28.0, 4.0, SHADOW, 0.18),
    rect(5.35, 17.35, 49.3, 25.3, OUTLINE, 1.0),
    rect(6.0, 18.0, 48.0, 24.0, BODY, 1.0),
    rect(8.0, 20.0, 44.0, 20.0, SHINE, 0.45),
    rect(12.0, 22.0, 10.0, 16.0, GLASS, 1.0),
    rect(38.0, 22.0, 10.0, 16.0, GLASS, 1.0),
    rect(24.0, 22.0, 12.0, 16.0, ROOF, 1.0),
    rect(24.0, 28.0, 12.0, 4.0, BAND, 1.0),
    rect(26.0, 28.0, 2.0, 4.0, ROOF, 1.0),
    rect(30.0, 28.0, 2.0, 4.0, ROOF, 1.0),
    rect(34.0, 28.0, 2.0, 4.0, ROOF, 1.0),
    rect(24.2, 18.6, 11.6, 3.7, SIGN, 1.0),
    rect(12.0, 16.2, 8.0, 2.8, TYRE, 1.0),
    rect(12.0, 41.0, 8.0, 2.8, TYRE, 1.0),
    rect(40.0, 16.2, 8.0, 2.8, TYRE, 1.0),
    rect(40.0, 41.0, 8.0, 2.8, TYRE, 1.0),
    rect(7.0, 19.0, 46.0, 2.4, STRIPE_LIGHT, 0.6),
    rect(7.0, 38.6, 46.0, 2.4, STRIPE_DARK, 0.55),
];

pub static VERTICAL_TAXI: [IconPart; 18] = [
    ellipse(21.0, 51.0, 18.0, 4.0, SHADOW, 0.18),
    rect(17.35, 5.35, 25.3, 49.3, OUTLINE, 1.0),
    rect(18.0, 6.0, 24.0, 48.0, BODY, 1.0),
    rect(20.0, 8.0, 20.0, 44.0, SHINE, 0.45),
    rect(22.0, 12.0, 16.0, 10.0, GLASS, 1.0),
    rect(22.0, 38.0, 16.0, 10.0, GLASS, 1.0),
    rect(22.0, 24.0, 16.0, 12.0, ROOF, 1.0),
    rect(22.0, 28.0, 16.0, 4.0, BAND, 1.0),
    rect(25.0, 28.0, 2.0, 4.0, ROOF, 1.0),
    rect(29.0, 28.0, 2.0, 4.0, ROOF, 1.0),
    rect(33.0, 28.0, 2.0, 4.0, ROOF, 1.0),
    rect(24.5, 5.3, 11.0, 3.8, SIGN, 1.0),
    rect(16.2, 13.0, 2.8, 8.0, TYRE, 1.0),
    rect(41.0, 13.0, 2.8, 8.0, TYRE, 1.0),
    rect(16.2, 39.0, 2.8, 8.0, TYRE, 1.0),
    rect(41.0, 39.0, 2.8, 8.0, TYRE, 1.0),
    rect(19.0, 7.0, 2.4, 46.0, STRIPE_LIGHT, 0.6),
    rect(38.6, 7.0, 2.4, 46.0, STRIPE_DARK, 0.55),
];

pub fn template(orientation: Orientation) -> &'static [IconPart] {
    match orientation {
        Orientation::Horizontal => &HORIZONTAL_TAXI,
        Orientation::Vertical => &VERTICAL_TAXI,
    }
}

/// Centre and size of a part once the icon's top-left corner sits at
/// `top_left` (window space) and the view box is stretched to `size`.
pub fn place_part(part: &IconPart, top_left: Vec2, size: Vec2) -> (Vec2, Vec2) {
    let scale = size / ICON_VIEWBOX;
    let center = top_left + vec2(part.x + part.w / 2.0, part.y + part.h / 2.0) * scale;
    (center, vec2(part.w, part.h) * scale)
}

fn part_color(part: &IconPart, opacity: f32) -> Rgba {
    let r = ((part.color >> 16) & 0xff) as f32 / 255.0;
    let g = ((part.color >> 8) & 0xff) as f32 / 255.0;
    let b = (part.color & 0xff) as f32 / 255.0;
    rgba(r, g, b, part.alpha * opacity)
}

/// Draws one taxi. `top_left` and `size` are in window space.
pub fn draw_taxi(
    draw: &Draw,
    window_size: Vec2,
    orientation: Orientation,
    top_left: Vec2,
    size: Vec2,
    opacity: f32,
) {
    for part in template(orientation) {
        let (center, part_size) = place_part(part, top_left, size);
        let screen = to_screen(window_size, center);
        let color = part_color(part, opacity);
        match part.shape {
            IconShape::Rect => {
                draw.rect()
                    .x_y(screen.x, screen.y)
                    .w_h(part_size.x, part_size.y)
                    .color(color);
            }
            IconShape::Ellipse => {
                draw.ellipse()
                    .x_y(screen.x, screen.y)
                    .w_h(part_size.x, part_size.y)
                    .color(color);
            }
        }
    }
}
