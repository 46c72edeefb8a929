// src/render/mod.rs
// Drawing of the clock with nannou

pub mod clock_renderer;
pub mod taxi_icon;

pub use clock_renderer::{
    draw_ampm, draw_background, draw_colon, draw_controls, draw_debug, draw_neon_glow,
    draw_vehicles, palette,
};
pub use taxi_icon::{draw_taxi, template, IconPart, IconShape};
