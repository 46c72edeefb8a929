// src/config/config_types.rs
//
// Config types for the app

use crate::animation::EasingType;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 640,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClockConfig {
    pub fixed_time: Option<String>, // "HH:MM", freezes the clock for demos
    pub poll_interval: f32,         // seconds between time reads
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            fixed_time: None,
            poll_interval: 1.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct VehicleConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            width: 34.0,
            height: 34.0,
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnimationConfig {
    pub enter_step_ms: f32, // stagger between entering vehicles
    pub exit_step_ms: f32,  // stagger between exiting vehicles
    pub hide_after_ms: f32, // parking -> inactive, counted after the stagger delay
    pub drive_duration: f32,
    pub fade_duration: f32,
    pub easing: EasingType,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enter_step_ms: 65.0,
            exit_step_ms: 45.0,
            hide_after_ms: 1100.0,
            drive_duration: 0.9,
            fade_duration: 0.6,
            easing: EasingType::EaseInOut,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LayoutConfig {
    pub margin: f32,
    pub container_gap: f32,
    pub colon_gap: f32,
    pub controls_height: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: 40.0,
            container_gap: 24.0,
            colon_gap: 48.0,
            controls_height: 56.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct OscConfig {
    pub enabled: bool,
    pub rx_port: u16,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            rx_port: 9000,
        }
    }
}
