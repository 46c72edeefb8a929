// src/views/theme.rs
//
// Flair modes and the row of buttons that switches between them.
// Exactly one control is active at any time.

use nannou::prelude::*;

pub const BUTTON_SIZE: (f32, f32) = (132.0, 36.0);
const BUTTON_SPACING: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlairMode {
    #[default]
    Cinematic,
    Neon,
}

impl FlairMode {
    pub const ALL: [FlairMode; 2] = [FlairMode::Cinematic, FlairMode::Neon];

    /// Anything that is not "neon" falls back to cinematic.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("neon") {
            FlairMode::Neon
        } else {
            FlairMode::Cinematic
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FlairMode::Cinematic => "cinematic",
            FlairMode::Neon => "neon",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FlairButton {
    pub mode: FlairMode,
    pub center: Vec2, // window space, y down
    pub active: bool,
}

impl FlairButton {
    pub fn contains(&self, point: Vec2) -> bool {
        (point.x - self.center.x).abs() <= BUTTON_SIZE.0 / 2.0
            && (point.y - self.center.y).abs() <= BUTTON_SIZE.1 / 2.0
    }
}

#[derive(Debug, Clone)]
pub struct FlairControls {
    buttons: Vec<FlairButton>,
    mode: FlairMode,
}

impl FlairControls {
    pub fn new(center: Vec2) -> Self {
        let mut controls = Self {
            buttons: FlairMode::ALL
                .iter()
                .map(|&mode| FlairButton {
                    mode,
                    center,
                    active: false,
                })
                .collect(),
            mode: FlairMode::default(),
        };
        controls.place(center);
        controls.select(FlairMode::default());
        controls
    }

    pub fn mode(&self) -> FlairMode {
        self.mode
    }

    pub fn buttons(&self) -> &[FlairButton] {
        &self.buttons
    }

    /// Lays the buttons out in a row centred on `center`.
    pub fn place(&mut self, center: Vec2) {
        let count = self.buttons.len() as f32;
        let row_width = count * BUTTON_SIZE.0 + (count - 1.0) * BUTTON_SPACING;
        let mut x = center.x - row_width / 2.0 + BUTTON_SIZE.0 / 2.0;
        for button in self.buttons.iter_mut() {
            button.center = vec2(x, center.y);
            x += BUTTON_SIZE.0 + BUTTON_SPACING;
        }
    }

    pub fn select(&mut self, mode: FlairMode) {
        for button in self.buttons.iter_mut() {
            button.active = false;
        }
        if let Some(button) = self.buttons.iter_mut().find(|b| b.mode == mode) {
            button.active = true;
        }
        self.mode = mode;
    }

    /// Hit-tests a click in window space, selecting the mode under it.
    pub fn click(&mut self, point: Vec2) -> Option<FlairMode> {
        let mode = self.buttons.iter().find(|b| b.contains(point))?.mode;
        self.select(mode);
        Some(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_modes(controls: &FlairControls) -> Vec<FlairMode> {
        controls
            .buttons()
            .iter()
            .filter(|b| b.active)
            .map(|b| b.mode)
            .collect()
    }

    #[test]
    fn test_starts_cinematic() {
        let controls = FlairControls::new(vec2(400.0, 500.0));
        assert_eq!(controls.mode(), FlairMode::Cinematic);
        assert_eq!(active_modes(&controls), vec![FlairMode::Cinematic]);
    }

    #[test]
    fn test_select_is_mutually_exclusive() {
        let mut controls = FlairControls::new(vec2(400.0, 500.0));
        controls.select(FlairMode::Neon);
        assert_eq!(active_modes(&controls), vec![FlairMode::Neon]);
        controls.select(FlairMode::Neon);
        assert_eq!(active_modes(&controls), vec![FlairMode::Neon]);
        controls.select(FlairMode::Cinematic);
        assert_eq!(active_modes(&controls), vec![FlairMode::Cinematic]);
    }

    #[test]
    fn test_click_hits_buttons() {
        let mut controls = FlairControls::new(vec2(400.0, 500.0));
        let neon_center = controls.buttons()[1].center;

        assert_eq!(controls.click(neon_center), Some(FlairMode::Neon));
        assert_eq!(controls.mode(), FlairMode::Neon);

        // a miss changes nothing
        assert_eq!(controls.click(vec2(0.0, 0.0)), None);
        assert_eq!(controls.mode(), FlairMode::Neon);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let controls = FlairControls::new(vec2(400.0, 500.0));
        let [a, b] = [&controls.buttons()[0], &controls.buttons()[1]];
        assert!(b.center.x - a.center.x >= BUTTON_SIZE.0);
        assert_eq!(a.center.y, b.center.y);
        assert!(((a.center.x + b.center.x) / 2.0 - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(FlairMode::from_name("neon"), FlairMode::Neon);
        assert_eq!(FlairMode::from_name(" NEON "), FlairMode::Neon);
        assert_eq!(FlairMode::from_name("cinematic"), FlairMode::Cinematic);
        assert_eq!(FlairMode::from_name("anything"), FlairMode::Cinematic);
    }
}
