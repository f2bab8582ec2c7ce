// SessionData: everything about the current play session that isn't an entity

use super::types::{BOTTOM_REST_Y, CLOUDS_TO_WIN, DisplayMode, GameState};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionData {
    pub display_mode: DisplayMode,
    pub state: GameState,
    /// Clouds collected this run, never above `CLOUDS_TO_WIN`
    pub clouds: u32,
    pub muted: bool,
    /// Pixels per tick applied to pipes and cloud
    pub speed: f32,
    /// y of the bottom strip
    pub bottom_y: f32,
    /// Ticks spent in Playing this run
    pub run_ticks: u64,
}

impl SessionData {
    pub fn new(display_mode: DisplayMode, muted: bool, menu_speed: f32) -> Self {
        SessionData {
            display_mode,
            state: GameState::Menu,
            clouds: 0,
            muted,
            speed: menu_speed,
            bottom_y: BOTTOM_REST_Y,
            run_ticks: 0,
        }
    }

    /// Count one collected cloud. Returns false once the run is already full.
    pub fn collect_cloud(&mut self) -> bool {
        if self.clouds >= CLOUDS_TO_WIN {
            return false;
        }
        self.clouds += 1;
        true
    }

    pub fn is_complete(&self) -> bool {
        self.clouds >= CLOUDS_TO_WIN
    }
}
