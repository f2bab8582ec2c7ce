// Shared enums and constants used throughout the game

/// Logical resolution; the canvas scales this to the window
pub const GAME_WIDTH: u32 = 320;
pub const GAME_HEIGHT: u32 = 480;

/// Viewport height as a scroll coordinate
pub const VIEWPORT_HEIGHT: f32 = GAME_HEIGHT as f32;

/// Resting y of the bottom strip while the menu or summary is shown
pub const BOTTOM_REST_Y: f32 = 388.0;
/// How far the bottom strip sinks per Playing tick
pub const BOTTOM_REVEAL_STEP: f32 = 0.5;

pub const CLOUDS_TO_WIN: u32 = 10;

/// Game state enum for tracking the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Windowed,
    Fullscreen,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Windowed => DisplayMode::Fullscreen,
            DisplayMode::Fullscreen => DisplayMode::Windowed,
        }
    }
}

/// Which side of the pipe something sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Sound cues the game can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    CollectCloud,
}

/// Side effects the simulation asks the host to perform
///
/// The game context never touches SDL directly; the loop driver drains these
/// after every action and update and carries them out.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    PlaySound(SoundCue),
    StartMusic,
    StopMusic,
    SetDisplayMode(DisplayMode),
    RunStarted,
    RunFinished { ticks: u64 },
    Quit,
}
