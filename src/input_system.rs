use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Actions the player can perform in the game
///
/// This enum represents all possible high-level game actions that can be
/// triggered by input. It decouples input handling from action execution.
/// What `Advance` does depends on the current game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Space: start a run, switch sides, or leave the summary
    Advance,
    /// Escape
    ToggleFullscreen,
    /// M
    ToggleMute,
    /// Window closed
    Quit,
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// Every state listens to the same four inputs, so unlike a menu-heavy game
/// there is no input context to filter by. Unmapped events are dropped.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drain all pending SDL2 events and translate them to actions, in order
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(&event))
            .collect()
    }

    /// Map a single event to an action, if it has one
    pub fn translate(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat,
                ..
            } => self.handle_keydown(*key, *repeat),
            _ => None,
        }
    }

    /// Held keys auto-repeat; only the first press counts
    fn handle_keydown(&self, key: Keycode, repeat: bool) -> Option<GameAction> {
        if repeat {
            return None;
        }

        match key {
            Keycode::Space => Some(GameAction::Advance),
            Keycode::Escape => Some(GameAction::ToggleFullscreen),
            Keycode::M => Some(GameAction::ToggleMute),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
