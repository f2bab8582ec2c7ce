// Input handling: applies GameActions to the game context
//
// Actions never touch SDL. Anything the host has to do (play a sound,
// change display mode, quit) comes back as a GameEvent.

use crate::input_system::GameAction;

use super::{Game, GameEvent, GameState, SoundCue};

impl Game {
    /// Apply one action and report the side effects it requests
    pub fn handle_action(&mut self, action: GameAction) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match action {
            GameAction::Advance => self.advance(&mut events),
            GameAction::ToggleFullscreen => {
                self.session.display_mode = self.session.display_mode.toggled();
                tracing::info!("Display mode: {:?}", self.session.display_mode);
                events.push(GameEvent::SetDisplayMode(self.session.display_mode));
            }
            GameAction::ToggleMute => {
                self.session.muted = !self.session.muted;
                tracing::info!("Sound: {}", if self.session.muted { "OFF" } else { "ON" });
                events.push(if self.session.muted {
                    GameEvent::StopMusic
                } else {
                    GameEvent::StartMusic
                });
            }
            GameAction::Quit => events.push(GameEvent::Quit),
        }

        events
    }

    /// Apply a batch of actions in order
    pub fn handle_actions(&mut self, actions: impl IntoIterator<Item = GameAction>) -> Vec<GameEvent> {
        actions
            .into_iter()
            .flat_map(|action| self.handle_action(action))
            .collect()
    }

    fn advance(&mut self, events: &mut Vec<GameEvent>) {
        if !self.session.muted {
            events.push(GameEvent::PlaySound(SoundCue::Click));
        }

        match self.session.state {
            GameState::Menu => {
                self.start_run();
                events.push(GameEvent::RunStarted);
            }
            GameState::Playing => {
                // Summary is only reachable by collecting every cloud
                self.world.player.switch_side();
            }
            GameState::Summary => {
                tracing::info!("Back to menu");
                self.session.state = GameState::Menu;
            }
        }
    }

    /// Menu -> Playing with a clean slate
    fn start_run(&mut self) {
        self.session.state = GameState::Playing;
        self.session.clouds = 0;
        self.session.run_ticks = 0;
        self.session.speed = self.scroll.start_speed;
        self.world.reset(&mut self.rng);
        tracing::info!("Run started");
    }
}
