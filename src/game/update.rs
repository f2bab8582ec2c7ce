// Simulation step
//
// One call advances the game by exactly one tick. State transitions out of
// Menu and Summary come from input; the only transition made here is
// Playing -> Summary once every cloud is collected.

use super::{
    BOTTOM_REST_Y, BOTTOM_REVEAL_STEP, CLOUDS_TO_WIN, Game, GameEvent, GameState, SoundCue,
    VIEWPORT_HEIGHT,
};

impl Game {
    pub fn update(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        match self.session.state {
            GameState::Menu => {
                self.session.bottom_y = BOTTOM_REST_Y;
                self.session.speed = self.scroll.menu_speed;
            }
            GameState::Playing => self.update_playing(&mut events),
            GameState::Summary => {
                self.session.bottom_y = BOTTOM_REST_Y;
            }
        }

        events
    }

    fn update_playing(&mut self, events: &mut Vec<GameEvent>) {
        self.session.run_ticks += 1;

        // Sink the bottom strip out of view
        self.session.bottom_y = (self.session.bottom_y + BOTTOM_REVEAL_STEP).min(VIEWPORT_HEIGHT);

        self.session.speed = (self.session.speed + self.scroll.speed_step).min(self.scroll.speed_cap);

        self.world.scroll(self.session.speed, &mut self.rng);

        if !self.session.is_complete() && self.world.try_catch_cloud() {
            self.session.collect_cloud();
            tracing::debug!("Cloud collected ({}/{})", self.session.clouds, CLOUDS_TO_WIN);

            if self.play_collect_sound && !self.session.muted {
                events.push(GameEvent::PlaySound(SoundCue::CollectCloud));
            }
        }

        if self.session.is_complete() {
            self.session.state = GameState::Summary;
            tracing::info!("All {} clouds collected in {} ticks", CLOUDS_TO_WIN, self.session.run_ticks);
            events.push(GameEvent::RunFinished {
                ticks: self.session.run_ticks,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, ScrollConfig};
    use crate::input_system::GameAction;
    use crate::player::{PLAYER_LEFT_X, PLAYER_RIGHT_X};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn config_with_scroll(scroll: ScrollConfig) -> GameConfig {
        GameConfig {
            seed: Some(99),
            scroll,
            ..GameConfig::default()
        }
    }

    fn playing_game() -> Game {
        let mut game = Game::new(&config_with_scroll(ScrollConfig::default()));
        game.handle_action(GameAction::Advance);
        game
    }

    /// Park a fresh cloud just above the player's hit band on their side
    fn drop_cloud_on_player(game: &mut Game) {
        game.world.cloud.side = game.world.player.side;
        game.world.cloud.y = game.world.player.y as f32 + 1.0;
        game.world.cloud.collided = false;
    }

    #[test]
    fn test_menu_pins_bottom_and_speed() {
        let mut game = Game::new(&config_with_scroll(ScrollConfig::default()));
        game.session.bottom_y = 10.0;
        game.session.speed = 9.0;

        game.update();

        assert_eq!(game.session.bottom_y, BOTTOM_REST_Y);
        assert_eq!(game.session.speed, 0.5);
    }

    #[test]
    fn test_bottom_sinks_then_stops_at_viewport() {
        let mut game = playing_game();
        game.update();
        assert_eq!(game.session.bottom_y, BOTTOM_REST_Y + BOTTOM_REVEAL_STEP);

        for _ in 0..1_000 {
            game.update();
            if game.session.state != GameState::Playing {
                break;
            }
        }
        assert_eq!(game.session.bottom_y, VIEWPORT_HEIGHT);
    }

    #[test]
    fn test_speed_never_exceeds_cap() {
        let mut game = Game::new(&config_with_scroll(ScrollConfig {
            menu_speed: 0.5,
            start_speed: 1.0,
            speed_step: 0.0001,
            speed_cap: 1.5,
        }));
        game.handle_action(GameAction::Advance);
        assert_eq!(game.session.speed, 1.0);

        for _ in 0..10_000 {
            // Keep the run going so the ramp is never cut short by a win
            game.session.clouds = 0;
            game.update();
            assert!(game.session.speed <= 1.5);
        }
        assert_eq!(game.session.speed, 1.5);
    }

    #[test]
    fn test_collision_counts_and_plays_cue() {
        let mut game = playing_game();
        drop_cloud_on_player(&mut game);

        let events = game.update();

        assert_eq!(game.session.clouds, 1);
        assert!(game.world.cloud.collided);
        assert_eq!(events, vec![GameEvent::PlaySound(SoundCue::CollectCloud)]);

        // Still in the band, but already caught this cycle
        game.update();
        assert_eq!(game.session.clouds, 1);
    }

    #[test]
    fn test_collect_cue_respects_mute_and_config() {
        let mut game = playing_game();
        game.session.muted = true;
        drop_cloud_on_player(&mut game);
        assert!(game.update().is_empty());

        let mut game = Game::new(&GameConfig {
            play_collect_sound: false,
            seed: Some(1),
            ..GameConfig::default()
        });
        game.handle_action(GameAction::Advance);
        drop_cloud_on_player(&mut game);
        assert!(game.update().is_empty());
        assert_eq!(game.session.clouds, 1);
    }

    #[test]
    fn test_opposite_side_cloud_is_missed() {
        let mut game = playing_game();
        game.world.cloud.side = game.world.player.side.opposite();
        game.world.cloud.y = game.world.player.y as f32 + 1.0;

        game.update();

        assert_eq!(game.session.clouds, 0);
        assert!(!game.world.cloud.collided);
    }

    #[test]
    fn test_tenth_cloud_ends_run() {
        let mut game = playing_game();
        game.session.clouds = CLOUDS_TO_WIN - 1;
        drop_cloud_on_player(&mut game);

        let events = game.update();

        assert_eq!(game.session.clouds, CLOUDS_TO_WIN);
        assert_eq!(game.session.state, GameState::Summary);
        assert!(matches!(events.last(), Some(GameEvent::RunFinished { ticks: 1 })));

        // No more counting after the run is over
        drop_cloud_on_player(&mut game);
        game.update();
        assert_eq!(game.session.clouds, CLOUDS_TO_WIN);
        assert!(!game.world.cloud.collided);
    }

    #[test]
    fn test_full_run_scenario() {
        let mut game = Game::new(&config_with_scroll(ScrollConfig::default()));
        assert_eq!(game.session.state, GameState::Menu);

        game.handle_action(GameAction::Advance);
        assert_eq!(game.session.state, GameState::Playing);
        assert_eq!(game.session.speed, 0.5);

        assert_eq!(game.world.player.x(), PLAYER_LEFT_X);
        game.handle_action(GameAction::Advance);
        assert_eq!(game.world.player.x(), PLAYER_RIGHT_X);

        for caught in 1..=CLOUDS_TO_WIN {
            assert_eq!(game.session.state, GameState::Playing);
            drop_cloud_on_player(&mut game);
            game.update();
            assert_eq!(game.session.clouds, caught);
        }
        assert_eq!(game.session.state, GameState::Summary);

        game.update();
        assert_eq!(game.session.bottom_y, BOTTOM_REST_Y);
    }

    #[test]
    fn test_random_play_count_is_monotonic_and_bounded() {
        let mut game = Game::new(&config_with_scroll(ScrollConfig {
            menu_speed: 0.5,
            start_speed: 8.0,
            speed_step: 0.01,
            speed_cap: 20.0,
        }));
        game.handle_action(GameAction::Advance);

        let mut player_rng = StdRng::seed_from_u64(2024);
        let mut last = game.session.clouds;

        for _ in 0..50_000 {
            if game.session.state == GameState::Playing && player_rng.gen_bool(0.02) {
                game.handle_action(GameAction::Advance);
            }
            game.update();

            assert!(game.session.clouds >= last);
            assert!(game.session.clouds <= CLOUDS_TO_WIN);
            last = game.session.clouds;
        }
        assert_eq!(game.session.state, GameState::Summary);
    }
}
