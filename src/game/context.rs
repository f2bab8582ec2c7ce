// Game: the one context object the loop driver owns
//
// Holds the session, the world, and the RNG used for cloud placement. Input
// handling lives in events.rs and the simulation step in update.rs; both are
// `impl Game` blocks over this struct.

use crate::config::{GameConfig, ScrollConfig};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{DisplayMode, GameWorld, SessionData};

pub struct Game {
    pub session: SessionData,
    pub world: GameWorld,
    pub(super) rng: StdRng,
    pub(super) scroll: ScrollConfig,
    pub(super) play_collect_sound: bool,
}

impl Game {
    /// Create a game in the menu, seeding the RNG from config or entropy
    pub fn new(config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: &GameConfig, mut rng: StdRng) -> Self {
        let display_mode = if config.start_fullscreen {
            DisplayMode::Fullscreen
        } else {
            DisplayMode::Windowed
        };

        let session = SessionData::new(display_mode, config.start_muted, config.scroll.menu_speed);
        let world = GameWorld::new(&mut rng);

        Game {
            session,
            world,
            rng,
            scroll: config.scroll.clone(),
            play_collect_sound: config.play_collect_sound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn test_new_game_follows_config() {
        let config = GameConfig {
            start_fullscreen: true,
            start_muted: true,
            seed: Some(11),
            ..GameConfig::default()
        };
        let game = Game::new(&config);

        assert_eq!(game.session.state, GameState::Menu);
        assert_eq!(game.session.display_mode, DisplayMode::Fullscreen);
        assert!(game.session.muted);
        assert_eq!(game.session.speed, config.scroll.menu_speed);
    }

    #[test]
    fn test_same_seed_same_clouds() {
        let config = GameConfig {
            seed: Some(1234),
            ..GameConfig::default()
        };
        let a = Game::new(&config);
        let b = Game::new(&config);
        assert_eq!(a.world.cloud, b.world.cloud);
    }
}
