use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use sdl2::image::LoadTexture;
use sdl2::render::{Texture, TextureCreator};
use sdl2::video::WindowContext;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    Bottom,
    MainMenu,
    Summary,
    Pipe,
    PlayerLeft,
    PlayerRight,
    Cloud,
}

impl Sprite {
    pub const ALL: [Sprite; 7] = [
        Sprite::Bottom,
        Sprite::MainMenu,
        Sprite::Summary,
        Sprite::Pipe,
        Sprite::PlayerLeft,
        Sprite::PlayerRight,
        Sprite::Cloud,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Sprite::Bottom => "bottom.png",
            Sprite::MainMenu => "main_menu.png",
            Sprite::Summary => "summary.png",
            Sprite::Pipe => "pipe.png",
            Sprite::PlayerLeft => "player_left.png",
            Sprite::PlayerRight => "player_right.png",
            Sprite::Cloud => "cloud.png",
        }
    }
}

/// Helper struct to hold all game textures
/// Loaded once at startup; any missing image is fatal.
pub struct GameTextures<'a> {
    bottom: Texture<'a>,
    main_menu: Texture<'a>,
    summary: Texture<'a>,
    pipe: Texture<'a>,
    player_left: Texture<'a>,
    player_right: Texture<'a>,
    cloud: Texture<'a>,
}

impl<'a> GameTextures<'a> {
    pub fn load(
        texture_creator: &'a TextureCreator<WindowContext>,
        config: &GameConfig,
    ) -> GameResult<Self> {
        let load = |sprite: Sprite| load_texture(texture_creator, config, sprite);

        let textures = GameTextures {
            bottom: load(Sprite::Bottom)?,
            main_menu: load(Sprite::MainMenu)?,
            summary: load(Sprite::Summary)?,
            pipe: load(Sprite::Pipe)?,
            player_left: load(Sprite::PlayerLeft)?,
            player_right: load(Sprite::PlayerRight)?,
            cloud: load(Sprite::Cloud)?,
        };

        tracing::info!("Loaded {} textures from {}", Sprite::ALL.len(), config.asset_dir.display());
        Ok(textures)
    }

    pub fn get(&self, sprite: Sprite) -> &Texture<'a> {
        match sprite {
            Sprite::Bottom => &self.bottom,
            Sprite::MainMenu => &self.main_menu,
            Sprite::Summary => &self.summary,
            Sprite::Pipe => &self.pipe,
            Sprite::PlayerLeft => &self.player_left,
            Sprite::PlayerRight => &self.player_right,
            Sprite::Cloud => &self.cloud,
        }
    }
}

/// Loads a texture with consistent error handling
fn load_texture<'a>(
    texture_creator: &'a TextureCreator<WindowContext>,
    config: &GameConfig,
    sprite: Sprite,
) -> GameResult<Texture<'a>> {
    let path = config.asset_path(sprite.file_name());
    texture_creator
        .load_texture(&path)
        .map_err(|message| GameError::Asset { path, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sprite_file_names_unique() {
        let names: HashSet<_> = Sprite::ALL.iter().map(|s| s.file_name()).collect();
        assert_eq!(names.len(), Sprite::ALL.len());
        assert!(names.iter().all(|name| name.ends_with(".png")));
    }
}
