/// Frame rendering
///
/// Rendering is a read-only pass over the game. It runs in two steps:
///
/// - `build_draw_list()`: decides what goes on screen and where, as plain data
/// - `render_frame()`: clears the canvas, executes the list, presents
///
/// Keeping the first step free of SDL makes the screen layout testable.
use crate::assets::{GameTextures, Sprite};
use crate::game::{CLOUDS_TO_WIN, Game, GameState, Side};
use crate::text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const BACKGROUND_COLOR: Color = Color::RGB(123, 197, 205);
/// Top-left corner of the menu and summary panels
pub const PANEL_POSITION: (i32, i32) = (20, 20);

const COUNTER_COLOR: Color = Color::RGB(255, 255, 255);
const COUNTER_SCALE: u32 = 2;
const COUNTER_MARGIN: i32 = 8;

/// A single draw operation, in painter's order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Sprite { sprite: Sprite, x: i32, y: i32 },
    Counter { label: String, x: i32, y: i32 },
}

/// Work out everything to draw this frame, back to front
pub fn build_draw_list(game: &Game, canvas_width: u32) -> Vec<DrawCommand> {
    let session = &game.session;
    let world = &game.world;
    let (panel_x, panel_y) = PANEL_POSITION;

    let mut commands = vec![DrawCommand::Sprite {
        sprite: Sprite::Bottom,
        x: 0,
        y: session.bottom_y.floor() as i32,
    }];

    match session.state {
        GameState::Menu => commands.push(DrawCommand::Sprite {
            sprite: Sprite::MainMenu,
            x: panel_x,
            y: panel_y,
        }),
        GameState::Playing => {
            for (x, y) in world.pipe_draw_positions() {
                commands.push(DrawCommand::Sprite { sprite: Sprite::Pipe, x, y });
            }

            let (x, y) = world.player.position();
            let sprite = match world.player.side {
                Side::Left => Sprite::PlayerLeft,
                Side::Right => Sprite::PlayerRight,
            };
            commands.push(DrawCommand::Sprite { sprite, x, y });

            if world.cloud.is_visible() {
                let (x, y) = world.cloud.draw_position();
                commands.push(DrawCommand::Sprite { sprite: Sprite::Cloud, x, y });
            }

            let label = text::counter_label(session.clouds, CLOUDS_TO_WIN);
            let width = text::text_width(&label, COUNTER_SCALE) as i32;
            commands.push(DrawCommand::Counter {
                label,
                x: canvas_width as i32 - width - COUNTER_MARGIN,
                y: COUNTER_MARGIN,
            });
        }
        GameState::Summary => commands.push(DrawCommand::Sprite {
            sprite: Sprite::Summary,
            x: panel_x,
            y: panel_y,
        }),
    }

    commands
}

/// Draw and present one frame
pub fn render_frame(
    canvas: &mut Canvas<Window>,
    textures: &GameTextures,
    game: &Game,
) -> Result<(), String> {
    canvas.set_draw_color(BACKGROUND_COLOR);
    canvas.clear();

    let (canvas_width, _) = canvas.logical_size();

    for command in build_draw_list(game, canvas_width) {
        match command {
            DrawCommand::Sprite { sprite, x, y } => {
                let texture = textures.get(sprite);
                let query = texture.query();
                canvas.copy(texture, None, Rect::new(x, y, query.width, query.height))?;
            }
            DrawCommand::Counter { label, x, y } => {
                text::draw_text(canvas, &label, x, y, COUNTER_COLOR, COUNTER_SCALE)?;
            }
        }
    }

    canvas.present();
    Ok(())
}
