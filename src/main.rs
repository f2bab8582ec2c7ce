use chrono::{DateTime, Local};
use sdl2::render::Canvas;
use sdl2::video::{FullscreenType, Window};
use tracing_subscriber::EnvFilter;

mod assets;
mod audio;
mod cloud;
mod collision;
mod config;
mod error;
mod frame_limiter;
mod game;
mod input_system;
mod pipe;
mod player;
mod render;
mod text;

use assets::GameTextures;
use audio::AudioSystem;
use config::GameConfig;
use error::GameResult;
use frame_limiter::FrameLimiter;
use game::{DisplayMode, GAME_HEIGHT, GAME_WIDTH, Game, GameEvent};
use input_system::InputSystem;
use render::render_frame;

const WINDOW_TITLE: &str = "10 Clouds";

/// Wall-clock bookkeeping for the log line printed at the end of a run
#[derive(Default)]
struct RunClock {
    started_at: Option<DateTime<Local>>,
}

impl RunClock {
    fn start(&mut self) {
        self.started_at = Some(Local::now());
    }

    fn finish(&mut self, ticks: u64) {
        let finished_at = Local::now();
        match self.started_at.take() {
            Some(started_at) => {
                let elapsed = finished_at - started_at;
                tracing::info!(
                    "Run finished at {}: {} ticks, {:.1}s",
                    finished_at.format("%H:%M:%S"),
                    ticks,
                    elapsed.num_milliseconds() as f64 / 1000.0
                );
            }
            None => tracing::info!("Run finished: {} ticks", ticks),
        }
    }
}

fn apply_display_mode(canvas: &mut Canvas<Window>, mode: DisplayMode) -> GameResult<()> {
    let fullscreen = match mode {
        DisplayMode::Windowed => FullscreenType::Off,
        DisplayMode::Fullscreen => FullscreenType::Desktop,
    };
    canvas.window_mut().set_fullscreen(fullscreen)?;
    Ok(())
}

/// Carry out side effects requested by the game.
///
/// Returns false once a quit has been requested; later events are dropped.
fn apply_events(
    events: Vec<GameEvent>,
    canvas: &mut Canvas<Window>,
    audio: &AudioSystem,
    run_clock: &mut RunClock,
) -> GameResult<bool> {
    for event in events {
        match event {
            GameEvent::PlaySound(cue) => audio.play(cue),
            GameEvent::StartMusic => audio.start_music(),
            GameEvent::StopMusic => audio.stop_music(),
            GameEvent::SetDisplayMode(mode) => apply_display_mode(canvas, mode)?,
            GameEvent::RunStarted => run_clock.start(),
            GameEvent::RunFinished { ticks } => run_clock.finish(ticks),
            GameEvent::Quit => return Ok(false),
        }
    }
    Ok(true)
}

fn main() -> GameResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = GameConfig::load_or_default()?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window(WINDOW_TITLE, GAME_WIDTH, GAME_HEIGHT)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

    // Logical size keeps the 320x480 layout when fullscreen stretches the window
    canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT).map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let textures = GameTextures::load(&texture_creator, &config)?;
    let audio = AudioSystem::new(&sdl_context, &config);
    let mut event_pump = sdl_context.event_pump()?;

    let mut game = Game::new(&config);
    if game.session.display_mode == DisplayMode::Fullscreen {
        apply_display_mode(&mut canvas, DisplayMode::Fullscreen)?;
    }
    if !game.session.muted {
        audio.start_music();
    }

    let input = InputSystem::new();
    let mut limiter = FrameLimiter::new(config.target_fps);
    let mut run_clock = RunClock::default();

    tracing::info!("Controls: SPACE - start / switch side, ESC - fullscreen, M - mute");

    'running: loop {
        let actions = input.poll_events(&mut event_pump);
        let action_events = game.handle_actions(actions);
        if !apply_events(action_events, &mut canvas, &audio, &mut run_clock)? {
            break 'running;
        }

        let update_events = game.update();
        apply_events(update_events, &mut canvas, &audio, &mut run_clock)?;

        render_frame(&mut canvas, &textures, &game)?;

        limiter.wait();
    }

    tracing::info!("Quitting");
    audio.stop_music();

    Ok(())
}
