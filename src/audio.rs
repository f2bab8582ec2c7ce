//! Sound playback through SDL2_mixer
//!
//! Short cues go to any free channel; the background track loops on a
//! reserved channel so a burst of clicks can never cut it off. When no
//! audio device is available, or a sound file is missing, the game runs silent.

use crate::config::GameConfig;
use crate::game::SoundCue;
use sdl2::AudioSubsystem;
use sdl2::mixer::{self, Channel, Chunk};

const FREQUENCY: i32 = 22_050;
const STEREO: i32 = 2;
const CHUNK_SIZE: i32 = 512;
const MIX_CHANNELS: i32 = 8;

/// Channel 0 is reserved for the background track
const MUSIC_CHANNEL: Channel = Channel(0);

pub const CLICK_SOUND: &str = "press_space.wav";
pub const COLLECT_SOUND: &str = "collect_cloud.wav";
pub const BACKGROUND_MUSIC: &str = "background_music.wav";

struct SoundBank {
    click: Chunk,
    collect: Chunk,
    music: Chunk,
}

pub struct AudioSystem {
    sounds: Option<SoundBank>,
    // Dropping the last subsystem handle shuts SDL audio down under the
    // mixer, so it is held until after `close_audio` in `Drop`
    _subsystem: Option<AudioSubsystem>,
}

impl AudioSystem {
    /// Open the mixer and load every sound. Never fails; problems are logged
    /// and leave the system silent.
    pub fn new(sdl_context: &sdl2::Sdl, config: &GameConfig) -> Self {
        match Self::open(sdl_context, config) {
            Ok((subsystem, sounds)) => {
                tracing::info!("Audio ready");
                AudioSystem {
                    sounds: Some(sounds),
                    _subsystem: Some(subsystem),
                }
            }
            Err(e) => {
                tracing::warn!("Audio unavailable ({}), running silent", e);
                AudioSystem::silent()
            }
        }
    }

    /// An audio system that ignores every request
    pub fn silent() -> Self {
        AudioSystem {
            sounds: None,
            _subsystem: None,
        }
    }

    fn open(
        sdl_context: &sdl2::Sdl,
        config: &GameConfig,
    ) -> Result<(AudioSubsystem, SoundBank), String> {
        let subsystem = sdl_context.audio()?;
        mixer::open_audio(FREQUENCY, mixer::DEFAULT_FORMAT, STEREO, CHUNK_SIZE)?;
        mixer::allocate_channels(MIX_CHANNELS);
        mixer::reserve_channels(1);

        let load = |file_name: &str| {
            let path = config.asset_path(file_name);
            Chunk::from_file(&path).map_err(|e| format!("failed to load {}: {}", path.display(), e))
        };

        match (load(CLICK_SOUND), load(COLLECT_SOUND), load(BACKGROUND_MUSIC)) {
            (Ok(click), Ok(collect), Ok(music)) => Ok((subsystem, SoundBank { click, collect, music })),
            (Err(e), _, _) | (_, Err(e), _) | (_, _, Err(e)) => {
                mixer::close_audio();
                Err(e)
            }
        }
    }

    /// Fire-and-forget a cue on the first free channel
    pub fn play(&self, cue: SoundCue) {
        let Some(sounds) = &self.sounds else {
            return;
        };

        let chunk = match cue {
            SoundCue::Click => &sounds.click,
            SoundCue::CollectCloud => &sounds.collect,
        };

        if let Err(e) = Channel::all().play(chunk, 0) {
            tracing::debug!("Dropped {:?} cue: {}", cue, e);
        }
    }

    /// Start (or restart) the looping background track
    pub fn start_music(&self) {
        if let Some(sounds) = &self.sounds {
            if let Err(e) = MUSIC_CHANNEL.play(&sounds.music, -1) {
                tracing::warn!("Failed to start background music: {}", e);
            }
        }
    }

    pub fn stop_music(&self) {
        if self.sounds.is_some() {
            MUSIC_CHANNEL.halt();
        }
    }
}

impl Drop for AudioSystem {
    fn drop(&mut self) {
        // Chunks must be freed before the device closes; the subsystem
        // field drops after this body runs
        if self.sounds.take().is_some() {
            mixer::close_audio();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    /// Minimal 16-bit stereo PCM WAV with a few silent frames
    fn write_silent_wav(path: &Path) {
        let data_len: u32 = 64;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&(FREQUENCY as u32).to_le_bytes());
        bytes.extend_from_slice(&(FREQUENCY as u32 * 4).to_le_bytes());
        bytes.extend_from_slice(&4u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        bytes.resize(bytes.len() + data_len as usize, 0);
        std::fs::write(path, bytes).unwrap();
    }

    fn sdl_audio_initialised() -> bool {
        unsafe { sdl2::sys::SDL_WasInit(sdl2::sys::SDL_INIT_AUDIO) != 0 }
    }

    #[test]
    fn test_silent_audio_ignores_requests() {
        let audio = AudioSystem::silent();
        assert!(audio.sounds.is_none());
        audio.play(SoundCue::Click);
        audio.play(SoundCue::CollectCloud);
        audio.start_music();
        audio.stop_music();
    }

    #[test]
    fn test_audio_subsystem_outlives_open() {
        // Only test in this binary that touches SDL; no sound card needed
        unsafe { std::env::set_var("SDL_AUDIODRIVER", "dummy") };
        let Ok(sdl_context) = sdl2::init() else {
            return;
        };

        let asset_dir = std::env::temp_dir().join(format!("ten_clouds_audio_{}", std::process::id()));
        std::fs::create_dir_all(&asset_dir).unwrap();
        for file_name in [CLICK_SOUND, COLLECT_SOUND, BACKGROUND_MUSIC] {
            write_silent_wav(&asset_dir.join(file_name));
        }
        let config = GameConfig {
            asset_dir: asset_dir.clone(),
            ..GameConfig::default()
        };

        let audio = AudioSystem::new(&sdl_context, &config);
        std::fs::remove_dir_all(&asset_dir).ok();

        assert!(audio.sounds.is_some());
        assert!(sdl_audio_initialised(), "SDL audio shut down after open");

        audio.start_music();
        audio.play(SoundCue::Click);
        assert!(sdl_audio_initialised());
    }
}
