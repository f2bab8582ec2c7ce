// Game module - Contains all game logic and state management
//
// This module contains:
// - types.rs: Shared enums and constants
// - session.rs: SessionData (state, counters, speed)
// - world.rs: GameWorld struct and entity management
// - context.rs: Game, the context object the loop driver owns
// - events.rs: Applying input actions
// - update.rs: The per-tick simulation step

// Module declarations
pub mod context;
pub mod events;
pub mod session;
pub mod types;
pub mod update;
pub mod world;

// Re-export types for convenience
pub use context::Game;
pub use session::SessionData;
pub use types::*;
pub use world::GameWorld;
