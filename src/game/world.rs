// GameWorld struct and entity management
//
// Owns the three kinds of entities that exist during play: the player, the
// two pipe segments, and the single cloud. Scrolling lives here so rendering
// can stay a read-only pass.

use crate::cloud::Cloud;
use crate::collision;
use crate::game::GAME_HEIGHT;
use crate::pipe::Pipe;
use crate::player::Player;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct GameWorld {
    pub player: Player,
    pub pipes: [Pipe; 2],
    pub cloud: Cloud,
}

impl GameWorld {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        GameWorld {
            player: Player::new(),
            pipes: Pipe::pair(),
            cloud: Cloud::new(rng),
        }
    }

    /// Put every entity back where a fresh run starts
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.player = Player::new();
        self.pipes = Pipe::pair();
        self.cloud.spawn(rng);
    }

    /// Move pipes and cloud down by one tick's worth of scroll.
    ///
    /// Only the first pipe segment accumulates speed; the second is placed
    /// relative to it so float rounding can never open a gap between them.
    pub fn scroll<R: Rng + ?Sized>(&mut self, speed: f32, rng: &mut R) {
        let [leader, follower] = &mut self.pipes;
        leader.advance(speed);
        follower.follow(leader);
        self.cloud.advance(speed, rng);
    }

    /// Pixel positions of both pipe segments, always exactly one screen apart
    pub fn pipe_draw_positions(&self) -> [(i32, i32); 2] {
        let [leader, follower] = &self.pipes;
        let (x, y) = leader.draw_position();
        let follower_y = if follower.y >= leader.y {
            y + GAME_HEIGHT as i32
        } else {
            y - GAME_HEIGHT as i32
        };
        [(x, y), (follower.x, follower_y)]
    }

    /// Catch the cloud if it is touching the player.
    ///
    /// Returns true when a new catch happened this call.
    pub fn try_catch_cloud(&mut self) -> bool {
        if collision::cloud_hits_player(&self.player, &self.cloud) {
            self.cloud.mark_collided();
            true
        } else {
            false
        }
    }
}
