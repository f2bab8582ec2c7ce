use crate::game::{Side, VIEWPORT_HEIGHT};
use rand::Rng;

/// x of the cloud sprite in each slot
pub const CLOUD_LEFT_X: i32 = 113;
pub const CLOUD_RIGHT_X: i32 = 164;
/// Spawn height, just above the top edge of the screen
pub const CLOUD_SPAWN_Y: f32 = -42.0;

/// The single collectible cloud.
///
/// A spawn cycle lasts from `spawn` until the cloud scrolls past the bottom
/// of the viewport. Once `collided` is set it stays set for the rest of the
/// cycle and the cloud is no longer drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub side: Side,
    pub y: f32,
    pub collided: bool,
}

impl Cloud {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cloud = Cloud {
            side: Side::Left,
            y: CLOUD_SPAWN_Y,
            collided: false,
        };
        cloud.spawn(rng);
        cloud
    }

    /// Start a new spawn cycle above the viewport, in a random slot
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.y = CLOUD_SPAWN_Y;
        self.collided = false;
        self.side = if rng.gen_bool(0.5) { Side::Left } else { Side::Right };
    }

    /// Scroll down by `speed`. A cloud already past the viewport respawns first.
    pub fn advance<R: Rng + ?Sized>(&mut self, speed: f32, rng: &mut R) {
        if self.y >= VIEWPORT_HEIGHT {
            self.spawn(rng);
        }
        self.y += speed;
    }

    pub fn x(&self) -> i32 {
        match self.side {
            Side::Left => CLOUD_LEFT_X,
            Side::Right => CLOUD_RIGHT_X,
        }
    }

    pub fn mark_collided(&mut self) {
        self.collided = true;
    }

    pub fn is_visible(&self) -> bool {
        !self.collided
    }

    pub fn draw_position(&self) -> (i32, i32) {
        (self.x(), self.y.floor() as i32)
    }
}
