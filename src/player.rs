use crate::game::Side;

/// x of the player sprite on each side of the pipe
pub const PLAYER_LEFT_X: i32 = 123;
pub const PLAYER_RIGHT_X: i32 = 164;
/// The player never moves vertically; the world scrolls past
pub const PLAYER_Y: i32 = 360;
/// Height of the band below `PLAYER_Y` that catches clouds
pub const PLAYER_HIT_BAND: f32 = 22.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub side: Side,
    pub y: i32,
}

impl Player {
    pub fn new() -> Self {
        Player {
            side: Side::Left,
            y: PLAYER_Y,
        }
    }

    /// Jump to the other side of the pipe
    pub fn switch_side(&mut self) {
        self.side = self.side.opposite();
    }

    /// x is derived from the side so the two can never disagree
    pub fn x(&self) -> i32 {
        match self.side {
            Side::Left => PLAYER_LEFT_X,
            Side::Right => PLAYER_RIGHT_X,
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x(), self.y)
    }

    /// Vertical range that registers a cloud, inclusive at both ends
    pub fn hit_band(&self) -> (f32, f32) {
        let top = self.y as f32;
        (top, top + PLAYER_HIT_BAND)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
