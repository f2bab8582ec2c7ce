use crate::game::VIEWPORT_HEIGHT;

pub const PIPE_X: i32 = 155;

/// One screen-tall pipe segment.
///
/// Two segments one viewport height apart make an endless pipe: when a
/// segment scrolls off the bottom it jumps back above the other one.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: i32,
    pub y: f32,
}

impl Pipe {
    pub fn new(y: f32) -> Self {
        Pipe { x: PIPE_X, y }
    }

    /// The segment pair that starts on screen and the one stacked above it
    pub fn pair() -> [Pipe; 2] {
        [Pipe::new(-VIEWPORT_HEIGHT), Pipe::new(0.0)]
    }

    /// Scroll down by `speed`, wrapping within [-height, height)
    pub fn advance(&mut self, speed: f32) {
        self.y += speed;
        if self.y >= VIEWPORT_HEIGHT {
            self.y -= 2.0 * VIEWPORT_HEIGHT;
        }
    }

    /// Sit exactly one screen away from `leader`, wrapped into [-height, height)
    pub fn follow(&mut self, leader: &Pipe) {
        let y = leader.y + VIEWPORT_HEIGHT;
        self.y = if y >= VIEWPORT_HEIGHT { y - 2.0 * VIEWPORT_HEIGHT } else { y };
    }

    /// Draw position in whole pixels
    pub fn draw_position(&self) -> (i32, i32) {
        (self.x, self.y.floor() as i32)
    }
}
