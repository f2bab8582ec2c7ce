/// Collision detection between the player and the cloud
///
/// The player never moves vertically and the cloud only ever sits in one of
/// two slots, so a full AABB test is unnecessary. A catch needs:
/// - the cloud's y inside the player's hit band (inclusive)
/// - the cloud on the same side of the pipe as the player
/// - the cloud not already caught this spawn cycle
use crate::cloud::Cloud;
use crate::player::Player;

/// Returns true if `y` lies within the inclusive band `[top, bottom]`.
pub fn in_band(y: f32, (top, bottom): (f32, f32)) -> bool {
    y >= top && y <= bottom
}

/// Pure check: would this cloud be caught by this player right now?
pub fn cloud_hits_player(player: &Player, cloud: &Cloud) -> bool {
    !cloud.collided && cloud.side == player.side && in_band(cloud.y, player.hit_band())
}
