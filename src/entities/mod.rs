mod bullet;
mod enemy;
mod game_state;
mod player;

pub mod formation;

// Re-export all public types
pub use bullet::Bullet;
pub use enemy::{DESCENT_STEP, Enemy, GLYPHS, INITIAL_ENEMY_SPEED};
pub use formation::FormationKind;
pub use game_state::GameState;
pub use player::Player;

/// World coordinate space the game simulates in. The renderer projects this
/// onto whatever terminal area is available.
pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

/// Axis-aligned bounding box used for all collision checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}
