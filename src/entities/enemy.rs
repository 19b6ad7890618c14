use super::{Hitbox, WORLD_WIDTH};

pub const ENEMY_WIDTH: f32 = 40.0;
pub const ENEMY_HEIGHT: f32 = 30.0;
pub const INITIAL_ENEMY_SPEED: f32 = 3.0;

/// Vertical step taken whenever an enemy bounces off a horizontal bound.
pub const DESCENT_STEP: f32 = 20.0;

/// One glyph per enemy variant; the variant index also keys the optional
/// image sprite for that variant.
pub const GLYPHS: [&str; 5] = ["👾", "👽", "🤖", "👹", "👻"];

#[derive(Debug, Clone)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Horizontal direction: 1.0 for right, -1.0 for left.
    pub direction: f32,
    /// Index into [`GLYPHS`].
    pub variant: usize,
}

impl Enemy {
    pub fn new(x: f32, y: f32, variant: usize) -> Self {
        Self {
            x,
            y,
            width: ENEMY_WIDTH,
            height: ENEMY_HEIGHT,
            speed: INITIAL_ENEMY_SPEED,
            direction: 1.0,
            variant,
        }
    }

    pub fn glyph(&self) -> &'static str {
        GLYPHS[self.variant % GLYPHS.len()]
    }

    /// Drifts sideways; on reaching either horizontal bound, flips direction
    /// and steps down by [`DESCENT_STEP`].
    pub fn advance(&mut self) {
        self.x += self.speed * self.direction;
        if self.x + self.width > WORLD_WIDTH || self.x < 0.0 {
            self.direction = -self.direction;
            self.y += DESCENT_STEP;
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}
