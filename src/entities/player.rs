use super::bullet::{BULLET_HEIGHT, BULLET_WIDTH, Bullet};
use super::{Hitbox, WORLD_WIDTH};

pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 30.0;
pub const PLAYER_SPEED: f32 = 5.0;

/// Frames between shots.
const FIRE_COOLDOWN: u8 = 10;

#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub fire_cooldown: u8,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            fire_cooldown: 0,
        }
    }

    pub fn glyph(&self) -> &'static str {
        "🥷"
    }

    /// Steps left, clamped so the sprite never leaves the surface.
    pub fn move_left(&mut self) {
        self.x = (self.x - self.speed).max(0.0);
    }

    /// Steps right, clamped so `x + width` never exceeds the surface width.
    pub fn move_right(&mut self) {
        self.x = (self.x + self.speed).min(WORLD_WIDTH - self.width);
    }

    pub fn can_fire(&self) -> bool {
        self.fire_cooldown == 0
    }

    pub fn update_cooldown(&mut self) {
        if self.fire_cooldown > 0 {
            self.fire_cooldown -= 1;
        }
    }

    /// Fires one bullet centered on the player's top edge, if the cooldown
    /// allows it.
    pub fn try_fire(&mut self) -> Option<Bullet> {
        if !self.can_fire() {
            return None;
        }
        self.fire_cooldown = FIRE_COOLDOWN;

        let bullet_x = self.x + self.width / 2.0 - BULLET_WIDTH / 2.0;
        let bullet_y = self.y - BULLET_HEIGHT;
        Some(Bullet::new(bullet_x, bullet_y))
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
