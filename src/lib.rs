// Library exports for testing
pub use entities::{
    Bullet, Enemy, FormationKind, GameState, Hitbox, INITIAL_ENEMY_SPEED, Player, WORLD_HEIGHT,
    WORLD_WIDTH,
};
pub use game::Game;

pub mod app;
pub mod entities;
pub mod game;
pub mod input;
pub mod renderer;
pub mod sprites;
