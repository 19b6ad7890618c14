use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::entities::{
    Bullet, Enemy, FormationKind, GameState, INITIAL_ENEMY_SPEED, Player, WORLD_HEIGHT, WORLD_WIDTH,
    formation,
};

/// The owned session-state record: flags, entity collections, and the shared
/// enemy speed. Only the loop thread mutates it; input arrives as intents
/// applied between frames.
pub struct Game {
    pub state: GameState,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bullets: Vec<Bullet>,
    /// Shared enemy speed, reset to [`INITIAL_ENEMY_SPEED`] on every
    /// (re)creation of the field.
    pub enemy_speed: f32,
    rng: StdRng,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Deterministic session for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            state: GameState::NotStarted,
            player: Self::fresh_player(),
            enemies: Vec::new(),
            bullets: Vec::new(),
            enemy_speed: INITIAL_ENEMY_SPEED,
            rng,
        }
    }

    fn fresh_player() -> Player {
        Player::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT - 30.0)
    }

    /// (Re)initialises the session and enters Playing: clears bullets,
    /// replaces the player, regenerates a random formation, and resets the
    /// enemy speed.
    pub fn restart(&mut self) {
        self.bullets.clear();
        self.player = Self::fresh_player();

        let kind = FormationKind::choose(&mut self.rng);
        self.spawn_formation(kind);

        self.state = GameState::Playing;
        log::info!(
            "session started: {:?} formation, {} enemies",
            kind,
            self.enemies.len()
        );
    }

    /// Replaces the enemy field with a fresh `kind` layout. Every enemy's
    /// speed and the shared speed value are forced back to the initial
    /// constant after generation.
    pub fn spawn_formation(&mut self, kind: FormationKind) {
        self.enemies = formation::spawn(kind, &mut self.rng);
        for enemy in &mut self.enemies {
            enemy.speed = INITIAL_ENEMY_SPEED;
        }
        self.enemy_speed = INITIAL_ENEMY_SPEED;
    }

    /// Spawns a bullet from the player if the fire cooldown allows.
    pub fn fire(&mut self) {
        if let Some(bullet) = self.player.try_fire() {
            self.bullets.push(bullet);
        }
    }

    /// One frame of simulation. No-op outside Playing.
    pub fn update(&mut self) {
        if self.state != GameState::Playing {
            return;
        }

        self.player.update_cooldown();

        for enemy in &mut self.enemies {
            enemy.advance();
        }
        for bullet in &mut self.bullets {
            bullet.advance();
        }

        self.check_collisions();

        if self.state == GameState::Playing && self.enemies.is_empty() {
            self.state = GameState::GameWon;
            log::info!("all enemies cleared, game won");
        }

        self.bullets.retain(|b| !b.is_spent());
    }

    /// Scans every enemy against the player and against every bullet.
    /// Removal indices are collected during the scan and applied afterwards;
    /// the player-overlap check runs for every enemy, including ones a bullet
    /// kills in the same pass.
    fn check_collisions(&mut self) {
        let mut enemies_to_remove = Vec::new();
        let mut bullets_to_remove = Vec::new();
        let mut player_hit = false;

        let player_box = self.player.hitbox();
        for (e_idx, enemy) in self.enemies.iter().enumerate() {
            let enemy_box = enemy.hitbox();

            if enemy_box.overlaps(&player_box) {
                player_hit = true;
            }

            // First bullet to overlap claims the enemy; at most one bullet is
            // credited per enemy per frame.
            for (b_idx, bullet) in self.bullets.iter().enumerate() {
                if bullets_to_remove.contains(&b_idx) {
                    continue;
                }
                if bullet.hitbox().overlaps(&enemy_box) {
                    enemies_to_remove.push(e_idx);
                    bullets_to_remove.push(b_idx);
                    break;
                }
            }
        }

        // Remove in reverse order to avoid index issues
        enemies_to_remove.sort_unstable();
        enemies_to_remove.reverse();
        enemies_to_remove.dedup();
        for idx in enemies_to_remove {
            self.enemies.remove(idx);
        }

        bullets_to_remove.sort_unstable();
        bullets_to_remove.reverse();
        bullets_to_remove.dedup();
        for idx in bullets_to_remove {
            self.bullets.remove(idx);
        }

        if player_hit {
            self.state = GameState::GameOver;
            log::info!("player overlapped an enemy, game over");
        }
    }
}
