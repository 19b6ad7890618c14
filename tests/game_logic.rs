/// Integration tests for game logic
///
/// These tests drive full sessions through the public `Game` API and verify
/// the state machine, collision pairing, and restart semantics.
use ninja_invaders::entities::formation;
use ninja_invaders::{
    Bullet, FormationKind, Game, GameState, INITIAL_ENEMY_SPEED, WORLD_WIDTH,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn playing_game(kind: FormationKind) -> Game {
    let mut game = Game::with_seed(1234);
    game.restart();
    game.spawn_formation(kind);
    game
}

#[test]
fn test_formation_counts_are_deterministic() {
    let mut rng = StdRng::seed_from_u64(99);
    assert_eq!(formation::spawn(FormationKind::Triangle, &mut rng).len(), 15);
    assert_eq!(formation::spawn(FormationKind::Diamond, &mut rng).len(), 16);
    assert_eq!(formation::spawn(FormationKind::Scatter, &mut rng).len(), 30);
}

#[test]
fn test_session_starts_not_started() {
    let game = Game::with_seed(1234);
    assert_eq!(game.state, GameState::NotStarted);
}

#[test]
fn test_restart_resets_session_wholesale() {
    let mut game = playing_game(FormationKind::Scatter);

    // Dirty the session, then force a terminal state and restart.
    game.bullets.push(Bullet::new(100.0, 100.0));
    game.player.x = 0.0;
    game.enemy_speed = 42.0;
    game.state = GameState::GameWon;

    game.restart();

    assert_eq!(game.state, GameState::Playing);
    assert!(game.bullets.is_empty());
    assert!(!game.enemies.is_empty());
    assert_eq!(game.player.x, WORLD_WIDTH / 2.0);
    assert_eq!(game.enemy_speed, INITIAL_ENEMY_SPEED);
    assert!(
        game.enemies
            .iter()
            .all(|e| e.speed == INITIAL_ENEMY_SPEED)
    );
}

#[test]
fn test_clearing_the_field_wins_the_game() {
    let mut game = playing_game(FormationKind::Triangle);

    // Freeze the field, then shoot every enemy once.
    for enemy in &mut game.enemies {
        enemy.speed = 0.0;
    }

    let mut frames = 0;
    while game.state == GameState::Playing {
        if let Some(enemy) = game.enemies.first() {
            // Aimed so the bullet sits mid-enemy after its next advance.
            let hitbox = enemy.hitbox();
            game.bullets.push(Bullet::new(
                hitbox.x + hitbox.width / 2.0,
                hitbox.y + hitbox.height / 2.0 + 8.0,
            ));
        }
        game.update();

        frames += 1;
        assert!(frames < 100, "session should end after 15 kills");
    }

    assert_eq!(game.state, GameState::GameWon);
    assert!(game.enemies.is_empty());
}

#[test]
fn test_each_hit_removes_exactly_one_pair() {
    let mut game = playing_game(FormationKind::Diamond);
    for enemy in &mut game.enemies {
        enemy.speed = 0.0;
    }

    let enemies_before = game.enemies.len();
    let hitbox = game.enemies[0].hitbox();
    game.bullets.push(Bullet::new(
        hitbox.x + 1.0,
        hitbox.y + hitbox.height / 2.0 + 8.0,
    ));
    game.update();

    assert_eq!(game.enemies.len(), enemies_before - 1);
    assert!(game.bullets.is_empty());
}

#[test]
fn test_enemy_reaching_player_ends_the_game() {
    let mut game = playing_game(FormationKind::Triangle);

    // Drop one enemy directly onto the player.
    let player = game.player.hitbox();
    game.enemies[0].x = player.x;
    game.enemies[0].y = player.y - 1.0;
    game.enemies[0].speed = 0.0;
    game.update();

    assert_eq!(game.state, GameState::GameOver);
}

#[test]
fn test_terminal_states_freeze_entities() {
    let mut game = playing_game(FormationKind::Triangle);
    game.state = GameState::GameOver;

    let positions: Vec<f32> = game.enemies.iter().map(|e| e.x).collect();
    game.update();
    let after: Vec<f32> = game.enemies.iter().map(|e| e.x).collect();

    assert_eq!(positions, after);
}

#[test]
fn test_bullets_survive_until_top_edge() {
    let mut game = playing_game(FormationKind::Triangle);

    // Clear the field out of the bullet's path.
    for enemy in &mut game.enemies {
        enemy.x = 0.0;
        enemy.y = 500.0;
        enemy.speed = 0.0;
    }

    game.bullets.push(Bullet::new(790.0, 9.0));
    game.update();

    // y = 1 after one step: still in flight.
    assert_eq!(game.bullets.len(), 1);
    assert_eq!(game.bullets[0].y, 1.0);

    game.update();
    assert!(game.bullets.is_empty());
}

#[test]
fn test_fire_is_cooldown_gated_but_bullets_accumulate() {
    let mut game = playing_game(FormationKind::Triangle);

    game.fire();
    game.fire();
    assert_eq!(game.bullets.len(), 1);

    // Wait out the cooldown without letting bullets reach the enemies.
    for enemy in &mut game.enemies {
        enemy.y = 0.0;
        enemy.x = 0.0;
        enemy.speed = 0.0;
    }
    for _ in 0..10 {
        game.update();
    }
    game.fire();
    assert_eq!(game.bullets.len(), 2);
}
