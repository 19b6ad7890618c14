use rand::Rng;

use super::enemy::{ENEMY_HEIGHT, ENEMY_WIDTH, Enemy, GLYPHS};
use super::{WORLD_HEIGHT, WORLD_WIDTH};

const TRIANGLE_ROWS: usize = 5;
const DIAMOND_ROWS: usize = 7;
const SCATTER_COUNT: usize = 30;

/// Gap between adjacent enemies, both horizontally and vertically.
const SPACING: f32 = 20.0;

/// Vertical offset of the first row from the top of the surface.
const TOP_MARGIN: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormationKind {
    Triangle,
    Diamond,
    Scatter,
}

impl FormationKind {
    /// Picks one of the three layouts uniformly at random.
    pub fn choose<R: Rng>(rng: &mut R) -> Self {
        match rng.random_range(0..3) {
            0 => FormationKind::Triangle,
            1 => FormationKind::Diamond,
            _ => FormationKind::Scatter,
        }
    }
}

/// Builds a fresh enemy field laid out as `kind`. The RNG drives glyph
/// selection for every layout and positions for the scatter layout.
pub fn spawn<R: Rng>(kind: FormationKind, rng: &mut R) -> Vec<Enemy> {
    match kind {
        FormationKind::Triangle => centered_rows((0..TRIANGLE_ROWS).map(|row| row + 1), rng),
        FormationKind::Diamond => centered_rows(
            (0..DIAMOND_ROWS).map(|row| {
                if row < DIAMOND_ROWS / 2 {
                    row + 1
                } else {
                    DIAMOND_ROWS - row
                }
            }),
            rng,
        ),
        FormationKind::Scatter => scatter(rng),
    }
}

/// Stacks rows downward from the top margin, each row horizontally centered.
fn centered_rows<R: Rng>(row_counts: impl Iterator<Item = usize>, rng: &mut R) -> Vec<Enemy> {
    let mut enemies = Vec::new();
    for (row, count) in row_counts.enumerate() {
        let row_width = count as f32 * (ENEMY_WIDTH + SPACING) - SPACING;
        let start_x = (WORLD_WIDTH - row_width) / 2.0;
        let y = TOP_MARGIN + row as f32 * (ENEMY_HEIGHT + SPACING);

        for col in 0..count {
            let x = start_x + col as f32 * (ENEMY_WIDTH + SPACING);
            enemies.push(Enemy::new(x, y, rng.random_range(0..GLYPHS.len())));
        }
    }
    enemies
}

/// Uniform-random positions in the upper half of the surface, clamped so
/// sprites stay fully on-surface horizontally.
fn scatter<R: Rng>(rng: &mut R) -> Vec<Enemy> {
    (0..SCATTER_COUNT)
        .map(|_| {
            let x = rng.random_range(0.0..(WORLD_WIDTH - ENEMY_WIDTH));
            let y = TOP_MARGIN + rng.random_range(0.0..(WORLD_HEIGHT / 2.0 - ENEMY_HEIGHT));
            Enemy::new(x, y, rng.random_range(0..GLYPHS.len()))
        })
        .collect()
}
