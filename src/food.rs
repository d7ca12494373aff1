use rand::Rng;

use crate::config::{FoodPlacement, GridSize};
use crate::snake::{Position, Snake};

/// Returns a uniformly random cell anywhere on the grid.
///
/// Cells under the snake are not excluded.
#[must_use]
pub fn generate_food<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position {
        x: rng.gen_range(1..=i32::from(bounds.width)),
        y: rng.gen_range(1..=i32::from(bounds.height)),
    }
}

/// Picks the next food cell according to `placement`.
///
/// With [`FoodPlacement::AvoidSnake`] a full board falls back to
/// [`generate_food`].
#[must_use]
pub fn spawn_food<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
    placement: FoodPlacement,
) -> Position {
    match placement {
        FoodPlacement::Anywhere => generate_food(rng, bounds),
        FoodPlacement::AvoidSnake => {
            free_position(rng, bounds, snake).unwrap_or_else(|| generate_food(rng, bounds))
        }
    }
}

/// Returns a random cell not occupied by the snake, if one exists.
#[must_use]
pub fn free_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells());

    for y in 1..=i32::from(bounds.height) {
        for x in 1..=i32::from(bounds.width) {
            let position = Position { x, y };
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
