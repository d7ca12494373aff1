use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use grid_snake::config::{FoodPlacement, GameConfig};
use grid_snake::game::{GameState, TickOutcome};
use grid_snake::input::Direction;

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Drives a game with random turns and pauses, checking invariants after
/// every tick.
fn random_session(seed: u64, placement: FoodPlacement) {
    let config = GameConfig {
        food_placement: placement,
        ..GameConfig::default()
    };
    let bounds = config.bounds;
    let mut state = GameState::new_with_seed(config, seed);
    state.start("fuzz").expect("valid name should start");
    let mut driver = StdRng::seed_from_u64(seed ^ 0x5eed);
    let mut previous_interval = state.speed().interval_ms();

    for _ in 0..5_000 {
        match driver.gen_range(0..10) {
            0..=3 => {
                let before = state.direction();
                state.change_direction(DIRECTIONS[driver.gen_range(0..4)]);
                assert_ne!(state.direction(), before.opposite());
            }
            4 => {
                state.toggle_pause();
                state.toggle_pause();
            }
            _ => {}
        }

        let outcome = state.tick();

        assert!(!state.snake.is_empty());
        assert!(
            state.snake.segments().all(|segment| segment.is_within_bounds(bounds)),
            "segment outside the grid after {outcome:?}"
        );
        assert_eq!(state.score() as usize, state.snake.len() - 1);
        assert!(state.food.is_within_bounds(bounds));
        assert!(state.timer().is_armed());

        let interval = state.speed().interval_ms();
        match outcome {
            TickOutcome::Collided(result) => {
                assert!(state.high_score() >= result.score);
                assert_eq!(interval, 200);
            }
            _ => assert!(interval <= previous_interval),
        }
        assert!(interval >= 25);
        previous_interval = interval;
    }
}

#[test]
fn invariants_hold_with_food_avoiding_the_snake() {
    for seed in 0..8 {
        random_session(seed, FoodPlacement::AvoidSnake);
    }
}

#[test]
fn invariants_hold_with_food_anywhere() {
    for seed in 100..108 {
        random_session(seed, FoodPlacement::Anywhere);
    }
}
