use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{CollisionPolicy, GameConfig, GridSize};
use crate::error::NameError;
use crate::food::spawn_food;
use crate::input::Direction;
use crate::player::PlayerName;
use crate::snake::{Position, Snake};
use crate::speed::Speed;
use crate::timer::TickTimer;

/// Current high-level lifecycle state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    NotStarted,
    Running,
    Paused,
}

/// What ended a run.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CollisionCause {
    Wall,
    SelfBite,
}

/// A finished run, handed to the result store.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GameResult {
    pub score: u32,
    pub cause: CollisionCause,
    pub new_high_score: bool,
}

/// Result of one call to [`GameState::tick`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TickOutcome {
    /// Not running; nothing happened.
    Idle,
    /// The snake moved one cell.
    Moved,
    /// The snake ate and grew; the caller plays the feedback cue.
    Ate { score: u32 },
    /// The run ended and the board was reset.
    Collided(GameResult),
}

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    status: GameStatus,
    speed: Speed,
    high_score: u32,
    player: Option<PlayerName>,
    timer: TickTimer,
    tick_count: u64,
    config: GameConfig,
    rng: StdRng,
}

impl GameState {
    /// Creates a state seeded from OS entropy.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(Position::start_cell(config.bounds), Direction::Right);
        let food = spawn_food(&mut rng, config.bounds, &snake, config.food_placement);

        Self {
            snake,
            food,
            status: GameStatus::NotStarted,
            speed: Speed::initial(),
            high_score: 0,
            player: None,
            timer: TickTimer::default(),
            tick_count: 0,
            config,
            rng,
        }
    }

    /// Validates `name` and starts a game. Ignored unless `NotStarted`.
    pub fn start(&mut self, name: &str) -> Result<(), NameError> {
        if self.status != GameStatus::NotStarted {
            return Ok(());
        }

        let player = PlayerName::parse(name)?;
        self.player = Some(player);
        self.reset_board();
        self.status = GameStatus::Running;
        self.timer.arm(self.speed.interval());
        Ok(())
    }

    /// Halts the tick schedule. Ignored unless `Running`.
    pub fn pause(&mut self) {
        if self.status != GameStatus::Running {
            return;
        }
        self.timer.cancel();
        self.status = GameStatus::Paused;
    }

    /// Restarts the tick schedule at the current speed. Ignored unless `Paused`.
    pub fn resume(&mut self) {
        if self.status != GameStatus::Paused {
            return;
        }
        self.timer.arm(self.speed.interval());
        self.status = GameStatus::Running;
    }

    /// Pauses a running game or resumes a paused one.
    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Running => self.pause(),
            GameStatus::Paused => self.resume(),
            GameStatus::NotStarted => {}
        }
    }

    /// Abandons the current game without recording a result.
    pub fn stop(&mut self) {
        if self.status == GameStatus::NotStarted {
            return;
        }
        self.timer.cancel();
        self.reset_board();
        self.status = GameStatus::NotStarted;
    }

    /// Turns the snake. Ignored unless `Running` or when `direction` reverses
    /// the current heading.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.status != GameStatus::Running {
            return;
        }
        let _ = self.snake.turn(direction);
    }

    /// Advances the game by one cell of movement.
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != GameStatus::Running {
            return TickOutcome::Idle;
        }

        self.tick_count += 1;
        let head = self.snake.advance_head();

        let ate = head == self.food;
        if ate {
            self.food = spawn_food(
                &mut self.rng,
                self.config.bounds,
                &self.snake,
                self.config.food_placement,
            );
            self.speed.accelerate();
            self.timer.arm(self.speed.interval());
        } else {
            self.snake.drop_tail();
        }

        let cause = if !head.is_within_bounds(self.config.bounds) {
            Some(CollisionCause::Wall)
        } else if self.snake.head_overlaps_body() {
            Some(CollisionCause::SelfBite)
        } else {
            None
        };

        match cause {
            Some(cause) => TickOutcome::Collided(self.finish_run(cause)),
            None if ate => TickOutcome::Ate {
                score: self.score(),
            },
            None => TickOutcome::Moved,
        }
    }

    fn finish_run(&mut self, cause: CollisionCause) -> GameResult {
        let score = self.score();
        let new_high_score = score > self.high_score;
        if new_high_score {
            self.high_score = score;
        }

        self.reset_board();
        match self.config.collision_policy {
            CollisionPolicy::Restart => self.timer.arm(self.speed.interval()),
            CollisionPolicy::Stop => {
                self.timer.cancel();
                self.status = GameStatus::NotStarted;
            }
        }

        GameResult {
            score,
            cause,
            new_high_score,
        }
    }

    fn reset_board(&mut self) {
        let bounds = self.config.bounds;
        self.snake = Snake::new(Position::start_cell(bounds), Direction::Right);
        self.food = spawn_food(&mut self.rng, bounds, &self.snake, self.config.food_placement);
        self.speed = Speed::initial();
    }

    /// Score of the current run: one point per segment beyond the head.
    #[must_use]
    pub fn score(&self) -> u32 {
        u32::try_from(self.snake.len().saturating_sub(1)).unwrap_or(u32::MAX)
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.status != GameStatus::NotStarted
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    #[must_use]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    #[must_use]
    pub fn player(&self) -> Option<&PlayerName> {
        self.player.as_ref()
    }

    #[must_use]
    pub fn timer(&self) -> &TickTimer {
        &self.timer
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.bounds
    }
}
