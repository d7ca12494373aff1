use std::time::Duration;

use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Creates a square grid with `n` cells per side.
    #[must_use]
    pub fn square(n: u16) -> Self {
        Self {
            width: n,
            height: n,
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::square(DEFAULT_GRID_SIZE)
    }
}

/// Where new food is allowed to appear.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum FoodPlacement {
    /// Any cell of the grid, including cells under the snake.
    Anywhere,
    /// Only cells the snake does not currently occupy.
    #[default]
    AvoidSnake,
}

/// What the engine does after a collision has been recorded.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum CollisionPolicy {
    /// Reset the board and keep running.
    #[default]
    Restart,
    /// Reset the board and wait for a new `start`.
    Stop,
}

/// Engine configuration assembled from the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct GameConfig {
    pub bounds: GridSize,
    pub food_placement: FoodPlacement,
    pub collision_policy: CollisionPolicy,
}

/// Colors applied to every visual element.
#[derive(Debug)]
pub struct Theme {
    pub snake_head: Color,
    pub snake_body: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub hud_score: Color,
    pub hud_muted: Color,
    pub menu_title: Color,
    pub menu_notice: Color,
}

pub const THEME_CLASSIC: Theme = Theme {
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::DarkGray,
    hud_score: Color::White,
    hud_muted: Color::DarkGray,
    menu_title: Color::Green,
    menu_notice: Color::Yellow,
};

/// Cells per side of the default square grid.
pub const DEFAULT_GRID_SIZE: u16 = 20;

/// Smallest and largest grid accepted from the command line.
pub const MIN_GRID_SIZE: u16 = 5;
pub const MAX_GRID_SIZE: u16 = 60;

/// Tick interval at the start of every game, in milliseconds.
pub const INITIAL_TICK_INTERVAL_MS: u64 = 200;

/// The tick interval never drops below this, in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 25;

/// Number of finished games kept in the recent-results list.
pub const RECENT_RESULTS_CAPACITY: usize = 3;

/// Longest name the start screen field accepts, in characters.
pub const MAX_NAME_INPUT_CHARS: usize = 16;

/// Directory name used under the platform data dir.
pub const APP_DIR_NAME: &str = "grid-snake";

/// How long the main loop waits for input before checking the tick clock.
pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Terminal columns used to draw one grid cell.
pub const CELL_WIDTH: u16 = 2;

pub const GLYPH_SNAKE_BODY: &str = "██";
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀█";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "█▶";
pub const GLYPH_FOOD: &str = "()";
