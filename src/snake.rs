use std::collections::VecDeque;

use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};

/// Grid position in 1-indexed cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when both coordinates lie in `1..=size` for their axis.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        (1..=i32::from(bounds.width)).contains(&self.x)
            && (1..=i32::from(bounds.height)).contains(&self.y)
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[must_use]
    pub fn shifted(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the centre cell every game starts from.
    #[must_use]
    pub fn start_cell(bounds: GridSize) -> Self {
        Self {
            x: i32::from(bounds.width / 2).max(1),
            y: i32::from(bounds.height / 2).max(1),
        }
    }
}

/// Snake body and heading.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    // Heading of the last completed step; several turns may queue up
    // between two ticks.
    moved: Direction,
}

impl Snake {
    /// Creates a one-cell snake at `start` with the provided direction.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        let mut body = VecDeque::new();
        body.push_front(start);

        Self {
            body,
            direction,
            moved: direction,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// # Panics
    ///
    /// Panics when `segments` is empty.
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");

        Self {
            body: VecDeque::from(segments),
            direction,
            moved: direction,
        }
    }

    /// Pushes a new head one cell ahead. The tail stays in place, so the
    /// caller decides between growth and movement with [`Snake::drop_tail`].
    pub fn advance_head(&mut self) -> Position {
        let next_head = self.head().shifted(self.direction);
        self.body.push_front(next_head);
        self.moved = self.direction;
        next_head
    }

    /// Removes the tail segment, keeping at least the head.
    pub fn drop_tail(&mut self) {
        if self.body.len() > 1 {
            let _ = self.body.pop_back();
        }
    }

    /// Turns the snake unless `direction` reverses the current heading or
    /// the heading of the last step taken.
    ///
    /// Returns whether the heading changed.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction
            || !direction_change_is_valid(self.direction, direction)
            || !direction_change_is_valid(self.moved, direction)
        {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when the body has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}
