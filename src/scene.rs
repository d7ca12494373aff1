//! Read-only snapshot of everything a frame shows.
//!
//! Renderers only ever see a [`Scene`], never the live [`GameState`].

use crate::config::{GridSize, RECENT_RESULTS_CAPACITY};
use crate::game::{GameState, GameStatus};
use crate::input::Direction;
use crate::results::RecentResults;
use crate::snake::Position;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scene {
    pub bounds: GridSize,
    /// Head first.
    pub snake: Vec<Position>,
    pub heading: Direction,
    /// Hidden until a game has been started.
    pub food: Option<Position>,
    pub score: u32,
    pub high_score: u32,
    pub player: Option<String>,
    pub status: GameStatus,
    pub recent: [Option<u32>; RECENT_RESULTS_CAPACITY],
}

impl Scene {
    #[must_use]
    pub fn capture(state: &GameState, recent: &RecentResults) -> Self {
        Self {
            bounds: state.bounds(),
            snake: state.snake.segments().copied().collect(),
            heading: state.direction(),
            food: state.has_started().then_some(state.food),
            score: state.score(),
            high_score: state.high_score(),
            player: state.player().map(ToString::to_string),
            status: state.status(),
            recent: recent.slots(),
        }
    }

    /// `name: 007`, or just the padded score before a name is known.
    #[must_use]
    pub fn score_line(&self) -> String {
        match &self.player {
            Some(name) => format!("{name}: {:03}", self.score),
            None => format!("{:03}", self.score),
        }
    }

    #[must_use]
    pub fn high_score_line(&self) -> String {
        format!("{:03}", self.high_score)
    }

    /// One `Last Game N: score` row per slot, `000` when empty.
    #[must_use]
    pub fn recent_lines(&self) -> Vec<String> {
        self.recent
            .iter()
            .enumerate()
            .map(|(index, slot)| match slot {
                Some(score) => format!("Last Game {}: {score}", index + 1),
                None => format!("Last Game {}: 000", index + 1),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::{GameState, GameStatus};
    use crate::results::RecentResults;
    use crate::snake::Position;

    use super::Scene;

    #[test]
    fn food_is_hidden_before_start() {
        let state = GameState::new_with_seed(GameConfig::default(), 1);
        let scene = Scene::capture(&state, &RecentResults::default());

        assert_eq!(scene.status, GameStatus::NotStarted);
        assert_eq!(scene.food, None);
        assert_eq!(scene.snake, vec![Position::new(10, 10)]);
    }

    #[test]
    fn running_scene_mirrors_state() {
        let mut state = GameState::new_with_seed(GameConfig::default(), 2);
        state.start("neo").expect("valid name should start");
        state.food = Position::new(11, 10);
        let _ = state.tick();

        let scene = Scene::capture(&state, &RecentResults::from_scores([3, 12]));

        assert_eq!(scene.snake, vec![Position::new(11, 10), Position::new(10, 10)]);
        assert_eq!(scene.food, Some(state.food));
        assert_eq!(scene.score_line(), "neo: 001");
        assert_eq!(scene.high_score_line(), "000");
        assert_eq!(
            scene.recent_lines(),
            vec!["Last Game 1: 3", "Last Game 2: 12", "Last Game 3: 000"]
        );
    }
}
