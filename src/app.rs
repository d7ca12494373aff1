use std::time::Instant;

use log::{debug, info, warn};

use crate::config::MAX_NAME_INPUT_CHARS;
use crate::game::{GameState, GameStatus, TickOutcome};
use crate::input::{GameInput, InputMode};
use crate::renderer::Overlay;
use crate::results::{RecentResults, ResultStore};
use crate::scene::Scene;
use crate::timer::TickClock;

/// Whether the main loop should keep going after an input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One terminal session: engine, tick clock, name field, and result store.
#[derive(Debug)]
pub struct App<S: ResultStore> {
    state: GameState,
    store: S,
    recent: RecentResults,
    clock: TickClock,
    name_input: String,
    notice: Option<String>,
}

impl<S: ResultStore> App<S> {
    /// Wraps `state` with the results already loaded from `store`.
    pub fn new(
        state: GameState,
        store: S,
        recent: RecentResults,
        initial_name: Option<&str>,
    ) -> Self {
        let name_input = initial_name
            .map(|name| name.chars().take(MAX_NAME_INPUT_CHARS).collect())
            .unwrap_or_default();

        Self {
            state,
            store,
            recent,
            clock: TickClock::new(),
            name_input,
            notice: None,
        }
    }

    /// Key map that applies in the current state.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        match self.state.status() {
            GameStatus::NotStarted => InputMode::NameEntry,
            GameStatus::Running | GameStatus::Paused => InputMode::Playing,
        }
    }

    /// Applies one input between ticks.
    pub fn handle_input(&mut self, input: GameInput) -> Flow {
        match input {
            GameInput::Quit => return Flow::Quit,
            GameInput::Confirm => self.confirm(),
            GameInput::Pause => {
                self.state.toggle_pause();
                debug!("pause toggled, now {:?}", self.state.status());
            }
            GameInput::Stop => {
                if self.state.has_started() {
                    info!("game stopped by player at score {}", self.state.score());
                }
                self.state.stop();
            }
            GameInput::Direction(direction) => self.state.change_direction(direction),
            GameInput::NameChar(c) => {
                if self.state.status() == GameStatus::NotStarted
                    && self.name_input.chars().count() < MAX_NAME_INPUT_CHARS
                {
                    self.name_input.push(c);
                    self.notice = None;
                }
            }
            GameInput::NameBackspace => {
                if self.state.status() == GameStatus::NotStarted {
                    let _ = self.name_input.pop();
                    self.notice = None;
                }
            }
        }

        Flow::Continue
    }

    fn confirm(&mut self) {
        if self.state.status() != GameStatus::NotStarted {
            return;
        }

        match self.state.start(&self.name_input) {
            Ok(()) => {
                self.notice = None;
                if let Some(player) = self.state.player() {
                    info!("game started for {player}");
                }
            }
            Err(error) => {
                debug!("start refused: {error}");
                self.notice = Some(error.to_string());
            }
        }
    }

    /// Runs a tick when the clock says one is due at `now`.
    pub fn update(&mut self, now: Instant) -> TickOutcome {
        if !self.clock.poll(self.state.timer(), now) {
            return TickOutcome::Idle;
        }

        let outcome = self.state.tick();
        match outcome {
            TickOutcome::Ate { score } => {
                debug!(
                    "food eaten, score {score}, interval {} ms",
                    self.state.speed().interval_ms()
                );
            }
            TickOutcome::Collided(result) => {
                info!(
                    "run ended by {:?} with score {} (high score {}) at tick {}",
                    result.cause,
                    result.score,
                    self.state.high_score(),
                    self.state.tick_count()
                );
                self.record_result(result.score);
            }
            TickOutcome::Idle | TickOutcome::Moved => {}
        }
        outcome
    }

    fn record_result(&mut self, score: u32) {
        match self.store.save_recent(score) {
            Ok(recent) => self.recent = recent,
            Err(error) => {
                warn!("could not save result {score}: {error}");
                self.recent.push(score);
            }
        }
    }

    /// Snapshot for the renderer.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene::capture(&self.state, &self.recent)
    }

    #[must_use]
    pub fn overlay(&self) -> Overlay<'_> {
        Overlay {
            name_input: &self.name_input,
            notice: self.notice.as_deref(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable engine access for scripted scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn recent(&self) -> &RecentResults {
        &self.recent
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
