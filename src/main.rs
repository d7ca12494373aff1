use std::io;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use grid_snake::app::{App, Flow};
use grid_snake::config::{
    CollisionPolicy, DEFAULT_GRID_SIZE, FoodPlacement, GameConfig, GridSize,
    INPUT_POLL_INTERVAL, MAX_GRID_SIZE, MIN_GRID_SIZE, THEME_CLASSIC,
};
use grid_snake::game::{GameState, TickOutcome};
use grid_snake::input::InputHandler;
use grid_snake::logging::{default_log_path, init_file_logger};
use grid_snake::results::{JsonFileStore, RecentResults, ResultStore};
use grid_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use log::{LevelFilter, info, warn};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Pre-fill the player name on the start screen.
    #[arg(long)]
    name: Option<String>,

    /// Cells per side of the square board.
    #[arg(
        long,
        default_value_t = DEFAULT_GRID_SIZE,
        value_parser = clap::value_parser!(u16)
            .range(i64::from(MIN_GRID_SIZE)..=i64::from(MAX_GRID_SIZE))
    )]
    grid: u16,

    /// Let food spawn anywhere, including under the snake.
    #[arg(long = "classic-food")]
    classic_food: bool,

    /// Return to the start screen after a collision instead of restarting.
    #[arg(long = "stop-on-collision")]
    stop_on_collision: bool,

    /// Do not ring the terminal bell when food is eaten.
    #[arg(long)]
    mute: bool,

    /// Recent-results document (defaults to the platform data dir).
    #[arg(long = "results-file")]
    results_file: Option<PathBuf>,

    /// Log file (defaults to the platform data dir).
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity: off, error, warn, info, debug, trace.
    #[arg(long = "log-level", default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            bounds: GridSize::square(self.grid),
            food_placement: if self.classic_food {
                FoodPlacement::Anywhere
            } else {
                FoodPlacement::AvoidSnake
            },
            collision_policy: if self.stop_on_collision {
                CollisionPolicy::Stop
            } else {
                CollisionPolicy::Restart
            },
        }
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(error) = init_file_logger(&log_path, cli.log_level) {
        eprintln!("Logging disabled ({}): {error}", log_path.display());
    }

    let store = match &cli.results_file {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::at_default_path(),
    };
    let recent = store.load_recent().unwrap_or_else(|error| {
        warn!("could not load recent results: {error}");
        eprintln!(
            "Warning: recent results at {} are unreadable ({error}); \
             new results will not be saved.",
            store.path().display()
        );
        RecentResults::default()
    });

    let config = cli.game_config();
    info!("starting grid-snake with {config:?}");

    install_panic_hook();
    let app = App::new(GameState::new(config), store, recent, cli.name.as_deref());
    run(&cli, app)
}

fn run<S: ResultStore>(cli: &Cli, mut app: App<S>) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new();

    loop {
        session.draw(&app.scene(), app.overlay(), &THEME_CLASSIC)?;

        if let Some(game_input) = input.poll_input(INPUT_POLL_INTERVAL, app.input_mode())? {
            if app.handle_input(game_input) == Flow::Quit {
                break;
            }
        }

        if let TickOutcome::Ate { .. } = app.update(Instant::now()) {
            if !cli.mute {
                if let Err(error) = session.ring_bell() {
                    warn!("could not ring bell: {error}");
                }
            }
        }
    }

    info!(
        "quitting, session high score {}",
        app.state().high_score()
    );
    Ok(())
}
