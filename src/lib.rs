//! Classic grid Snake: a tick-driven engine with terminal rendering and a
//! three-entry recent-results history.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod player;
pub mod renderer;
pub mod results;
pub mod scene;
pub mod snake;
pub mod speed;
pub mod terminal_runtime;
pub mod timer;
pub mod ui;
