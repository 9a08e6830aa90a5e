pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod middleware;
pub mod state;

pub use app::app;
pub use state::AppState;

#[cfg(test)]
pub mod testing;
