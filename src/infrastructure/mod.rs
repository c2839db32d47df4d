//! Infrastructure layer
//!
//! Database connection and migrations (db), configuration loading
//! (config), repository implementations (repositories), demo data
//! (seed) and application state wiring (state).

pub mod config;
pub mod db;
pub mod repositories;
pub mod seed;
pub mod state;

pub use repositories::*;
pub use state::AppState;
