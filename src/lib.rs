pub mod domain;
pub mod infrastructure;
pub mod models;
pub mod services;

// Convenience re-exports so binaries and tests can say `circulib::db`
pub use infrastructure::config;
pub use infrastructure::db;
pub use infrastructure::seed;
