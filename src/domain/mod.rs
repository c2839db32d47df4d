//! Domain layer - business abstractions
//!
//! Error types, the clock abstraction, and the repository contracts
//! implemented by the infrastructure layer.

pub mod clock;
pub mod errors;
pub mod repositories;

pub use clock::{Clock, SystemClock};
pub use errors::DomainError;
pub use repositories::*;
