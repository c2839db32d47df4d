//! Services layer
//!
//! Business logic over the storage collaborator: the circulation engine
//! (the only writer of loans) and the read-only reporting queries.

pub mod circulation_service;
pub mod report_service;
