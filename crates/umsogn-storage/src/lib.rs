//! Persistence layer for the umsögn system.
//!
//! Provides the [`FeedbackStore`], an in-memory store of the six consultation
//! collections backed by JSON snapshot files on disk.

pub mod error;
pub mod snapshot;
pub mod store;

// Re-exports for convenience.
pub use error::{Result, StorageError};
pub use store::{FeedbackStore, LoadOutcome};
