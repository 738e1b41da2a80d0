//! Watch Use Case
//!
//! Continuous rebuilds:
//! - File system monitoring (via `notify`)
//! - Debouncing (100ms)
//! - Content hashing so no-op saves do not trigger a build
//! - NDJSON-friendly events for the CLI

mod event;
mod use_case;


pub use event::{WatchEvent, WatchOptions, WatcherState, DEBOUNCE_MS};
pub use use_case::WatchUseCase;
