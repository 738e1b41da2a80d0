//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - load, render, plan, write pages, update the manifest
//! - `DiffUseCase` - what a build would change
//! - `CheckUseCase` - content lint report
//! - `WatchUseCase` - rebuild on content changes
//! - `show_location` / `show_assertions` - resolve a single view

pub mod build;
pub mod check;
pub mod diff;
pub mod show;
pub mod site;
pub mod watch;

pub use build::{BuildOptions, BuildResult, BuildUseCase, PreparedBuild};
pub use check::{CheckItem, CheckOptions, CheckResult, CheckStatus, CheckUseCase};
pub use diff::{ChangeType, DiffEntry, DiffResult, DiffUseCase};
pub use show::{show_assertions, show_location, AssertionView, ShowView};
pub use site::{render_site, SiteRender};
pub use watch::{WatchEvent, WatchOptions, WatchUseCase, WatcherState, DEBOUNCE_MS};
