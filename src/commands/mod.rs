pub mod build;
pub mod check;
pub mod diff;
pub mod project;
pub mod show;
pub mod watch;

use crate::cli::ColorWhen;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Copy)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
}
