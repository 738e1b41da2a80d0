pub mod build;
pub mod check;
pub mod diff;
pub mod show;
pub mod watch;
