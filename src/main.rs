//! Folio CLI - static-site compiler for portfolio content
//!
//! Usage: folio <COMMAND>
//!
//! Commands:
//!   build   Render the site into the output directory
//!   check   Lint the content documents
//!   show    Print a resolved view
//!   diff    Preview what a build would change
//!   watch   Rebuild whenever content or config changes

mod cli;
mod commands;
mod ui;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    let command = cli.command.name();

    if let Err(err) = run(cli) {
        ui::error::print_error(&err, command, json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let global = commands::GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
    };

    match cli.command {
        Commands::Build {
            source,
            out,
            base_path,
            hash_routes,
            keep_orphans,
            dry_run,
        } => commands::build::cmd_build(
            &global,
            commands::build::BuildArgs {
                source,
                out,
                base_path,
                hash_routes,
                keep_orphans,
                dry_run,
            },
        ),
        Commands::Check {
            source,
            strict_warnings,
        } => commands::check::cmd_check(&global, source, strict_warnings),
        Commands::Show {
            slug,
            toggles,
            source,
        } => commands::show::cmd_show(&global, slug.as_deref(), &toggles, source),
        Commands::Diff { source, out } => commands::diff::cmd_diff(&global, source, out),
        Commands::Watch { source, out } => commands::watch::cmd_watch(&global, source, out),
    }
}
