use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// When to use colored output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Folio - static-site compiler for JSON-driven portfolio sites
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the site into the output directory
    Build {
        /// Content directory holding site.json and projects.json
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Prefix for internal links (e.g. /portfolio/)
        #[arg(long)]
        base_path: Option<String>,

        /// Link detail pages as #/projects/{slug}
        #[arg(long)]
        hash_routes: bool,

        /// Keep pages the current content no longer produces
        #[arg(long)]
        keep_orphans: bool,

        /// Dry run - show what would be written
        #[arg(long)]
        dry_run: bool,
    },

    /// Lint the content documents
    Check {
        /// Content directory holding site.json and projects.json
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Print a resolved view (a project by slug, or the assertions list)
    Show {
        /// Project slug or location (/projects/x, #/projects/x)
        slug: Option<String>,

        /// Toggle an assertion; repeat to replay a sequence of clicks
        #[arg(short, long = "toggle", value_name = "ID")]
        toggles: Vec<String>,

        /// Content directory holding site.json and projects.json
        #[arg(short, long)]
        source: Option<PathBuf>,
    },

    /// Preview what a build would change
    Diff {
        /// Content directory holding site.json and projects.json
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Rebuild whenever content or config changes
    Watch {
        /// Content directory holding site.json and projects.json
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

impl Commands {
    /// Subcommand name used in JSON events
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build { .. } => "build",
            Commands::Check { .. } => "check",
            Commands::Show { .. } => "show",
            Commands::Diff { .. } => "diff",
            Commands::Watch { .. } => "watch",
        }
    }
}
