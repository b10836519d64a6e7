//! CLI definitions using clap derive API
//!
//! frontcheck takes no subcommand: a bare invocation validates the site's
//! collections from the current directory. Every flag is optional.

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// frontcheck - Markdown frontmatter validator
///
/// Checks the frontmatter of every Markdown file in each content collection
/// against that collection's schema.
#[derive(Parser, Debug)]
#[command(
    name = "frontcheck",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Validate Markdown frontmatter against collection schemas",
    long_about = "Validates the frontmatter block of every Markdown file in each content \
                  collection against the collection's schema. Exits with status 1 if any \
                  file fails, 2 if the run could not complete.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  frontcheck                             \x1b[90m# Validate blog and examples from the site directory\x1b[0m\n   \
                  frontcheck -C site --sorted            \x1b[90m# Use another site directory, stable order\x1b[0m\n   \
                  frontcheck --config frontcheck.yaml    \x1b[90m# Collections declared in a file\x1b[0m\n"
)]
pub struct Cli {
    /// Project base (site) directory; defaults to the current directory
    #[arg(long, short = 'C', env = "FRONTCHECK_BASE", value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Collection registry file (defaults to <base>/frontcheck.yaml when present)
    #[arg(long, env = "FRONTCHECK_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sort discovered files by name for deterministic output
    #[arg(long)]
    pub sorted: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
