//! frontcheck - Markdown frontmatter validator
//!
//! Walks each content collection, extracts the frontmatter block of every
//! Markdown file and checks it against the collection's schema before the
//! site is published.

use clap::Parser;

mod cli;
mod collector;
mod commands;
mod common;
mod error;
mod frontmatter;
mod logging;
mod registry;
mod schema;
mod status;
mod ui;
mod validator;

use cli::Cli;
use status::EXIT_FATAL;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match commands::validate::run(&cli) {
        Ok(status) => std::process::exit(status.exit_code()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_FATAL);
        }
    }
}
