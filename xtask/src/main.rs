//! xtask for glint - regenerate the reference documentation
//!
//! Usage: `cargo xtask`
//!
//! Writes, relative to the repository root:
//! - `docs/languages.md` - every supported language and its aliases
//! - `docs/formats.md` - every output format, rendered with a sample program
//! - `docs/themes.md` and `docs/themes/<theme>.svg` - every theme as an image

mod config;
mod docs;
mod engine;
mod error;
mod escape;
mod markdown;
mod util;

use glint::Printer;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::config::DocsConfig;
use crate::error::DocsError;

fn main() {
    // Set up miette for nice error formatting
    miette::set_hook(Box::new(|_| {
        Box::new(miette::MietteHandlerOpts::new().build())
    }))
    .ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}

fn run() -> Result<(), DocsError> {
    let repo_root = util::find_repo_root().ok_or(DocsError::RepoRootNotFound)?;
    let config = DocsConfig {
        output_dir: repo_root.join("docs"),
        ..DocsConfig::default()
    };

    let printer = Printer::new();
    docs::run(&printer, &config)?;

    println!(
        "\n{} Documentation written to {}",
        "✓".green(),
        config.output_dir.cyan()
    );
    Ok(())
}
