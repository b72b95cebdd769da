//! Documentation generation.
//!
//! Each page is written by its own module from a fresh look at the engine's
//! catalogues. Pages are independent; a failure stops the run where it
//! happened and leaves earlier pages in place.

mod formats;
mod languages;
mod themes;

use owo_colors::OwoColorize;

use crate::config::DocsConfig;
use crate::engine::HighlightEngine;
use crate::error::Result;

/// Regenerate every page under `config.output_dir`.
pub fn run(engine: &dyn HighlightEngine, config: &DocsConfig) -> Result<()> {
    println!(
        "{} Generating documentation in {}",
        "●".cyan().bold(),
        config.output_dir.cyan()
    );
    fs_err::create_dir_all(&config.output_dir)?;

    languages::write(engine, config)?;
    themes::write(engine, config)?;
    formats::write(engine, config)?;
    Ok(())
}
