//! `formats.md`: every output format applied to the sample program.

use camino::Utf8PathBuf;
use owo_colors::OwoColorize;

use crate::config::DocsConfig;
use crate::engine::{HighlightEngine, render_sample};
use crate::error::Result;
use crate::escape::encode_visible;
use crate::markdown::{DocWriter, code};
use crate::util::progress_bar;

pub fn write(engine: &dyn HighlightEngine, config: &DocsConfig) -> Result<Utf8PathBuf> {
    let formats = engine.formats();

    let mut doc = DocWriter::create(&config.output_dir.join("formats.md"))?;
    doc.heading(1, "Output Formats")?;
    for format in &formats {
        doc.line(&format!("- [{}](#{})", code(format), format.to_lowercase()))?;
    }
    doc.blank()?;

    let pb = progress_bar(formats.len(), "Rendering");
    for format in &formats {
        pb.set_message(format.clone());
        doc.heading(2, &code(format))?;

        let output = render_sample(
            engine,
            &config.sample_source,
            &config.sample_filename,
            format,
            &config.default_theme,
        )?;
        let output = trim_space(&output);

        if is_terminal(format) {
            doc.fence(fence_tag(format), encode_visible(output).as_bytes())?;
        } else {
            doc.fence(fence_tag(format), output)?;
        }
        tracing::debug!(format = %format, "documented format");
        pb.inc(1);
    }
    pb.finish_and_clear();
    let path = doc.finish()?;

    println!(
        "  {} {} ({} formats)",
        "✓".green(),
        path.cyan(),
        formats.len()
    );
    Ok(path)
}

/// Terminal renderings are escape sequences and get spelled out.
fn is_terminal(format: &str) -> bool {
    format.starts_with("terminal")
}

/// Strip leading and trailing Unicode whitespace. Bytes that are not valid
/// UTF-8 are never stripped.
fn trim_space(bytes: &[u8]) -> &[u8] {
    let leading = bytes
        .utf8_chunks()
        .next()
        .map_or(0, |chunk| chunk.valid().len() - chunk.valid().trim_start().len());
    let bytes = &bytes[leading..];

    let trailing = bytes
        .utf8_chunks()
        .last()
        .filter(|chunk| chunk.invalid().is_empty())
        .map_or(0, |chunk| chunk.valid().len() - chunk.valid().trim_end().len());
    &bytes[..bytes.len() - trailing]
}

/// Minified variants share the highlighting of their base language.
fn fence_tag(format: &str) -> &str {
    format.strip_suffix("-min").unwrap_or(format)
}
