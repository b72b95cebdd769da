//! `themes.md` and one sample image per theme under `themes/`.

use camino::Utf8PathBuf;
use owo_colors::OwoColorize;

use crate::config::DocsConfig;
use crate::engine::{HighlightEngine, render_sample};
use crate::error::Result;
use crate::markdown::{DocWriter, code, link_target};
use crate::util::progress_bar;

pub fn write(engine: &dyn HighlightEngine, config: &DocsConfig) -> Result<Utf8PathBuf> {
    let themes = engine.themes();
    let images_dir = config.themes_dir();
    fs_err::create_dir_all(&images_dir)?;

    let mut doc = DocWriter::create(&config.output_dir.join("themes.md"))?;
    doc.heading(1, "Highlight Themes")?;
    for theme in &themes {
        let anchor = format!("#{theme}");
        doc.line(&format!("- [{}]({})", code(theme), link_target(&anchor)))?;
    }
    doc.blank()?;

    let pb = progress_bar(themes.len(), "Rendering");
    for theme in &themes {
        pb.set_message(theme.clone());
        doc.heading(2, &code(theme))?;

        let image = render_sample(
            engine,
            &config.sample_source,
            &config.sample_filename,
            &config.image_format,
            theme,
        )?;
        let file_name = format!("{theme}.{}", config.image_format);
        fs_err::write(images_dir.join(&file_name), &image)?;
        tracing::debug!(theme = %theme, bytes = image.len(), "wrote theme image");

        let target = format!("./themes/{file_name}");
        doc.line(&format!("![{theme}]({})", link_target(&target)))?;
        doc.blank()?;
        pb.inc(1);
    }
    pb.finish_and_clear();
    let path = doc.finish()?;

    println!(
        "  {} {} ({} themes)",
        "✓".green(),
        path.cyan(),
        themes.len()
    );
    Ok(path)
}
