//! Fixed inputs of a documentation run.

use camino::Utf8PathBuf;

/// Program rendered on every catalogue page.
pub const SAMPLE_SOURCE: &str = r#"package main

import "fmt"

func main() {
	fmt.Println("hello world")
}"#;

/// Everything a documentation run needs besides the engine.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Source rendered for every format and theme.
    pub sample_source: String,
    /// Filename hint passed along with the sample; picks the language.
    pub sample_filename: String,
    /// Theme used on the formats page.
    pub default_theme: String,
    /// Format used for theme images. Also their file extension.
    pub image_format: String,
    /// Directory receiving the Markdown files and the `themes/` images.
    pub output_dir: Utf8PathBuf,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            sample_source: SAMPLE_SOURCE.to_string(),
            sample_filename: "main.go".to_string(),
            default_theme: glint::DEFAULT_THEME.to_string(),
            image_format: "svg".to_string(),
            output_dir: Utf8PathBuf::from("docs"),
        }
    }
}

impl DocsConfig {
    /// Directory holding one image per theme.
    pub fn themes_dir(&self) -> Utf8PathBuf {
        self.output_dir.join("themes")
    }
}
