//! `languages.md`: one table row per supported language.

use std::collections::HashSet;

use camino::Utf8PathBuf;
use owo_colors::OwoColorize;

use crate::config::DocsConfig;
use crate::engine::{HighlightEngine, LanguageEntry};
use crate::error::{DocsError, Result};
use crate::markdown::{DocWriter, code};

pub fn write(engine: &dyn HighlightEngine, config: &DocsConfig) -> Result<Utf8PathBuf> {
    let languages = engine.languages();
    ensure_unique(&languages)?;

    let mut doc = DocWriter::create(&config.output_dir.join("languages.md"))?;
    doc.heading(1, "Languages")?;
    doc.line("| Language | Aliases |")?;
    doc.line("| --- | --- |")?;
    for language in &languages {
        tracing::debug!(language = %language.name, aliases = language.aliases.len(), "language row");
        doc.line(&row(language))?;
    }
    let path = doc.finish()?;

    println!(
        "  {} {} ({} languages)",
        "✓".green(),
        path.cyan(),
        languages.len()
    );
    Ok(path)
}

fn ensure_unique(languages: &[LanguageEntry]) -> Result<()> {
    let mut seen = HashSet::new();
    for language in languages {
        if !seen.insert(language.name.as_str()) {
            return Err(DocsError::DuplicateLanguage {
                name: language.name.clone(),
            });
        }
    }
    Ok(())
}

fn row(language: &LanguageEntry) -> String {
    if language.aliases.is_empty() {
        return format!("| {} | |", code(&language.name));
    }
    let aliases = language
        .aliases
        .iter()
        .map(|alias| code(alias))
        .collect::<Vec<_>>()
        .join(", ");
    format!("| {} | {aliases} |", code(&language.name))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::engine::fake::FakeEngine;

    fn entry(name: &str, aliases: &[&str]) -> LanguageEntry {
        LanguageEntry {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn config_in(dir: &tempfile::TempDir) -> DocsConfig {
        DocsConfig {
            output_dir: Utf8PathBuf::try_from(dir.path().to_path_buf()).unwrap(),
            ..DocsConfig::default()
        }
    }

    #[test]
    fn test_rows_follow_registry_order() {
        let dir = tempfile::tempdir().unwrap();
        let engine = FakeEngine {
            languages: vec![
                entry("Go", &["go"]),
                entry("Bourne Again Shell (bash)", &["sh", "bash", "zsh"]),
                entry("NoAlias", &[]),
            ],
            ..Default::default()
        };

        let path = write(&engine, &config_in(&dir)).unwrap();

        let expected = indoc! {"
            # Languages

            | Language | Aliases |
            | --- | --- |
            | `Go` | `go` |
            | `Bourne Again Shell (bash)` | `sh`, `bash`, `zsh` |
            | `NoAlias` | |
        "};
        assert_eq!(fs_err::read_to_string(path).unwrap(), expected);
    }

    #[test]
    fn test_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&FakeEngine::default(), &config_in(&dir)).unwrap();

        let expected = indoc! {"
            # Languages

            | Language | Aliases |
            | --- | --- |
        "};
        assert_eq!(fs_err::read_to_string(path).unwrap(), expected);
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let engine = FakeEngine {
            languages: vec![entry("Go", &["go"]), entry("C", &["c"]), entry("Go", &["golang"])],
            ..Default::default()
        };

        let err = write(&engine, &config).unwrap_err();

        assert!(matches!(err, DocsError::DuplicateLanguage { name } if name == "Go"));
        assert!(!config.output_dir.join("languages.md").exists());
    }
}
