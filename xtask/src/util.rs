//! Shared utilities for xtask

use std::env;

use camino::Utf8PathBuf;
use indicatif::{ProgressBar, ProgressStyle};

/// Find the repository root by looking for a Cargo.toml with `[workspace]`
pub fn find_repo_root() -> Option<Utf8PathBuf> {
    let cwd = Utf8PathBuf::try_from(env::current_dir().ok()?).ok()?;
    let mut current = cwd;

    loop {
        let cargo_toml = current.join("Cargo.toml");
        if cargo_toml.exists() {
            if let Ok(contents) = fs_err::read_to_string(&cargo_toml) {
                if contents.contains("[workspace]") {
                    return Some(current);
                }
            }
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Progress bar for a loop of `len` steps, labelled with `action`
pub fn progress_bar(len: usize, action: &str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let template =
        format!("{{spinner:.green}} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} {action} {{msg}}");
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("━━╸"),
    );
    pb
}
