//! Glint - syntax highlighting printer
//!
//! This crate provides:
//! - A language registry with filename and content based detection
//! - A catalogue of output formats: ANSI terminal colors at four depths,
//!   standalone HTML, JSON tokens, SVG images and a passthrough
//! - The built-in theme catalogue
//!
//! Tokenizing and themes come from [`syntect`]; glint adds the output formats
//! and the single [`Printer::print`] entry point.
//!
//! # Example
//!
//! ```rust,ignore
//! use glint::{Printer, PrinterConfig};
//!
//! let printer = Printer::new();
//! let config = PrinterConfig {
//!     format: "html".into(),
//!     theme: "InspiredGitHub".into(),
//!     lang: None,
//! };
//! let html = printer.print_to_string(&config, "fn main() {}", Some("main.rs"))?;
//! ```

mod error;
mod format;
mod highlight;
mod language;
mod printer;

pub use error::Error;
pub use format::Format;
pub use language::Language;
pub use printer::{PrintInput, Printer, PrinterConfig};

/// Theme used when the caller does not pick one.
pub const DEFAULT_THEME: &str = "base16-ocean.dark";
