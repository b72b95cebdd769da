use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DocsError {
    #[error(transparent)]
    #[diagnostic(code(xtask::io))]
    Io(#[from] std::io::Error),

    #[error("failed to render the sample as `{format}` with theme `{theme}`")]
    #[diagnostic(
        code(xtask::render),
        help("the engine advertised this format and theme, so this is an engine bug")
    )]
    Render {
        format: String,
        theme: String,
        #[source]
        source: glint::Error,
    },

    #[error("language `{name}` is registered more than once")]
    #[diagnostic(
        code(xtask::duplicate_language),
        help("every language must have a unique name to get its own row")
    )]
    DuplicateLanguage { name: String },

    #[error("could not find the repository root")]
    #[diagnostic(
        code(xtask::repo_root),
        help("run `cargo xtask` from inside the glint workspace")
    )]
    RepoRootNotFound,
}

pub type Result<T, E = DocsError> = std::result::Result<T, E>;
