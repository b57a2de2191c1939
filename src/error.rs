use std::path::PathBuf;

/// Errors raised while assembling a java command line.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The configured runtime installation path is missing on disk.
    #[error("the configured java runtime path {path:?} doesn't exist")]
    RuntimeNotFound { path: PathBuf },

    /// A path that has to appear on the command line is not valid unicode.
    #[error("path {path:?} is not valid unicode")]
    NonUnicodePath { path: PathBuf },

    #[error("invalid launch configuration: {0}")]
    InvalidConfiguration(String),
}
