use std::io;
use std::path::PathBuf;

use masks::MaskError;
use policy::PolicyParseError;
use thiserror::Error;

/// Errors raised while turning an [`OperationConfig`](crate::OperationConfig)
/// into an [`Operation`](crate::Operation).
///
/// Evaluation never fails; every error surfaces while loading or compiling
/// the configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A glob, regular expression or path list was rejected.
    #[error(transparent)]
    Mask(#[from] MaskError),

    /// The overwriting policy text did not parse.
    #[error("invalid overwriting policy: {0}")]
    Policy(#[from] PolicyParseError),

    /// The configuration document was not valid JSON for
    /// [`OperationConfig`](crate::OperationConfig).
    #[error("invalid operation configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("failed to read configuration '{}': {source}", path.display())]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// A debug flag named no known category or carried a bad level.
    #[error("invalid debug flag: {0}")]
    DebugFlag(String),
}
