use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error produced when a mask cannot be constructed.
///
/// Construction is the only fallible step: a mask that was built successfully
/// evaluates every candidate without error.
#[derive(Debug, Error)]
pub enum MaskError {
    /// A shell wildcard pattern failed to compile.
    #[error("failed to compile glob pattern '{pattern}': {source}")]
    InvalidGlob {
        /// Offending pattern text.
        pattern: String,
        /// Underlying compiler error.
        #[source]
        source: globset::Error,
    },
    /// A regular expression failed to compile.
    #[error("failed to compile regular expression '{pattern}': {source}")]
    InvalidRegex {
        /// Offending pattern text.
        pattern: String,
        /// Underlying compiler error.
        #[source]
        source: regex::Error,
    },
    /// A path list file could not be read.
    #[error("failed to read path list '{}': {source}", path.display())]
    ListFile {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Relative list entries need an absolute prefix to be completed with.
    #[error("path list prefix '{prefix}' is not an absolute path")]
    RelativePrefix {
        /// The rejected prefix.
        prefix: String,
    },
}

impl MaskError {
    /// Returns the offending pattern for compilation failures.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::InvalidGlob { pattern, .. } | Self::InvalidRegex { pattern, .. } => {
                Some(pattern)
            }
            Self::ListFile { .. } | Self::RelativePrefix { .. } => None,
        }
    }

    /// Reports whether the error is a malformed glob or regular expression.
    #[must_use]
    pub const fn is_invalid_pattern(&self) -> bool {
        matches!(self, Self::InvalidGlob { .. } | Self::InvalidRegex { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::MaskError;
    use globset::GlobBuilder;
    use std::error::Error as _;

    #[test]
    fn glob_error_preserves_pattern_and_source() {
        let glob_err = GlobBuilder::new("[").build().unwrap_err();
        let error = MaskError::InvalidGlob {
            pattern: "[".into(),
            source: glob_err.clone(),
        };

        assert_eq!(error.pattern(), Some("["));
        assert!(error.is_invalid_pattern());
        assert!(error.to_string().contains("failed to compile"));
        assert_eq!(error.source().unwrap().to_string(), glob_err.to_string());
    }

    #[test]
    fn prefix_error_has_no_pattern() {
        let error = MaskError::RelativePrefix {
            prefix: "home".into(),
        };
        assert_eq!(error.pattern(), None);
        assert!(!error.is_invalid_pattern());
        assert!(error.to_string().contains("'home'"));
    }
}
