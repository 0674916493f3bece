use thiserror::Error;

/// Errors raised while parsing a textual policy or criterion.
///
/// Every variant carries the fragment that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyParseError {
    /// An expression or sub-expression was empty.
    #[error("unexpected empty string in {context}")]
    Empty {
        /// Where the empty fragment appeared.
        context: &'static str,
    },

    /// A closing parenthesis, brace or bracket had no opening partner, or
    /// the reverse.
    #[error("unbalanced parenthesis in expression: {expression}")]
    Unbalanced {
        /// Offending expression.
        expression: String,
    },

    /// A conditional lacks its `}` or `[...]` part.
    #[error("malformed conditional statement ({reason}): {expression}")]
    MalformedConditional {
        /// What is missing.
        reason: &'static str,
        /// Offending expression.
        expression: String,
    },

    /// A two-letter constant used an unknown letter, or the expression is
    /// none of the accepted forms.
    #[error("unknown expression in overwriting policy: {expression}")]
    UnknownAction {
        /// Offending expression.
        expression: String,
    },

    /// A criterion atom or operator was not recognised.
    #[error("unknown expression in criterion: {expression}")]
    UnknownCriterion {
        /// Offending expression.
        expression: String,
    },

    /// A date argument could not be converted.
    #[error("invalid date {argument:?}: {reason}")]
    InvalidDate {
        /// Argument as given.
        argument: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl PolicyParseError {
    /// Text that failed to parse, when there is one.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        match self {
            Self::Empty { .. } => None,
            Self::Unbalanced { expression }
            | Self::MalformedConditional { expression, .. }
            | Self::UnknownAction { expression }
            | Self::UnknownCriterion { expression } => Some(expression),
            Self::InvalidDate { argument, .. } => Some(argument),
        }
    }
}
