use regex::{Regex, RegexBuilder};

use crate::debug_mask::trace_mask_built;
use crate::error::MaskError;

/// Regular expression matcher.
///
/// The expression is searched anywhere in the candidate; anchor it with `^`
/// and `$` to require a whole-string match.
#[derive(Clone, Debug)]
pub struct RegexMask {
    regex: Regex,
    case_sensitive: bool,
}

impl RegexMask {
    /// Compiles `pattern`.
    pub fn new(pattern: &str, case_sensitive: bool) -> Result<Self, MaskError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|source| MaskError::InvalidRegex {
                pattern: pattern.to_owned(),
                source,
            })?;
        trace_mask_built("regex", pattern, case_sensitive);
        Ok(Self {
            regex,
            case_sensitive,
        })
    }

    /// Pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether comparisons keep case.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Searches `candidate` for the expression.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}
