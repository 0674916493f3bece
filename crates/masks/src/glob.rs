use globset::{GlobBuilder, GlobMatcher};

use crate::debug_mask::trace_mask_built;
use crate::error::MaskError;

/// Shell wildcard matcher (`*`, `?`, `[...]`).
///
/// Matching follows `fnmatch` with `FNM_PERIOD`: `*` and `?` also match `/`,
/// but a candidate starting with `.` is only matched by a pattern starting
/// with a literal `.`. Braces are plain characters and a `[` that is never
/// closed matches itself.
#[derive(Clone, Debug)]
pub struct GlobMask {
    pattern: String,
    case_sensitive: bool,
    matcher: GlobMatcher,
    literal_leading_period: bool,
}

impl GlobMask {
    /// Compiles `pattern`.
    pub fn new(pattern: impl Into<String>, case_sensitive: bool) -> Result<Self, MaskError> {
        let pattern = pattern.into();
        let glob = GlobBuilder::new(&fnmatch_syntax(&pattern))
            .literal_separator(false)
            .backslash_escape(true)
            .case_insensitive(!case_sensitive)
            .build()
            .map_err(|source| MaskError::InvalidGlob {
                pattern: pattern.clone(),
                source,
            })?;
        trace_mask_built("glob", &pattern, case_sensitive);
        Ok(Self {
            literal_leading_period: pattern.starts_with('.') || pattern.starts_with("\\."),
            matcher: glob.compile_matcher(),
            pattern,
            case_sensitive,
        })
    }

    /// Pattern text.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether comparisons keep case.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Tests `candidate` against the pattern.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        if candidate.starts_with('.') && !self.literal_leading_period {
            return false;
        }
        self.matcher.is_match(candidate)
    }
}

/// Rewrites an `fnmatch` pattern into globset syntax.
///
/// Braces and commas have no meaning to `fnmatch`, so outside a bracket
/// class they become single-character classes. A `[` without a closing `]`
/// is a literal.
fn fnmatch_syntax(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut index = 0;
    while index < chars.len() {
        match chars[index] {
            '\\' => match chars.get(index + 1) {
                Some(&next) => {
                    out.push('\\');
                    out.push(next);
                    index += 1;
                }
                None => out.push_str("\\\\"),
            },
            '[' => match class_end(&chars, index) {
                Some(end) => {
                    out.extend(&chars[index..=end]);
                    index = end;
                }
                None => out.push_str("\\["),
            },
            ']' => out.push_str("\\]"),
            c @ ('{' | '}' | ',') => {
                out.push('[');
                out.push(c);
                out.push(']');
            }
            c => out.push(c),
        }
        index += 1;
    }
    out
}

/// Index of the `]` closing the class opened at `open`.
///
/// A `]` right after the opening bracket, or after its `!`/`^` negation,
/// belongs to the class.
fn class_end(chars: &[char], open: usize) -> Option<usize> {
    let mut index = open + 1;
    if matches!(chars.get(index), Some('!' | '^')) {
        index += 1;
    }
    if chars.get(index) == Some(&']') {
        index += 1;
    }
    chars[index.min(chars.len())..]
        .iter()
        .position(|&c| c == ']')
        .map(|offset| index + offset)
}
