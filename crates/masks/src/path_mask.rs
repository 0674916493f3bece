use crate::debug_mask::trace_mask_built;
use crate::path::{comparable, is_subdir_of};

/// A stored path compared against candidate paths.
///
/// The path is normalized once at construction and upper-cased when
/// comparisons ignore case; candidates receive the same treatment at
/// evaluation time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathMask {
    path: String,
    key: String,
    case_sensitive: bool,
}

impl PathMask {
    /// Stores `path` for later comparisons.
    #[must_use]
    pub fn new(path: impl Into<String>, case_sensitive: bool) -> Self {
        let path = path.into();
        let key = comparable(&path, case_sensitive).into_owned();
        Self {
            path,
            key,
            case_sensitive,
        }
    }

    pub(crate) fn traced(self, kind: &str) -> Self {
        trace_mask_built(kind, &self.path, self.case_sensitive);
        self
    }

    /// Path as supplied at construction.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether comparisons keep case.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// `candidate` is the stored path, an ancestor of it, or beneath it.
    #[must_use]
    pub fn related_to(&self, candidate: &str) -> bool {
        let candidate = comparable(candidate, self.case_sensitive);
        is_subdir_of(&candidate, &self.key) || is_subdir_of(&self.key, &candidate)
    }

    /// `candidate` is the stored path or lies beneath it.
    #[must_use]
    pub fn contains(&self, candidate: &str) -> bool {
        let candidate = comparable(candidate, self.case_sensitive);
        is_subdir_of(&candidate, &self.key)
    }

    /// `candidate` names exactly the stored path.
    #[must_use]
    pub fn same_as(&self, candidate: &str) -> bool {
        comparable(candidate, self.case_sensitive) == self.key
    }
}
