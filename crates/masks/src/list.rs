use std::collections::BTreeSet;
use std::fs;
use std::ops::Bound;
use std::path::Path;

use crate::debug_mask::trace_list_loaded;
use crate::error::MaskError;
use crate::path::{append, comparable};

/// An explicit list of paths.
///
/// A candidate is covered when it equals a listed path. In *including* mode a
/// candidate is also covered when it is a directory leading to a listed path,
/// so that the walk can reach every listed entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListMask {
    keys: BTreeSet<String>,
    including: bool,
    case_sensitive: bool,
}

impl ListMask {
    /// Builds a list from `lines`.
    ///
    /// Empty lines are skipped. Lines not starting with `/` are completed with
    /// `prefix`, which must be absolute.
    pub fn from_lines<I, S>(
        lines: I,
        prefix: &str,
        including: bool,
        case_sensitive: bool,
    ) -> Result<Self, MaskError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !prefix.starts_with('/') {
            return Err(MaskError::RelativePrefix {
                prefix: prefix.to_owned(),
            });
        }
        let keys = lines
            .into_iter()
            .filter_map(|line| {
                let line = line.as_ref().trim_end_matches('\r');
                if line.is_empty() {
                    return None;
                }
                let absolute = if line.starts_with('/') {
                    line.to_owned()
                } else {
                    append(prefix, line)
                };
                Some(comparable(&absolute, case_sensitive).into_owned())
            })
            .collect::<BTreeSet<_>>();
        trace_list_loaded("<lines>", keys.len(), including);
        Ok(Self {
            keys,
            including,
            case_sensitive,
        })
    }

    /// Reads one path per line from `file`.
    pub fn from_file(
        file: &Path,
        prefix: &str,
        including: bool,
        case_sensitive: bool,
    ) -> Result<Self, MaskError> {
        let text = fs::read_to_string(file).map_err(|source| MaskError::ListFile {
            path: file.to_path_buf(),
            source,
        })?;
        let mask = Self::from_lines(text.lines(), prefix, including, case_sensitive)?;
        trace_list_loaded(&file.display().to_string(), mask.len(), including);
        Ok(mask)
    }

    /// Number of distinct listed paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the list holds no path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether ancestors of listed paths are covered too.
    #[must_use]
    pub const fn including(&self) -> bool {
        self.including
    }

    /// Whether comparisons keep case.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Listed paths in sorted order, as compared.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Tests whether `candidate` is covered by the list.
    #[must_use]
    pub fn covers(&self, candidate: &str) -> bool {
        let candidate = comparable(candidate, self.case_sensitive);
        if self.keys.contains(candidate.as_ref()) {
            return true;
        }
        if !self.including {
            return false;
        }
        let mut prefix = candidate.into_owned();
        if !prefix.ends_with('/') {
            prefix.push('/');
        }
        self.keys
            .range::<str, _>((Bound::Included(prefix.as_str()), Bound::Unbounded))
            .next()
            .is_some_and(|key| key.starts_with(&prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(including: bool) -> ListMask {
        ListMask::from_lines(
            ["/etc/ssh/sshd_config", "var/log/syslog", "", "/etc/hosts"],
            "/",
            including,
            true,
        )
        .expect("absolute prefix")
    }

    #[test]
    fn exact_entries_are_covered() {
        let mask = list(false);
        assert_eq!(mask.len(), 3);
        assert!(mask.covers("/etc/hosts"));
        assert!(mask.covers("/var/log/syslog"));
        assert!(!mask.covers("/etc"));
    }

    #[test]
    fn including_mode_covers_ancestors() {
        let mask = list(true);
        assert!(mask.covers("/etc"));
        assert!(mask.covers("/etc/ssh/"));
        assert!(mask.covers("/var"));
        assert!(mask.covers("/"));
        assert!(!mask.covers("/et"));
        assert!(!mask.covers("/etc/ssh/sshd_config/child"));
    }

    #[test]
    fn relative_prefix_is_rejected() {
        let error = ListMask::from_lines(["a"], "home", true, true).expect_err("relative");
        assert!(matches!(error, MaskError::RelativePrefix { .. }));
    }

    #[test]
    fn case_insensitive_lists_fold_both_sides() {
        let mask = ListMask::from_lines(["/Data/Report.TXT"], "/", true, false).expect("ok");
        assert!(mask.covers("/data/report.txt"));
        assert!(mask.covers("/DATA"));
    }
}
