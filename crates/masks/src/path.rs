//! Path text helpers shared by the path-based masks.
//!
//! Paths are compared as `/`-separated strings. Repeated separators collapse
//! and a trailing separator is ignored, except for the root itself.

use std::borrow::Cow;

/// Collapses `//` runs and strips a trailing `/` (keeping a lone `/`).
pub(crate) fn normalize(path: &str) -> Cow<'_, str> {
    let needs_work = path.contains("//") || (path.len() > 1 && path.ends_with('/'));
    if !needs_work {
        return Cow::Borrowed(path);
    }
    let mut out = String::with_capacity(path.len());
    let mut previous_slash = false;
    for ch in path.chars() {
        if ch == '/' && previous_slash {
            continue;
        }
        previous_slash = ch == '/';
        out.push(ch);
    }
    if out.len() > 1 && out.ends_with('/') {
        out.pop();
    }
    Cow::Owned(out)
}

/// Normalizes and, when comparisons ignore case, upper-cases `path`.
pub(crate) fn comparable(path: &str, case_sensitive: bool) -> Cow<'_, str> {
    let normalized = normalize(path);
    if case_sensitive {
        normalized
    } else {
        Cow::Owned(normalized.to_uppercase())
    }
}

/// Reports whether `path` is `ancestor` or lies beneath it.
///
/// Both arguments must already be normalized.
pub(crate) fn is_subdir_of(path: &str, ancestor: &str) -> bool {
    if ancestor == "/" {
        return path.starts_with('/');
    }
    path.strip_prefix(ancestor)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Joins a relative `path` onto `base`.
pub(crate) fn append(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let mut joined = String::with_capacity(base.len() + path.len() + 1);
    joined.push_str(base);
    joined.push('/');
    joined.push_str(path);
    normalize(&joined).into_owned()
}

/// Final component of `path`; the path itself when it has no separator.
#[must_use]
pub fn basename(path: &str) -> &str {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    match trimmed.rfind('/') {
        Some(index) if index + 1 < trimmed.len() => &trimmed[index + 1..],
        _ => trimmed,
    }
}
