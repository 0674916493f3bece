use std::fmt::Write as _;
use std::ops::Not;

use crate::debug_mask::trace_mask_evaluate;
use crate::error::MaskError;
use crate::glob::GlobMask;
use crate::list::ListMask;
use crate::path_mask::PathMask;
use crate::regex_mask::RegexMask;

/// Boolean predicate over a name or a path.
///
/// Leaves compare the candidate string directly; [`Mask::Not`],
/// [`Mask::And`] and [`Mask::Or`] own their children. Evaluation is total:
/// any string, including an empty or malformed path, yields a boolean.
#[derive(Clone, Debug)]
pub enum Mask {
    /// Always the given value.
    Constant(bool),
    /// Shell wildcard match.
    Glob(GlobMask),
    /// Regular expression search.
    Regex(RegexMask),
    /// The candidate and the stored path are on one line of descent: either
    /// one is an ancestor of, or equal to, the other.
    SubtreeOf(PathMask),
    /// The candidate is exactly the stored path.
    ExactPath(PathMask),
    /// The candidate is the stored directory or lies beneath it.
    UnderDir(PathMask),
    /// The candidate is covered by an explicit path list.
    List(ListMask),
    /// Negation.
    Not(Box<Mask>),
    /// True when every child is true; true when empty.
    And(Vec<Mask>),
    /// True when any child is true; false when empty.
    Or(Vec<Mask>),
}

impl Mask {
    /// Mask that accepts everything.
    pub const ALWAYS: Self = Self::Constant(true);
    /// Mask that rejects everything.
    pub const NEVER: Self = Self::Constant(false);

    /// Compiles a shell wildcard leaf.
    pub fn glob(pattern: impl Into<String>, case_sensitive: bool) -> Result<Self, MaskError> {
        GlobMask::new(pattern, case_sensitive).map(Self::Glob)
    }

    /// Compiles a regular expression leaf.
    pub fn regex(pattern: &str, case_sensitive: bool) -> Result<Self, MaskError> {
        RegexMask::new(pattern, case_sensitive).map(Self::Regex)
    }

    /// Bidirectional subtree leaf.
    #[must_use]
    pub fn subtree_of(path: impl Into<String>, case_sensitive: bool) -> Self {
        Self::SubtreeOf(PathMask::new(path, case_sensitive).traced("subtree_of"))
    }

    /// Exact path leaf.
    #[must_use]
    pub fn exact_path(path: impl Into<String>, case_sensitive: bool) -> Self {
        Self::ExactPath(PathMask::new(path, case_sensitive).traced("exact_path"))
    }

    /// One-directional containment leaf.
    #[must_use]
    pub fn under_dir(path: impl Into<String>, case_sensitive: bool) -> Self {
        Self::UnderDir(PathMask::new(path, case_sensitive).traced("under_dir"))
    }

    /// Conjunction of `masks`.
    #[must_use]
    pub fn all(masks: impl IntoIterator<Item = Self>) -> Self {
        Self::And(masks.into_iter().collect())
    }

    /// Disjunction of `masks`.
    #[must_use]
    pub fn any(masks: impl IntoIterator<Item = Self>) -> Self {
        Self::Or(masks.into_iter().collect())
    }

    /// Short lowercase name of the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Constant(_) => "constant",
            Self::Glob(_) => "glob",
            Self::Regex(_) => "regex",
            Self::SubtreeOf(_) => "subtree_of",
            Self::ExactPath(_) => "exact_path",
            Self::UnderDir(_) => "under_dir",
            Self::List(_) => "list",
            Self::Not(_) => "not",
            Self::And(_) => "and",
            Self::Or(_) => "or",
        }
    }

    /// Tests `candidate`.
    ///
    /// `And` stops at the first false child and `Or` at the first true one.
    #[must_use]
    pub fn evaluate(&self, candidate: &str) -> bool {
        let matched = match self {
            Self::Constant(value) => *value,
            Self::Glob(glob) => glob.is_match(candidate),
            Self::Regex(regex) => regex.is_match(candidate),
            Self::SubtreeOf(path) => path.related_to(candidate),
            Self::ExactPath(path) => path.same_as(candidate),
            Self::UnderDir(path) => path.contains(candidate),
            Self::List(list) => list.covers(candidate),
            Self::Not(inner) => !inner.evaluate(candidate),
            Self::And(children) => children.iter().all(|child| child.evaluate(candidate)),
            Self::Or(children) => children.iter().any(|child| child.evaluate(candidate)),
        };
        trace_mask_evaluate(self.kind(), candidate, matched);
        matched
    }

    /// Renders the mask as an indented tree, each line starting with `prefix`.
    #[must_use]
    pub fn dump(&self, prefix: &str) -> String {
        let mut out = String::new();
        self.dump_into(prefix, &mut out);
        out
    }

    fn dump_into(&self, prefix: &str, out: &mut String) {
        let case = |sensitive: bool| {
            if sensitive {
                "case sensitive"
            } else {
                "case insensitive"
            }
        };
        let _ = match self {
            Self::Constant(value) => write!(out, "{prefix}{}", if *value { "TRUE" } else { "FALSE" }),
            Self::Glob(glob) => write!(
                out,
                "{prefix}glob expression: \"{}\" [{}]",
                glob.pattern(),
                case(glob.case_sensitive())
            ),
            Self::Regex(regex) => write!(
                out,
                "{prefix}regular expression: \"{}\" [{}]",
                regex.pattern(),
                case(regex.case_sensitive())
            ),
            Self::SubtreeOf(path) => write!(
                out,
                "{prefix}is subdir of: {} [{}]",
                path.path(),
                case(path.case_sensitive())
            ),
            Self::ExactPath(path) => write!(
                out,
                "{prefix}is path: {} [{}]",
                path.path(),
                case(path.case_sensitive())
            ),
            Self::UnderDir(path) => write!(
                out,
                "{prefix}is under directory: {} [{}]",
                path.path(),
                case(path.case_sensitive())
            ),
            Self::List(list) => write!(
                out,
                "{prefix}path is in list of {} entries [{}{}]",
                list.len(),
                case(list.case_sensitive()),
                if list.including() { ", including ancestors" } else { "" }
            ),
            Self::Not(inner) => {
                let _ = writeln!(out, "{prefix}NOT");
                inner.dump_into(&format!("{prefix}    "), out);
                Ok(())
            }
            Self::And(children) => Self::dump_logical("AND", children, prefix, out),
            Self::Or(children) => Self::dump_logical("OR", children, prefix, out),
        };
    }

    fn dump_logical(name: &str, children: &[Self], prefix: &str, out: &mut String) -> std::fmt::Result {
        let nested = format!("{prefix}  | ");
        writeln!(out, "{prefix}{name}")?;
        for child in children {
            child.dump_into(&nested, out);
            out.push('\n');
        }
        write!(out, "{prefix}  +--")
    }
}

impl Default for Mask {
    fn default() -> Self {
        Self::ALWAYS
    }
}

impl Not for Mask {
    type Output = Self;

    fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl From<ListMask> for Mask {
    fn from(list: ListMask) -> Self {
        Self::List(list)
    }
}

impl From<bool> for Mask {
    fn from(value: bool) -> Self {
        Self::Constant(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_combinators_are_vacuous() {
        assert!(Mask::all([]).evaluate("anything"));
        assert!(!Mask::any([]).evaluate("anything"));
    }

    #[test]
    fn double_negation_cancels() {
        let inner = Mask::glob("*.txt", true).expect("valid");
        let twice = !!inner.clone();
        for candidate in ["a.txt", "a.rs", ""] {
            assert_eq!(twice.evaluate(candidate), inner.evaluate(candidate));
        }
    }

    #[test]
    fn subtree_is_bidirectional_but_exact_is_not() {
        assert!(Mask::subtree_of("/etc", true).evaluate("/etc/ssh/x"));
        assert!(Mask::subtree_of("/etc/ssh/x", true).evaluate("/etc"));
        assert!(!Mask::exact_path("/etc", true).evaluate("/etc/ssh"));
        assert!(Mask::exact_path("/etc", true).evaluate("/etc"));
    }

    #[test]
    fn under_dir_does_not_accept_ancestors() {
        let mask = Mask::under_dir("/etc/ssh", true);
        assert!(mask.evaluate("/etc/ssh/sshd_config"));
        assert!(!mask.evaluate("/etc"));
    }

    #[test]
    fn and_short_circuits_on_first_false() {
        let mask = Mask::all([Mask::NEVER, Mask::ALWAYS]);
        assert!(!mask.evaluate("x"));
        let mask = Mask::any([Mask::ALWAYS, Mask::NEVER]);
        assert!(mask.evaluate("x"));
    }

    #[test]
    fn dump_renders_nested_tree() {
        let mask = Mask::all([
            !Mask::subtree_of("/etc/ssh", false),
            Mask::glob("*.conf", true).expect("valid"),
        ]);
        let dump = mask.dump("");
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines[0], "AND");
        assert_eq!(lines[1], "  | NOT");
        assert_eq!(lines[2], "  |     is subdir of: /etc/ssh [case insensitive]");
        assert_eq!(lines[3], "  | glob expression: \"*.conf\" [case sensitive]");
        assert_eq!(lines[4], "  +--");
    }

    #[test]
    fn kind_names_every_variant() {
        assert_eq!(Mask::ALWAYS.kind(), "constant");
        assert_eq!((!Mask::ALWAYS).kind(), "not");
        assert_eq!(Mask::any([]).kind(), "or");
    }
}
