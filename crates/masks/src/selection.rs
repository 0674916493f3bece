use crate::debug_mask::trace_selection;
use crate::mask::Mask;
use crate::path::basename;

/// The two masks an operation applies to each visited entry.
///
/// `names` is tested against the final path component of non-directories;
/// directories are never rejected by name, so that their content stays
/// reachable. `subtree` is tested against the full path of every entry, and a
/// directory it rejects is pruned together with its descendants.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    names: Mask,
    subtree: Mask,
}

impl Selection {
    /// Combines a name mask and a subtree mask.
    #[must_use]
    pub const fn new(names: Mask, subtree: Mask) -> Self {
        Self { names, subtree }
    }

    /// Selection that keeps everything.
    #[must_use]
    pub const fn everything() -> Self {
        Self::new(Mask::ALWAYS, Mask::ALWAYS)
    }

    /// Name mask.
    #[must_use]
    pub const fn names(&self) -> &Mask {
        &self.names
    }

    /// Subtree mask.
    #[must_use]
    pub const fn subtree(&self) -> &Mask {
        &self.subtree
    }

    /// Tests a bare name against the name mask.
    #[must_use]
    pub fn includes_name(&self, name: &str) -> bool {
        self.names.evaluate(name)
    }

    /// Tests a full path against the subtree mask.
    #[must_use]
    pub fn includes_path(&self, path: &str) -> bool {
        self.subtree.evaluate(path)
    }

    /// Decides whether the entry at `path` participates.
    #[must_use]
    pub fn includes_entry(&self, path: &str, is_dir: bool) -> bool {
        let selected =
            self.includes_path(path) && (is_dir || self.includes_name(basename(path)));
        trace_selection(path, is_dir, selected);
        selected
    }

    /// Keeps the non-directory paths that participate, in input order.
    pub fn filter_paths<'a, I>(&'a self, paths: I) -> impl Iterator<Item = &'a str> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        paths
            .into_iter()
            .filter(move |path| self.includes_entry(path, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_bypass_the_name_mask() {
        let selection = Selection::new(Mask::glob("*.txt", true).expect("valid"), Mask::ALWAYS);
        assert!(selection.includes_entry("/home/user", true));
        assert!(!selection.includes_entry("/home/user/a.rs", false));
        assert!(selection.includes_entry("/home/user/a.txt", false));
    }

    #[test]
    fn name_mask_sees_only_the_last_component() {
        let selection = Selection::new(Mask::glob("a*", true).expect("valid"), Mask::ALWAYS);
        assert!(!selection.includes_entry("/alpha/beta", false));
        assert!(selection.includes_entry("/beta/alpha", false));
    }

    #[test]
    fn everything_keeps_all_paths() {
        let selection = Selection::everything();
        let kept: Vec<&str> = selection.filter_paths(["/a", "/b/.c"]).collect();
        assert_eq!(kept, ["/a", "/b/.c"]);
    }
}
