//! Selection-driven catalogue walks and conflict resolution.

use std::iter::FusedIterator;

use catalogue::{Catalogue, EntryDescriptor, Walk};
use infinint::BigUint;
use logging::VerbosityConfig;
use masks::Selection;
use policy::{Action, AttrAction, DataAction, Resolution};
use statistics::{Counter, Statistics};

use crate::debug_operation::{trace_conflict, trace_pruned};

/// A compiled operation: which entries take part and how conflicts are
/// settled.
///
/// Build one directly or through
/// [`OperationConfig::build`](crate::OperationConfig::build).
#[derive(Clone, Debug, Default)]
pub struct Operation {
    selection: Selection,
    policy: Action,
    verbosity: VerbosityConfig,
}

impl Operation {
    /// Operation with the given selection and overwriting policy.
    #[must_use]
    pub fn new(selection: Selection, policy: Action) -> Self {
        Self {
            selection,
            policy,
            verbosity: VerbosityConfig::default(),
        }
    }

    /// Replaces the verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: VerbosityConfig) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Selection masks.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Overwriting policy.
    #[must_use]
    pub const fn policy(&self) -> &Action {
        &self.policy
    }

    /// Verbosity requested for this operation.
    #[must_use]
    pub const fn verbosity(&self) -> VerbosityConfig {
        self.verbosity
    }

    /// Walks `catalogue` depth-first, yielding only selected entries.
    ///
    /// A directory rejected by the selection is skipped together with its
    /// whole subtree; its descendants are never looked at.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalogue::{Catalogue, EntryDescriptor, EntryVariant};
    /// use dar_engine::Operation;
    /// use masks::{Mask, Selection};
    /// use policy::Action;
    ///
    /// let catalogue = Catalogue::from_records([
    ///     EntryDescriptor::new("proc", EntryVariant::Directory),
    ///     EntryDescriptor::new("cpuinfo", EntryVariant::PlainFile),
    ///     EntryDescriptor::end_of_directory(),
    ///     EntryDescriptor::new("etc", EntryVariant::Directory),
    ///     EntryDescriptor::new("hosts", EntryVariant::PlainFile),
    /// ])?;
    ///
    /// let selection = Selection::new(Mask::ALWAYS, !Mask::under_dir("/proc", true));
    /// let operation = Operation::new(selection, Action::default());
    /// let paths: Vec<String> = operation.walk(&catalogue).map(|(path, _)| path).collect();
    /// assert_eq!(paths, ["/etc", "/etc/hosts"]);
    /// # Ok::<(), catalogue::CatalogueError>(())
    /// ```
    pub fn walk<'a>(&'a self, catalogue: &'a Catalogue) -> SelectedEntries<'a> {
        SelectedEntries {
            walk: catalogue.walk(),
            selection: &self.selection,
            ignored: 0,
        }
    }

    /// Counts every entry of `catalogue` into `stats`.
    ///
    /// Selected entries are recorded by classification; each rejected entry
    /// counts once as ignored, a pruned directory included, its descendants
    /// not.
    pub fn account(&self, catalogue: &Catalogue, stats: &mut Statistics) {
        let mut entries = self.walk(catalogue);
        for (_, entry) in entries.by_ref() {
            stats.record_entry(entry);
        }
        stats.add_to_ignored(&BigUint::from(entries.ignored()));
    }

    /// Settles one conflict with the operation's policy and records the
    /// outcome.
    ///
    /// Undefined axes fall back to [`Resolution::DEFAULT`]. Overwritten data
    /// counts as treated, preserved data as too old and removed data as
    /// deleted; overwritten or merged attributes count as attribute-treated.
    pub fn resolve_conflict(
        &self,
        in_place: &EntryDescriptor,
        to_be_added: &EntryDescriptor,
        stats: &mut Statistics,
    ) -> Resolution {
        let resolution = self.policy.resolve(in_place, to_be_added);
        let data_counter = match resolution.data {
            DataAction::Overwrite | DataAction::OverwriteMarkAlreadySaved => Some(Counter::Treated),
            DataAction::Preserve | DataAction::PreserveMarkAlreadySaved => Some(Counter::TooOld),
            DataAction::Remove => Some(Counter::Deleted),
            DataAction::Ask => None,
        };
        if let Some(counter) = data_counter {
            stats.increment(counter);
        }
        if matches!(
            resolution.attrs,
            AttrAction::Overwrite
                | AttrAction::OverwriteMarkAlreadySaved
                | AttrAction::MergePreserve
                | AttrAction::MergeOverwrite
        ) {
            stats.incr_ea_treated();
        }
        trace_conflict(in_place.name(), resolution.data.letter(), resolution.attrs.letter());
        resolution
    }
}

/// Iterator returned by [`Operation::walk`].
#[derive(Debug)]
pub struct SelectedEntries<'a> {
    walk: Walk<'a>,
    selection: &'a Selection,
    ignored: u64,
}

impl SelectedEntries<'_> {
    /// Entries rejected so far; a pruned directory counts once.
    #[must_use]
    pub const fn ignored(&self) -> u64 {
        self.ignored
    }
}

impl<'a> Iterator for SelectedEntries<'a> {
    type Item = (String, &'a EntryDescriptor);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (path, entry) = self.walk.next()?;
            let is_dir = entry.variant().is_directory();
            if self.selection.includes_entry(&path, is_dir) {
                return Some((path, entry));
            }
            self.ignored += 1;
            if is_dir {
                trace_pruned(&path);
                self.walk.skip_subtree();
            }
        }
    }
}

impl FusedIterator for SelectedEntries<'_> {}
