use std::io;

use logging::UserInteraction;
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::catalogue::{Catalogue, ROOT_PATH, append_path};
use crate::debug_catalogue::trace_listing_finished;
use crate::entry::EntryDescriptor;
use crate::owner::{NumericOwners, OwnerResolver, SystemOwners};
use crate::variant::EntryVariant;

const LIST_TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]/[month padding:zero]/[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero]"
);

/// Width of one indentation step in listings.
pub const DEFAULT_INDENT_WIDTH: usize = 3;

/// Presentation options for [`Catalogue::listing`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListingOptions {
    resolve_owners: bool,
    full_paths: bool,
    indent_width: usize,
}

impl Default for ListingOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingOptions {
    /// Numeric owners, bare names, three-space indentation.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            resolve_owners: false,
            full_paths: false,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }

    /// Prints account names instead of numeric identifiers.
    #[must_use]
    pub const fn with_resolve_owners(mut self, resolve: bool) -> Self {
        self.resolve_owners = resolve;
        self
    }

    /// Prints each entry's full path instead of its name.
    #[must_use]
    pub const fn with_full_paths(mut self, full: bool) -> Self {
        self.full_paths = full;
        self
    }

    /// Sets the number of spaces per directory level.
    #[must_use]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Whether owners are resolved to names.
    #[must_use]
    pub const fn resolve_owners(&self) -> bool {
        self.resolve_owners
    }

    /// Whether full paths are printed.
    #[must_use]
    pub const fn full_paths(&self) -> bool {
        self.full_paths
    }

    /// Spaces per directory level.
    #[must_use]
    pub const fn indent_width(&self) -> usize {
        self.indent_width
    }
}

impl Catalogue {
    /// Lazy listing of the catalogue, one line per entry.
    ///
    /// Owner resolution follows [`ListingOptions::resolve_owners`].
    #[must_use]
    pub fn listing(&self, options: ListingOptions) -> Listing<'_> {
        let owners: Box<dyn OwnerResolver> = if options.resolve_owners {
            Box::new(SystemOwners)
        } else {
            Box::new(NumericOwners)
        };
        Listing::new(self.records(), options, owners)
    }

    /// Lazy listing using a caller-provided owner resolver.
    #[must_use]
    pub fn listing_with_owners<'a, R>(&'a self, options: ListingOptions, owners: R) -> Listing<'a>
    where
        R: OwnerResolver + 'a,
    {
        Listing::new(self.records(), options, Box::new(owners))
    }

    /// Emits every listing line through `sink` and returns the line count.
    pub fn list_to<U: UserInteraction>(
        &self,
        options: ListingOptions,
        mut sink: U,
    ) -> io::Result<u64> {
        let mut count = 0u64;
        for line in self.listing(options) {
            sink.emit(&line)?;
            count += 1;
        }
        Ok(count)
    }
}

/// Depth-first sequence of formatted listing lines.
///
/// Each line holds, in order: indentation, `*` for hard-linked entries (a
/// space otherwise), the type glyph and permission string, the name, the
/// owner and group separated by `/`, and the modification time. Removed
/// entries print `Removed entry which was of type X` followed by the name.
/// The listing does not restart once exhausted.
pub struct Listing<'a> {
    records: &'a [EntryDescriptor],
    position: usize,
    parents: Vec<String>,
    options: ListingOptions,
    owners: Box<dyn OwnerResolver + 'a>,
    emitted: u64,
    finished: bool,
}

impl std::fmt::Debug for Listing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listing")
            .field("position", &self.position)
            .field("depth", &self.parents.len())
            .field("options", &self.options)
            .field("emitted", &self.emitted)
            .finish_non_exhaustive()
    }
}

impl<'a> Listing<'a> {
    fn new(
        records: &'a [EntryDescriptor],
        options: ListingOptions,
        owners: Box<dyn OwnerResolver + 'a>,
    ) -> Self {
        Self {
            records,
            position: 0,
            parents: Vec::new(),
            options,
            owners,
            emitted: 0,
            finished: false,
        }
    }

    /// Lines produced so far.
    #[must_use]
    pub const fn lines_emitted(&self) -> u64 {
        self.emitted
    }

    fn format_line(&self, entry: &EntryDescriptor) -> String {
        let indent = " ".repeat(self.parents.len() * self.options.indent_width);
        let marker = if entry.is_hard_linked() { '*' } else { ' ' };
        let parent = self.parents.last().map_or(ROOT_PATH, String::as_str);
        let name = if self.options.full_paths {
            append_path(parent, entry.name())
        } else {
            entry.name().to_owned()
        };
        match entry.variant() {
            EntryVariant::RemovedEntry { original } => {
                format!("{indent}{marker}Removed entry which was of type {original} {name}")
            }
            variant => format!(
                "{indent}{marker}{}{} {name} {}/{} {}",
                variant.glyph(),
                permission_string(entry.perm()),
                self.owners.user_name(entry.uid()),
                self.owners.group_name(entry.gid()),
                format_mtime(entry.mtime()),
            ),
        }
    }
}

impl Iterator for Listing<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        while let Some(entry) = self.records.get(self.position) {
            self.position += 1;
            if entry.variant() == EntryVariant::EndOfDirectory {
                self.parents.pop();
                continue;
            }
            let line = self.format_line(entry);
            if entry.variant().is_directory() {
                let parent = self.parents.last().map_or(ROOT_PATH, String::as_str);
                let path = append_path(parent, entry.name());
                self.parents.push(path);
            }
            self.emitted += 1;
            return Some(line);
        }
        self.finished = true;
        trace_listing_finished(self.emitted);
        None
    }
}

impl std::iter::FusedIterator for Listing<'_> {}

/// Renders permission bits as `rwxr-xr-x`, with `s`/`S` for set-id bits and
/// `t`/`T` for the sticky bit.
#[must_use]
pub fn permission_string(perm: u32) -> String {
    let bit = |mask: u32, c: char| if perm & mask != 0 { c } else { '-' };
    let special = |exec: bool, flag: bool, lower: char, upper: char| match (exec, flag) {
        (true, true) => lower,
        (false, true) => upper,
        (true, false) => 'x',
        (false, false) => '-',
    };
    let mut out = String::with_capacity(9);
    out.push(bit(0o400, 'r'));
    out.push(bit(0o200, 'w'));
    out.push(special(perm & 0o100 != 0, perm & 0o4000 != 0, 's', 'S'));
    out.push(bit(0o040, 'r'));
    out.push(bit(0o020, 'w'));
    out.push(special(perm & 0o010 != 0, perm & 0o2000 != 0, 's', 'S'));
    out.push(bit(0o004, 'r'));
    out.push(bit(0o002, 'w'));
    out.push(special(perm & 0o001 != 0, perm & 0o1000 != 0, 't', 'T'));
    out
}

/// Formats seconds since the epoch as `YYYY/MM/DD hh:mm:ss` in UTC.
///
/// Values the calendar cannot represent are printed as the raw number.
#[must_use]
pub fn format_mtime(seconds: u64) -> String {
    i64::try_from(seconds)
        .ok()
        .and_then(|secs| OffsetDateTime::from_unix_timestamp(secs).ok())
        .and_then(|time| time.format(LIST_TIMESTAMP_FORMAT).ok())
        .unwrap_or_else(|| seconds.to_string())
}
