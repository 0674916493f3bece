use crate::debug_catalogue::trace_catalogue_built;
use crate::entry::EntryDescriptor;
use crate::error::CatalogueError;
use crate::variant::EntryVariant;

/// Path of the implicit root directory every catalogue hangs from.
pub const ROOT_PATH: &str = "/";

/// Tree of archive entries stored in pre-order.
///
/// A directory record is followed by its children and then by an
/// [`EntryVariant::EndOfDirectory`] sentinel. The sequence is always balanced:
/// [`CatalogueBuilder::build`] closes directories left open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catalogue {
    records: Vec<EntryDescriptor>,
}

impl Catalogue {
    /// Builds a catalogue from records in pre-order.
    ///
    /// Sentinels may be given explicitly or left out at the end.
    pub fn from_records<I>(records: I) -> Result<Self, CatalogueError>
    where
        I: IntoIterator<Item = EntryDescriptor>,
    {
        let mut builder = CatalogueBuilder::new();
        for record in records {
            builder.push(record)?;
        }
        Ok(builder.build())
    }

    /// Every stored record, sentinels included.
    #[must_use]
    pub fn records(&self) -> &[EntryDescriptor] {
        &self.records
    }

    /// Number of entries, sentinels excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.variant() != EntryVariant::EndOfDirectory)
            .count()
    }

    /// True when the catalogue holds no entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Depth-first iterator over `(path, entry)` pairs.
    ///
    /// Paths are absolute, built by appending each name to its parent's
    /// path. Sentinels are consumed, never yielded.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            records: &self.records,
            position: 0,
            parents: Vec::new(),
            just_opened: false,
        }
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = (String, &'a EntryDescriptor);
    type IntoIter = Walk<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.walk()
    }
}

/// Incremental constructor for a [`Catalogue`].
///
/// # Examples
///
/// ```
/// use catalogue::{CatalogueBuilder, EntryDescriptor, EntryVariant};
///
/// let mut builder = CatalogueBuilder::new();
/// builder.open_directory(EntryDescriptor::new("etc", EntryVariant::Directory))?;
/// builder.add(EntryDescriptor::new("hosts", EntryVariant::PlainFile))?;
/// builder.close_directory()?;
/// let catalogue = builder.build();
///
/// let paths: Vec<String> = catalogue.walk().map(|(path, _)| path).collect();
/// assert_eq!(paths, ["/etc", "/etc/hosts"]);
/// # Ok::<(), catalogue::CatalogueError>(())
/// ```
#[derive(Debug, Default)]
pub struct CatalogueBuilder {
    records: Vec<EntryDescriptor>,
    open: usize,
}

impl CatalogueBuilder {
    /// Empty builder positioned at the root.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
            open: 0,
        }
    }

    /// Number of directories currently open.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.open
    }

    /// Appends any record, opening or closing directories as its variant
    /// demands.
    pub fn push(&mut self, entry: EntryDescriptor) -> Result<&mut Self, CatalogueError> {
        let index = self.records.len();
        match entry.variant() {
            EntryVariant::EndOfDirectory => {
                if self.open == 0 {
                    return Err(CatalogueError::UnbalancedEnd { index });
                }
                self.open -= 1;
            }
            variant => {
                validate_name(index, entry.name())?;
                if variant.is_directory() {
                    self.open += 1;
                }
            }
        }
        self.records.push(entry);
        Ok(self)
    }

    /// Appends a non-directory entry to the current directory.
    ///
    /// Directories are accepted as well and are opened, exactly as with
    /// [`CatalogueBuilder::push`].
    pub fn add(&mut self, entry: EntryDescriptor) -> Result<&mut Self, CatalogueError> {
        self.push(entry)
    }

    /// Appends a directory and makes it current.
    pub fn open_directory(
        &mut self,
        directory: EntryDescriptor,
    ) -> Result<&mut Self, CatalogueError> {
        self.push(directory)
    }

    /// Closes the current directory.
    pub fn close_directory(&mut self) -> Result<&mut Self, CatalogueError> {
        self.push(EntryDescriptor::end_of_directory())
    }

    /// Finishes the catalogue, closing every directory still open.
    #[must_use]
    pub fn build(mut self) -> Catalogue {
        let closed_implicitly = self.open;
        for _ in 0..self.open {
            self.records.push(EntryDescriptor::end_of_directory());
        }
        trace_catalogue_built(self.records.len(), closed_implicitly);
        Catalogue {
            records: self.records,
        }
    }
}

fn validate_name(index: usize, name: &str) -> Result<(), CatalogueError> {
    if name.is_empty() {
        return Err(CatalogueError::EmptyName { index });
    }
    if name.contains('/') || name == "." || name == ".." {
        return Err(CatalogueError::InvalidName {
            index,
            name: name.to_owned(),
        });
    }
    Ok(())
}

/// Appends `name` to the directory path `parent`.
#[must_use]
pub fn append_path(parent: &str, name: &str) -> String {
    let mut path = String::with_capacity(parent.len() + name.len() + 1);
    path.push_str(parent);
    if !parent.ends_with('/') {
        path.push('/');
    }
    path.push_str(name);
    path
}

/// Depth-first iterator returned by [`Catalogue::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    records: &'a [EntryDescriptor],
    position: usize,
    parents: Vec<String>,
    just_opened: bool,
}

impl Walk<'_> {
    /// Skips every descendant of the directory yielded last.
    ///
    /// Has no effect when the last item was not a directory or when the walk
    /// already moved past it.
    pub fn skip_subtree(&mut self) {
        if !self.just_opened {
            return;
        }
        self.just_opened = false;
        let mut depth = 1usize;
        while depth > 0 {
            let Some(record) = self.records.get(self.position) else {
                break;
            };
            self.position += 1;
            match record.variant() {
                EntryVariant::Directory => depth += 1,
                EntryVariant::EndOfDirectory => depth -= 1,
                _ => {}
            }
        }
        self.parents.pop();
    }

    /// Number of directories enclosing the next item.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.parents.len()
    }

    fn current_parent(&self) -> &str {
        self.parents.last().map_or(ROOT_PATH, String::as_str)
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (String, &'a EntryDescriptor);

    fn next(&mut self) -> Option<Self::Item> {
        self.just_opened = false;
        loop {
            let record = self.records.get(self.position)?;
            self.position += 1;
            if record.variant() == EntryVariant::EndOfDirectory {
                self.parents.pop();
                continue;
            }
            let path = append_path(self.current_parent(), record.name());
            if record.variant().is_directory() {
                self.parents.push(path.clone());
                self.just_opened = true;
            }
            return Some((path, record));
        }
    }
}
