use thiserror::Error;

/// Reasons a record cannot be appended to a [`CatalogueBuilder`](crate::CatalogueBuilder).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    /// An end-of-directory record arrived while no directory was open.
    #[error("end of directory at record {index} without an open directory")]
    UnbalancedEnd {
        /// Position of the offending record.
        index: usize,
    },

    /// A record other than end-of-directory had an empty name.
    #[error("record {index} has an empty name")]
    EmptyName {
        /// Position of the offending record.
        index: usize,
    },

    /// A name contained a path separator or was a dot component.
    #[error("record {index} has invalid name {name:?}")]
    InvalidName {
        /// Position of the offending record.
        index: usize,
        /// Name as given.
        name: String,
    },
}
