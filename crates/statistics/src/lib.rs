#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `statistics` counts what an archive operation did with its entries:
//! treated, hard-linked, skipped, inode-only, ignored, too old, errored,
//! deleted, attribute-treated, plus a wasted byte amount. Counters are
//! [`infinint::BigUint`] values and never wrap.
//!
//! # Design
//!
//! - [`Statistics`] is a plain value owned by the operation driver. Each
//!   counter is named by a [`Counter`] and also has its own `incr_*`,
//!   `decr_*` and `*_str` methods.
//! - [`Statistics::record_classification`] maps an entry variant to the
//!   counter it belongs in.
//! - [`SharedStatistics`] wraps the value in `Arc<Mutex<_>>` for a driver
//!   and observer threads. [`StatisticsReader`] is the observer's read-only
//!   handle. Snapshots copy the whole struct.
//!
//! # Invariants
//!
//! - [`Statistics::total`] is the sum of the seven entry categories; hard
//!   links, attribute counters and the byte amount are not part of it.
//! - A refused decrement or subtraction leaves the counter unchanged.
//!
//! # Errors
//!
//! Decrements and subtractions that would go below zero return
//! [`infinint::InfinintError::Underflow`]. [`Statistics::dump`] reports sink
//! failures as [`std::io::Error`].
//!
//! # Examples
//!
//! ```
//! use catalogue::{EntryVariant, RawEntry, TypeTag, classify};
//! use statistics::Statistics;
//!
//! let mut stats = Statistics::new();
//! for raw in [
//!     RawEntry::new(TypeTag::PLAIN_FILE),
//!     RawEntry::new(TypeTag::DIRECTORY),
//!     RawEntry::new(TypeTag::new(b'?')),
//! ] {
//!     stats.record_classification(classify(raw));
//! }
//!
//! assert_eq!(stats.treated_str(), "2");
//! assert_eq!(stats.deleted_str(), "1");
//! assert_eq!(stats.total().to_string(), "3");
//! ```
//!
//! # See also
//!
//! - `catalogue` for entry classification.
//! - `logging::UserInteraction`, the sink used by [`Statistics::dump`].

mod counter;
mod debug_stats;
mod shared;
mod statistics;

pub use counter::Counter;
pub use shared::{SharedStatistics, StatisticsReader};
pub use statistics::{DUMP_FOOTER, DUMP_HEADER, Statistics};

#[cfg(test)]
mod tests;
