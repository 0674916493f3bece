#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the presentation and diagnostics plumbing shared by the
//! engine crates: the tracing targets each crate emits under, a
//! [`VerbosityConfig`] that maps a verbosity level to per-category levels, and
//! the [`UserInteraction`] capability through which listings and statistics
//! reports reach the user.
//!
//! # Design
//!
//! - [`Category`] enumerates the diagnostic areas (`mask`, `policy`,
//!   `catalogue`, `stats`). Each has a fixed tracing target such as
//!   [`MASK_TARGET`].
//! - [`VerbosityConfig`] stores one level per category and renders an
//!   `EnvFilter` directive string with
//!   [`filter_directives`](VerbosityConfig::filter_directives).
//! - [`LineSink`] wraps an [`io::Write`](std::io::Write) implementor and
//!   writes each emitted line according to its [`LineMode`]. A `Vec<String>`
//!   also implements [`UserInteraction`] for tests and in-memory capture.
//! - With the `tracing` feature, [`init_tracing`] installs a
//!   `tracing-subscriber` formatter filtered by the configuration.
//!
//! # Invariants
//!
//! - Levels are clamped to `0..=3`: off, info, debug, trace.
//! - Engine crates only emit events; they never install subscribers.
//!
//! # Errors
//!
//! Sinks surface [`std::io::Error`] from the underlying writer. Flag parsing
//! reports a descriptive `String`.
//!
//! # Examples
//!
//! ```
//! use logging::{LineSink, UserInteraction, VerbosityConfig};
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert!(config.filter_directives().contains("dar::policy=debug"));
//!
//! let mut sink = LineSink::new(Vec::new());
//! sink.emit("CATALOGUE CONTENTS :")?;
//! assert_eq!(sink.into_inner(), b"CATALOGUE CONTENTS :\n".to_vec());
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # See also
//!
//! - `catalogue::Listing` and `statistics::Statistics::dump`, the two
//!   producers of user-facing lines.

mod config;
mod levels;
mod line_mode;
mod sink;

#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{
    CATALOGUE_TARGET, Category, CategoryLevels, MASK_TARGET, MAX_LEVEL, POLICY_TARGET,
    STATS_TARGET,
};
pub use line_mode::LineMode;
pub use sink::{LineSink, UserInteraction};

#[cfg(feature = "tracing")]
pub use tracing_bridge::{init_tracing, try_init_tracing};
