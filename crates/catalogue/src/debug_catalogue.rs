//! Tracing for classification, catalogue construction and listings.
//!
//! All tracing is conditionally compiled behind the `tracing` feature flag and
//! produces no-op inline functions when disabled.

#[cfg(feature = "tracing")]
use logging::CATALOGUE_TARGET;

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a record whose signature was not recognised.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_unknown_tag(byte: u8) {
    tracing::debug!(
        target: CATALOGUE_TARGET,
        tag = byte,
        "unknown_entry_tag"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_unknown_tag(_byte: u8) {}

/// Traces a finished catalogue.
///
/// # Arguments
///
/// * `records` - Number of stored records, sentinels included
/// * `closed_implicitly` - Directories the builder had to close on `build`
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_catalogue_built(records: usize, closed_implicitly: usize) {
    tracing::debug!(
        target: CATALOGUE_TARGET,
        records = records,
        closed_implicitly = closed_implicitly,
        "catalogue_built"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_catalogue_built(_records: usize, _closed_implicitly: usize) {}

/// Traces the end of a listing.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_listing_finished(lines: u64) {
    tracing::trace!(target: CATALOGUE_TARGET, lines = lines, "listing_finished");
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_listing_finished(_lines: u64) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_helpers_accept_any_input() {
        trace_unknown_tag(0);
        trace_catalogue_built(0, 0);
        trace_listing_finished(u64::MAX);
    }
}
