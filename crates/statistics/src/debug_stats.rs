//! Tracing for counter updates and snapshot publication.
//!
//! All tracing is conditionally compiled behind the `tracing` feature flag and
//! produces no-op inline functions when disabled.

#[cfg(feature = "tracing")]
use logging::STATS_TARGET;

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a counter that was refused because it would go negative.
///
/// # Arguments
///
/// * `counter` - Label of the counter
/// * `current` - Value before the refused update
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_underflow(counter: &str, current: &str) {
    tracing::debug!(
        target: STATS_TARGET,
        counter = %counter,
        current = %current,
        "counter_underflow"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_underflow(_counter: &str, _current: &str) {}

/// Traces the counter chosen for a classified entry.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_classification(glyph: char, counter: Option<&str>) {
    tracing::trace!(
        target: STATS_TARGET,
        glyph = %glyph,
        counter = counter.unwrap_or("none"),
        "entry_classified"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_classification(_glyph: char, _counter: Option<&str>) {}

/// Traces a snapshot handed to observers.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_published(total: &str) {
    tracing::debug!(
        target: STATS_TARGET,
        total = %total,
        "statistics_published"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_published(_total: &str) {}
