//! Tracing for mask construction and evaluation.
//!
//! All tracing is conditionally compiled behind the `tracing` feature flag and
//! produces no-op inline functions when disabled.

#[cfg(feature = "tracing")]
use logging::MASK_TARGET;

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a leaf mask being compiled.
///
/// # Arguments
///
/// * `kind` - Variant name, e.g. `glob` or `subtree`
/// * `pattern` - Pattern or path text the mask was built from
/// * `case_sensitive` - Whether comparisons keep case
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_mask_built(kind: &str, pattern: &str, case_sensitive: bool) {
    tracing::debug!(
        target: MASK_TARGET,
        kind = %kind,
        pattern = %pattern,
        case_sensitive = case_sensitive,
        "mask_built"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_mask_built(_kind: &str, _pattern: &str, _case_sensitive: bool) {}

/// Traces one evaluation of a mask against a candidate.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_mask_evaluate(kind: &str, candidate: &str, matched: bool) {
    tracing::trace!(
        target: MASK_TARGET,
        kind = %kind,
        candidate = %candidate,
        matched = matched,
        "mask_evaluate"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_mask_evaluate(_kind: &str, _candidate: &str, _matched: bool) {}

/// Traces a path list being loaded.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_list_loaded(source: &str, entries: usize, including: bool) {
    tracing::debug!(
        target: MASK_TARGET,
        source = %source,
        entries = entries,
        including = including,
        "mask_list_loaded"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_list_loaded(_source: &str, _entries: usize, _including: bool) {}

/// Traces a selection decision for one catalogue path.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_selection(path: &str, is_dir: bool, selected: bool) {
    tracing::debug!(
        target: MASK_TARGET,
        path = %path,
        is_dir = is_dir,
        selected = selected,
        "selection"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_selection(_path: &str, _is_dir: bool, _selected: bool) {}
