//! Tracing for operation walks and conflict resolution.
//!
//! All tracing is conditionally compiled behind the `tracing` feature flag and
//! produces no-op inline functions when disabled.

#[cfg(feature = "tracing")]
use logging::{CATALOGUE_TARGET, POLICY_TARGET};

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces a directory pruned with its subtree.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_pruned(path: &str) {
    tracing::debug!(
        target: CATALOGUE_TARGET,
        path = %path,
        "subtree_pruned"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_pruned(_path: &str) {}

/// Traces the actions applied to one conflicting entry.
///
/// # Arguments
///
/// * `name` - Name of the in-place entry
/// * `data` - Letter of the data action
/// * `attrs` - Letter of the attribute action
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_conflict(name: &str, data: char, attrs: char) {
    tracing::info!(
        target: POLICY_TARGET,
        entry = %name,
        data = %data,
        attrs = %attrs,
        "conflict_resolved"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_conflict(_name: &str, _data: char, _attrs: char) {}
