//! Tracing for criterion and action evaluation.
//!
//! All tracing is conditionally compiled behind the `tracing` feature flag and
//! produces no-op inline functions when disabled.

#[cfg(feature = "tracing")]
use logging::POLICY_TARGET;

// ============================================================================
// Tracing functions (feature-gated)
// ============================================================================

/// Traces one criterion evaluation.
///
/// # Arguments
///
/// * `kind` - Criterion name, e.g. `data_more_recent`
/// * `in_place` - Name of the in-place entry
/// * `result` - Value the criterion produced
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_criterion(kind: &str, in_place: &str, result: bool) {
    tracing::trace!(
        target: POLICY_TARGET,
        kind = %kind,
        in_place = %in_place,
        result = result,
        "criterion_evaluate"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_criterion(_kind: &str, _in_place: &str, _result: bool) {}

/// Traces the outcome of a whole policy and the defaults used to complete it.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_resolution(name: &str, outcome: &str, resolved: &str) {
    tracing::debug!(
        target: POLICY_TARGET,
        entry = %name,
        outcome = %outcome,
        resolved = %resolved,
        "policy_resolve"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_resolution(_name: &str, _outcome: &str, _resolved: &str) {}

/// Traces a textual policy that was parsed.
#[cfg(feature = "tracing")]
#[inline]
pub fn trace_policy_parsed(text: &str, hourshift: u64) {
    tracing::debug!(
        target: POLICY_TARGET,
        text = %text,
        hourshift = hourshift,
        "policy_parsed"
    );
}

/// No-op when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[inline]
pub fn trace_policy_parsed(_text: &str, _hourshift: u64) {}
