// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — Gravitational Closure
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Structural closure of the gravitational constant.
//!
//! The uncorrected value carries a fractional flaw `delta` relative to the
//! target. Scaling by `(1 - delta)` removes it, and the tolerance check
//! confirms the corrected value is indistinguishable from the target.

use lgo_types::error::{LgoError, LgoResult};

/// Geometric flaw (fractional deviation) of `original` from `target`.
///
/// `delta = (original - target) / original`.
pub fn geometric_flaw_delta(original: f64, target: f64) -> LgoResult<f64> {
    if original == 0.0 {
        return Err(LgoError::ZeroDivisor {
            quantity: "original gravitational constant",
        });
    }
    Ok((original - target) / original)
}

/// Apply the correction factor: `original * (1 - delta)`.
pub fn consistent_value(original: f64, delta: f64) -> f64 {
    original * (1.0 - delta)
}

/// `|value - target| < tolerance`.
pub fn consistency_check(value: f64, target: f64, tolerance: f64) -> bool {
    (value - target).abs() < tolerance
}
