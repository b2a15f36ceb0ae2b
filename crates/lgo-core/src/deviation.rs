// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — Deviation
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use lgo_types::error::{LgoError, LgoResult};

/// Percent deviation of `value` from `reference`.
///
/// `100 * |value - reference| / |reference|`.
pub fn percent_deviation(value: f64, reference: f64) -> LgoResult<f64> {
    if reference == 0.0 {
        return Err(LgoError::ZeroDivisor {
            quantity: "reference value",
        });
    }
    Ok(100.0 * (value - reference).abs() / reference.abs())
}
