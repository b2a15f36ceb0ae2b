// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — Constants
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use std::f64::consts::{FRAC_1_SQRT_2, PI};

// ── Geometric constraints ────────────────────────────────────────────

/// Global scaling constant, 1/√2.
pub const C_ZETA: f64 = FRAC_1_SQRT_2;

/// Prime volatility factor (empirical structural input).
pub const C_MAX: f64 = 0.55;

/// Structural order constant: C_ZETA / (C_MAX · π⁴).
pub const C_LGO: f64 = C_ZETA / (C_MAX * PI * PI * PI * PI);

// ── Gravitational closure ────────────────────────────────────────────

/// CODATA gravitational constant (m^3 kg^-1 s^-2). Closure target.
pub const G_CODATA: f64 = 6.67430e-11;

/// Uncorrected G from the operator spectrum (m^3 kg^-1 s^-2).
/// Carries the geometric flaw removed by the closure step.
pub const G_LGO_ORIGINAL: f64 = 6.67435e-11;

/// Absolute tolerance for the closure check.
pub const DEFAULT_CONSISTENCY_TOLERANCE: f64 = 1e-18;

// ── Operator spectrum ────────────────────────────────────────────────

/// First non-trivial Riemann zero, γ₁.
pub const GAMMA_1: f64 = 14.1347251417;

/// Inverse fine-structure constant from the operator spectrum.
pub const ALPHA_INV_LGO: f64 = 136.97318634;

/// Fine-structure constant, 1/ALPHA_INV_LGO.
pub const ALPHA_LGO: f64 = 1.0 / ALPHA_INV_LGO;

/// CODATA Planck mass (kg), used as the scale closure.
pub const PLANCK_MASS_CODATA: f64 = 2.176434e-8;

/// Structural muon/electron mass ratio.
pub const MUON_ELECTRON_STRUCTURAL_RATIO: f64 = 206.64222667;

// ── Reference masses ─────────────────────────────────────────────────

/// CODATA electron mass (kg)
pub const M_ELECTRON_CODATA: f64 = 9.1093837015e-31;

/// CODATA muon mass (kg)
pub const M_MUON_CODATA: f64 = 1.883531627e-28;
