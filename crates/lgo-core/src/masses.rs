// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — Lepton Mass Derivation
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Lepton masses from the geometric operator spectrum.
//!
//! The muon mass is defined in terms of the derived electron mass, so the
//! chain is ordered: `derive_secondary_mass` only accepts a [`PrimaryMass`],
//! and only [`derive_primary_mass`] produces one.

use std::f64::consts::PI;

/// Primary (electron) mass [kg] produced by [`derive_primary_mass`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PrimaryMass(f64);

impl PrimaryMass {
    pub fn kg(self) -> f64 {
        self.0
    }
}

/// Primary mass from the first spectral zero.
///
/// `m = (1 / gamma) * (scale / (π * alpha))`.
/// A zero `gamma` yields a zero mass rather than an error.
pub fn derive_primary_mass(gamma: f64, alpha: f64, scale: f64) -> PrimaryMass {
    if gamma == 0.0 {
        return PrimaryMass(0.0);
    }
    PrimaryMass((1.0 / gamma) * (scale / (PI * alpha)))
}

/// Secondary (muon) mass: `primary * ratio`.
pub fn derive_secondary_mass(primary: PrimaryMass, ratio: f64) -> f64 {
    primary.0 * ratio
}
