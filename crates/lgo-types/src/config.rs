// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — Config
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    ALPHA_INV_LGO, DEFAULT_CONSISTENCY_TOLERANCE, GAMMA_1, G_CODATA, G_LGO_ORIGINAL,
    MUON_ELECTRON_STRUCTURAL_RATIO, M_ELECTRON_CODATA, M_MUON_CODATA, PLANCK_MASS_CODATA,
};
use crate::error::{LgoError, LgoResult};

/// Inputs for one verification run.
/// `Default` reproduces the built-in V13.0 values; any field missing from
/// a JSON file falls back to the same value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationConfig {
    #[serde(default)]
    pub gravity: GravityInputs,
    #[serde(default)]
    pub spectrum: SpectrumInputs,
    #[serde(default)]
    pub reference: ReferenceMasses,
}

/// Gravitational closure inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GravityInputs {
    /// Uncorrected G [m^3 kg^-1 s^-2] (default: 6.67435e-11)
    #[serde(default = "default_g_original")]
    pub original: f64,
    /// Closure target G [m^3 kg^-1 s^-2] (default: 6.67430e-11)
    #[serde(default = "default_g_target")]
    pub target: f64,
    /// Absolute tolerance of the closure check (default: 1e-18)
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

/// Operator-spectrum inputs for the lepton mass chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumInputs {
    #[serde(default = "default_gamma_1")]
    pub gamma_1: f64,
    #[serde(default = "default_alpha_inv")]
    pub alpha_inv: f64,
    /// Scale closure [kg]
    #[serde(default = "default_planck_mass")]
    pub planck_mass: f64,
    /// Muon/electron ratio applied to the primary mass
    #[serde(default = "default_structural_ratio")]
    pub structural_ratio: f64,
}

/// Reference masses [kg] the derived values are compared against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMasses {
    #[serde(default = "default_electron")]
    pub electron: f64,
    #[serde(default = "default_muon")]
    pub muon: f64,
}

fn default_g_original() -> f64 {
    G_LGO_ORIGINAL
}
fn default_g_target() -> f64 {
    G_CODATA
}
fn default_tolerance() -> f64 {
    DEFAULT_CONSISTENCY_TOLERANCE
}
fn default_gamma_1() -> f64 {
    GAMMA_1
}
fn default_alpha_inv() -> f64 {
    ALPHA_INV_LGO
}
fn default_planck_mass() -> f64 {
    PLANCK_MASS_CODATA
}
fn default_structural_ratio() -> f64 {
    MUON_ELECTRON_STRUCTURAL_RATIO
}
fn default_electron() -> f64 {
    M_ELECTRON_CODATA
}
fn default_muon() -> f64 {
    M_MUON_CODATA
}

impl Default for GravityInputs {
    fn default() -> Self {
        GravityInputs {
            original: default_g_original(),
            target: default_g_target(),
            tolerance: default_tolerance(),
        }
    }
}

impl Default for SpectrumInputs {
    fn default() -> Self {
        SpectrumInputs {
            gamma_1: default_gamma_1(),
            alpha_inv: default_alpha_inv(),
            planck_mass: default_planck_mass(),
            structural_ratio: default_structural_ratio(),
        }
    }
}

impl Default for ReferenceMasses {
    fn default() -> Self {
        ReferenceMasses {
            electron: default_electron(),
            muon: default_muon(),
        }
    }
}

impl SpectrumInputs {
    /// Fine-structure constant, 1/alpha_inv.
    pub fn alpha(&self) -> f64 {
        1.0 / self.alpha_inv
    }
}

impl VerificationConfig {
    /// Load from a JSON file and validate it.
    pub fn from_file(path: &str) -> LgoResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject inputs that cannot produce a meaningful report.
    ///
    /// Zero divisors are not rejected here; they surface from the formulas
    /// themselves so the two degenerate-input policies stay intact.
    pub fn validate(&self) -> LgoResult<()> {
        let fields = [
            ("gravity.original", self.gravity.original),
            ("gravity.target", self.gravity.target),
            ("gravity.tolerance", self.gravity.tolerance),
            ("spectrum.gamma_1", self.spectrum.gamma_1),
            ("spectrum.alpha_inv", self.spectrum.alpha_inv),
            ("spectrum.planck_mass", self.spectrum.planck_mass),
            ("spectrum.structural_ratio", self.spectrum.structural_ratio),
            ("reference.electron", self.reference.electron),
            ("reference.muon", self.reference.muon),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(LgoError::ConfigError(format!("{name} must be finite")));
        }
        if self.gravity.tolerance <= 0.0 {
            return Err(LgoError::ConfigError(
                "gravity.tolerance must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
