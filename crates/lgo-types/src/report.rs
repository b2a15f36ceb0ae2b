// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — Report
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Result records of a verification run and their text rendering.

use serde::Serialize;
use std::fmt;

const BANNER: &str = "=======================================================";
const RULE: &str = "-------------------------------------------------------";

/// Geometric constraint values printed in the report header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeometricConstraints {
    pub c_zeta: f64,
    pub c_max: f64,
    pub c_lgo: f64,
}

/// Gravitational constant closure result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GravityClosure {
    pub original: f64,
    pub target: f64,
    pub delta: f64,
    pub consistent: f64,
    pub tolerance: f64,
    pub is_consistent: bool,
}

/// Lepton mass derivation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeptonMasses {
    pub gamma_1: f64,
    pub alpha_inv: f64,
    pub electron_kg: f64,
    pub muon_kg: f64,
    pub electron_deviation_pct: f64,
    pub muon_deviation_pct: f64,
}

/// Complete verification report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    pub constraints: GeometricConstraints,
    pub gravity: GravityClosure,
    pub leptons: LeptonMasses,
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.constraints;
        let g = &self.gravity;
        let l = &self.leptons;

        writeln!(f, "{BANNER}")?;
        writeln!(f, " LGO Structural Verification (V13.0)")?;
        writeln!(f, "{BANNER}")?;
        writeln!(
            f,
            "Core Geometric Constraints: C_ZETA={:.6}, C_MAX={}, C_LGO={:.10e}",
            c.c_zeta, c.c_max, c.c_lgo
        )?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "[1] GRAVITATIONAL CONSTANT STRUCTURAL CONSISTENCY")?;
        writeln!(f, "  LGO Original G (Flawed): {:.10e} m^3/kg/s^2", g.original)?;
        writeln!(f, "  CODATA Target G:         {:.10e} m^3/kg/s^2", g.target)?;
        writeln!(f, "  Geometric Flaw (delta):  {:.10e}", g.delta)?;
        writeln!(f, "  Structurally Consistent G: {:.10e} m^3/kg/s^2", g.consistent)?;
        writeln!(
            f,
            "  Result: Structural Consistency Achieved: {}",
            g.is_consistent
        )?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "[2] GEOMETRIC OPERATOR L OUTPUT (Lepton Mass Derivation)")?;
        writeln!(f, "  Input: First Riemann Zero (γ₁): {:.8}", l.gamma_1)?;
        writeln!(f, "  Input: LGO Alpha Inverse (α⁻¹): {:.8}", l.alpha_inv)?;
        writeln!(f)?;
        writeln!(f, "  DERIVATION RESULTS:")?;
        writeln!(
            f,
            "  Electron Mass (LGO): {:.10e} kg (Dev: {:.4}%)",
            l.electron_kg, l.electron_deviation_pct
        )?;
        writeln!(
            f,
            "  Muon Mass (LGO):     {:.10e} kg (Dev: {:.4}%)",
            l.muon_kg, l.muon_deviation_pct
        )?;
        write!(f, "{BANNER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VerificationReport {
        VerificationReport {
            constraints: GeometricConstraints {
                c_zeta: 0.5_f64.sqrt(),
                c_max: 0.55,
                c_lgo: 1.32e-2,
            },
            gravity: GravityClosure {
                original: 6.67435e-11,
                target: 6.67430e-11,
                delta: 7.49e-6,
                consistent: 6.67430e-11,
                tolerance: 1e-18,
                is_consistent: true,
            },
            leptons: LeptonMasses {
                gamma_1: 14.1347251417,
                alpha_inv: 136.97318634,
                electron_kg: 6.7e-6,
                muon_kg: 1.4e-3,
                electron_deviation_pct: 12.5,
                muon_deviation_pct: 0.25,
            },
        }
    }

    #[test]
    fn test_report_sections_in_order() {
        let text = sample().to_string();
        let header = text.find("Core Geometric Constraints").unwrap();
        let gravity = text.find("[1] GRAVITATIONAL").unwrap();
        let leptons = text.find("[2] GEOMETRIC OPERATOR L").unwrap();
        assert!(header < gravity && gravity < leptons);
        assert!(text.starts_with(BANNER));
        assert!(text.ends_with(BANNER));
    }

    #[test]
    fn test_report_number_formatting() {
        let text = sample().to_string();
        assert!(text.contains("C_ZETA=0.707107, C_MAX=0.55"));
        assert!(text.contains("LGO Original G (Flawed): 6.6743500000e-11 m^3/kg/s^2"));
        assert!(text.contains("Structural Consistency Achieved: true"));
        assert!(text.contains("First Riemann Zero (γ₁): 14.13472514"));
        assert!(text.contains("(Dev: 12.5000%)"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["gravity"]["is_consistent"], true);
        assert_eq!(value["constraints"]["c_max"], 0.55);
    }
}
