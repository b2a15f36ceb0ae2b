// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — Verification Runner
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Full verification pass: gravitational closure, then the lepton mass chain.

use lgo_types::config::VerificationConfig;
use lgo_types::constants::{C_LGO, C_MAX, C_ZETA};
use lgo_types::error::LgoResult;
use lgo_types::report::{GeometricConstraints, GravityClosure, LeptonMasses, VerificationReport};
use tracing::debug;

use crate::closure::{consistency_check, consistent_value, geometric_flaw_delta};
use crate::deviation::percent_deviation;
use crate::masses::{derive_primary_mass, derive_secondary_mass};

/// Run both derivations with `config` and collect the results.
///
/// Fails only on a zero divisor (zero original G or zero reference mass).
pub fn run_verification(config: &VerificationConfig) -> LgoResult<VerificationReport> {
    let gravity = close_gravity(config)?;
    let leptons = derive_leptons(config)?;
    Ok(VerificationReport {
        constraints: GeometricConstraints {
            c_zeta: C_ZETA,
            c_max: C_MAX,
            c_lgo: C_LGO,
        },
        gravity,
        leptons,
    })
}

fn close_gravity(config: &VerificationConfig) -> LgoResult<GravityClosure> {
    let g = &config.gravity;
    let delta = geometric_flaw_delta(g.original, g.target)?;
    let consistent = consistent_value(g.original, delta);
    let is_consistent = consistency_check(consistent, g.target, g.tolerance);
    debug!(delta, consistent, is_consistent, "gravitational closure");

    Ok(GravityClosure {
        original: g.original,
        target: g.target,
        delta,
        consistent,
        tolerance: g.tolerance,
        is_consistent,
    })
}

fn derive_leptons(config: &VerificationConfig) -> LgoResult<LeptonMasses> {
    let s = &config.spectrum;
    let electron = derive_primary_mass(s.gamma_1, s.alpha(), s.planck_mass);
    let muon_kg = derive_secondary_mass(electron, s.structural_ratio);
    let electron_kg = electron.kg();
    debug!(electron_kg, muon_kg, "lepton mass chain");

    Ok(LeptonMasses {
        gamma_1: s.gamma_1,
        alpha_inv: s.alpha_inv,
        electron_kg,
        muon_kg,
        electron_deviation_pct: percent_deviation(electron_kg, config.reference.electron)?,
        muon_deviation_pct: percent_deviation(muon_kg, config.reference.muon)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lgo_types::constants::{G_CODATA, G_LGO_ORIGINAL, MUON_ELECTRON_STRUCTURAL_RATIO};
    use lgo_types::error::LgoError;

    #[test]
    fn test_default_run_is_consistent() {
        let report = run_verification(&VerificationConfig::default()).expect("default run");
        assert_eq!(report.gravity.original, G_LGO_ORIGINAL);
        assert_eq!(report.gravity.target, G_CODATA);
        assert!(report.gravity.is_consistent);
        assert!((report.gravity.consistent - G_CODATA).abs() < 1e-18);
    }

    #[test]
    fn test_default_run_mass_chain() {
        let report = run_verification(&VerificationConfig::default()).expect("default run");
        let l = &report.leptons;
        assert!(l.electron_kg.is_finite() && l.electron_kg > 0.0);
        assert_eq!(l.muon_kg, l.electron_kg * MUON_ELECTRON_STRUCTURAL_RATIO);
        assert!(l.electron_deviation_pct.is_finite());
        assert!(l.muon_deviation_pct.is_finite());
    }

    #[test]
    fn test_constraints_header() {
        let report = run_verification(&VerificationConfig::default()).expect("default run");
        assert_eq!(report.constraints.c_max, 0.55);
        assert!((report.constraints.c_zeta - 0.5_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_default_report_text() {
        let report = run_verification(&VerificationConfig::default()).expect("default run");
        let text = report.to_string();
        assert!(text.contains("CODATA Target G:         6.6743000000e-11 m^3/kg/s^2"));
        assert!(text.contains("Structural Consistency Achieved: true"));
        assert!(text.contains("LGO Alpha Inverse (α⁻¹): 136.97318634"));
    }

    #[test]
    fn test_zero_original_g_propagates() {
        let mut cfg = VerificationConfig::default();
        cfg.gravity.original = 0.0;
        assert!(matches!(
            run_verification(&cfg),
            Err(LgoError::ZeroDivisor { .. })
        ));
    }

    #[test]
    fn test_zero_gamma_reports_zero_masses() {
        let mut cfg = VerificationConfig::default();
        cfg.spectrum.gamma_1 = 0.0;
        let report = run_verification(&cfg).expect("zero gamma is not an error");
        assert_eq!(report.leptons.electron_kg, 0.0);
        assert_eq!(report.leptons.muon_kg, 0.0);
        assert!((report.leptons.electron_deviation_pct - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_closure_recovers_arbitrary_target() {
        let mut cfg = VerificationConfig::default();
        cfg.gravity.target = 2.0;
        cfg.gravity.original = 1.0;
        cfg.gravity.tolerance = 1e-12;
        let report = run_verification(&cfg).expect("nonzero original");
        assert_eq!(report.gravity.delta, -1.0);
        assert!(report.gravity.is_consistent);
    }
}
