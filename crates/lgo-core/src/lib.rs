// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — LGO Core
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
//! Analytical constant calculator.
//!
//! - `closure`: geometric flaw, corrected G and the tolerance check
//! - `masses`: primary (electron) to secondary (muon) derivation chain
//! - `deviation`: percent deviation against reference values
//! - `verification`: runs everything and assembles the report

pub mod closure;
pub mod deviation;
pub mod masses;
pub mod verification;
