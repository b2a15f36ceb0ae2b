// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — LGO Types
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
pub mod config;
pub mod constants;
pub mod error;
pub mod report;
