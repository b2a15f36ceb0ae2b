// ─────────────────────────────────────────────────────────────────────
// LGO Structural Verification — Error
// © 2025–2026 ras2045 and The Geometric Hypothesis Collective.
// License: MIT
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LgoError {
    #[error("Zero divisor: {quantity} cannot be zero")]
    ZeroDivisor { quantity: &'static str },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LgoResult<T> = Result<T, LgoError>;
