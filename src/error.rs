//! Error types surfaced at the engine boundary.

use palette::rgb::FromHexError;
use thiserror::Error;

/// Errors that can occur while turning caller input into a ramp.
#[derive(Debug, Error)]
pub enum RampError {
    /// The anchor color is not a valid 3- or 6-digit RGB hex string.
    #[error("invalid hex color {input:?}")]
    InvalidHex {
        /// Offending input, verbatim as received.
        input: String,
        /// Parser failure reported by the color backend.
        #[source]
        source: FromHexError,
    },
}

/// Errors raised when generator settings violate the ladder invariants.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The lightness ladder contains no rows.
    #[error("lightness ladder is empty")]
    EmptyLadder,
    /// Ladder rows must carry strictly increasing lightness targets.
    #[error("ladder row {row} does not increase: {prev} followed by {next}")]
    LadderNotAscending {
        /// Index of the offending row.
        row: usize,
        /// Target of the preceding row.
        prev: f32,
        /// Target found at `row`.
        next: f32,
    },
}
