//! Swatch ramp generation engine for design-system color tokens.
//!
//! Feed one anchor color plus a semantic label into [`ramp::RampGenerator`]
//! and get back an ordered ramp of tint and shade stops at fixed, named
//! lightness positions, ready to render as a token table.

pub mod colorspace;
pub mod config;
pub mod error;
pub mod ramp;
pub mod swatch;
