//! Perceptual color-space adapter built on the `palette` crate.
//!
//! The ramp generator only ever talks to colors through this module: hex
//! parsing and formatting, CIE-Lab/LCH and OKLab conversions, perceptual
//! interpolation between two colors, and the lossy lightness-snapping
//! primitive the normalization pass is built on.

use palette::{Clamp, FromColor, Lab, Lch, Mix, Oklab, Srgb};
use serde::Deserialize;

use crate::error::RampError;

/// Number of times [`with_lightness`] is reapplied by [`snap_lightness`].
///
/// Each application re-quantizes to 8-bit sRGB, so a single pass rarely lands
/// on the requested lightness exactly; ten passes bring the residual below
/// anything visible. Exactness is not part of the contract.
pub const SNAP_ITERATIONS: usize = 10;

/// Perceptual spaces available for blending and lightness adjustment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendSpace {
    /// OKLab. Keeps blue tints from drifting toward purple, so it is the
    /// default for both tints and shades.
    #[default]
    Oklab,
    /// CIE L*a*b* (D65).
    Lab,
    /// CIE LCH, the cylindrical form of Lab.
    Lch,
}

/// Parse a 3- or 6-digit RGB hex string, with or without a leading `#`.
pub fn parse_hex(input: &str) -> Result<Srgb<u8>, RampError> {
    input.parse::<Srgb<u8>>().map_err(|source| RampError::InvalidHex {
        input: input.to_owned(),
        source,
    })
}

/// Render a color as an uppercase `#RRGGBB` hex string.
#[must_use]
pub fn format_hex(rgb: Srgb<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

/// Convert to CIE L*a*b* (D65).
#[must_use]
pub fn to_lab(rgb: Srgb<u8>) -> Lab {
    Lab::from_color(rgb.into_format::<f32>())
}

/// Convert to CIE LCH (D65).
#[must_use]
pub fn to_lch(rgb: Srgb<u8>) -> Lch {
    Lch::from_color(rgb.into_format::<f32>())
}

/// Convert to OKLab.
#[must_use]
pub fn to_oklab(rgb: Srgb<u8>) -> Oklab {
    Oklab::from_color(rgb.into_format::<f32>())
}

/// CIE L* lightness (0 = black, 100 = white), the scale ladder targets use.
#[must_use]
pub fn lightness(rgb: Srgb<u8>) -> f32 {
    to_lab(rgb).l
}

/// LCH chroma magnitude, the colorfulness measure behind neutrality
/// classification. Grays sit at zero.
#[must_use]
pub fn chroma(rgb: Srgb<u8>) -> f32 {
    to_lch(rgb).chroma
}

/// Produce `steps` evenly spaced colors from `from` to `to` inclusive,
/// blended in `space` and re-quantized to 8-bit per step.
///
/// `steps == 0` yields nothing and `steps == 1` yields the start color alone;
/// from two steps up both endpoints are included.
#[must_use]
pub fn scale(from: Srgb<u8>, to: Srgb<u8>, space: BlendSpace, steps: usize) -> Vec<Srgb<u8>> {
    match steps {
        0 => Vec::new(),
        1 => vec![from],
        _ => (0..steps)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let factor = i as f32 / (steps - 1) as f32;
                blend(from, to, space, factor)
            })
            .collect(),
    }
}

/// Force the lightness channel of `rgb` to `target_l` in `space`, keeping
/// chroma and hue, then gamut-clamp and re-quantize to 8-bit.
///
/// Lossy: quantization and space conversion rounding mean the result rarely
/// measures exactly `target_l`. Callers that care use [`snap_lightness`].
///
/// `target_l` is on the space's own lightness scale: 0–100 for Lab and LCH,
/// 0–1 for OKLab.
#[must_use]
pub fn with_lightness(rgb: Srgb<u8>, space: BlendSpace, target_l: f32) -> Srgb<u8> {
    let source = rgb.into_format::<f32>();
    let adjusted: Srgb = match space {
        BlendSpace::Oklab => {
            let mut color = Oklab::from_color(source);
            color.l = target_l;
            Srgb::from_color(color)
        }
        BlendSpace::Lab => {
            let mut color = Lab::from_color(source);
            color.l = target_l;
            Srgb::from_color(color)
        }
        BlendSpace::Lch => {
            let mut color = Lch::from_color(source);
            color.l = target_l;
            Srgb::from_color(color)
        }
    };
    adjusted.clamp().into_format()
}

/// Apply [`with_lightness`] repeatedly ([`SNAP_ITERATIONS`] times) so the
/// measured lightness converges toward `target_l`.
///
/// The loop is deliberately explicit: convergence is bounded approximation,
/// not an exact setter, and tests assert tolerance rather than equality.
#[must_use]
pub fn snap_lightness(rgb: Srgb<u8>, space: BlendSpace, target_l: f32) -> Srgb<u8> {
    let mut snapped = rgb;
    for _ in 0..SNAP_ITERATIONS {
        snapped = with_lightness(snapped, space, target_l);
    }
    snapped
}

/// Mix `from` and `to` at `factor` in the requested space.
fn blend(from: Srgb<u8>, to: Srgb<u8>, space: BlendSpace, factor: f32) -> Srgb<u8> {
    let (start, end) = (from.into_format::<f32>(), to.into_format::<f32>());
    let mixed: Srgb = match space {
        BlendSpace::Oklab => {
            Srgb::from_color(Oklab::from_color(start).mix(Oklab::from_color(end), factor))
        }
        BlendSpace::Lab => {
            Srgb::from_color(Lab::from_color(start).mix(Lab::from_color(end), factor))
        }
        BlendSpace::Lch => {
            Srgb::from_color(Lch::from_color(start).mix(Lch::from_color(end), factor))
        }
    };
    mixed.clamp().into_format()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white() -> Srgb<u8> {
        Srgb::new(255, 255, 255)
    }

    fn black() -> Srgb<u8> {
        Srgb::new(0, 0, 0)
    }

    #[test]
    fn test_parse_hex_six_digit() {
        let rgb = parse_hex("#0274B6").unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (0x02, 0x74, 0xB6));
    }

    #[test]
    fn test_parse_hex_without_hash() {
        let rgb = parse_hex("0274B6").unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (0x02, 0x74, 0xB6));
    }

    #[test]
    fn test_parse_hex_shorthand_expands() {
        let rgb = parse_hex("#abc").unwrap();
        assert_eq!((rgb.red, rgb.green, rgb.blue), (0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn test_parse_hex_rejects_invalid() {
        for input in ["", "#12", "#GGGGGG", "not-a-color", "#12345"] {
            match parse_hex(input) {
                Err(RampError::InvalidHex { input: reported, .. }) => {
                    assert_eq!(reported, input);
                }
                Ok(other) => panic!("accepted {input:?} as {other:?}"),
            }
        }
    }

    #[test]
    fn test_format_hex_round_trip() {
        assert_eq!(format_hex(parse_hex("#0274B6").unwrap()), "#0274B6");
        assert_eq!(format_hex(parse_hex("fff").unwrap()), "#FFFFFF");
    }

    #[test]
    fn test_lightness_extremes() {
        assert!(lightness(white()) > 99.0);
        assert!(lightness(black()) < 1.0);
    }

    #[test]
    fn test_lightness_of_known_color() {
        let rgb = parse_hex("#0274B6").unwrap();
        let l = lightness(rgb);
        assert!((l - 46.8).abs() < 0.5, "measured L* {l}");
    }

    #[test]
    fn test_chroma_separates_gray_from_brand_color() {
        assert!(chroma(parse_hex("#6F6F6F").unwrap()) < 1.0);
        assert!(chroma(parse_hex("#0274B6").unwrap()) > 30.0);
    }

    #[test]
    fn test_scale_step_counts() {
        let blue = parse_hex("#0274B6").unwrap();
        assert!(scale(white(), blue, BlendSpace::Oklab, 0).is_empty());
        assert_eq!(scale(white(), blue, BlendSpace::Oklab, 1), vec![white()]);
        assert_eq!(scale(white(), blue, BlendSpace::Oklab, 7).len(), 7);
    }

    #[test]
    fn test_scale_includes_both_endpoints() {
        let blue = parse_hex("#0274B6").unwrap();
        for space in [BlendSpace::Oklab, BlendSpace::Lab, BlendSpace::Lch] {
            let steps = scale(white(), blue, space, 5);
            assert_eq!(steps.first(), Some(&white()));
            assert_eq!(steps.last(), Some(&blue));
        }
    }

    #[test]
    fn test_scale_grays_descend_in_lightness() {
        let steps = scale(white(), black(), BlendSpace::Oklab, 6);
        for pair in steps.windows(2) {
            assert!(lightness(pair[0]) > lightness(pair[1]));
        }
    }

    #[test]
    fn test_with_lightness_moves_gray_to_target() {
        let moved = with_lightness(parse_hex("#6F6F6F").unwrap(), BlendSpace::Lab, 50.0);
        assert!((lightness(moved) - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_snap_lightness_converges_within_tolerance() {
        let blue = parse_hex("#0274B6").unwrap();
        for target in [7.0_f32, 13.5, 30.0, 57.5, 80.0] {
            let snapped = snap_lightness(blue, BlendSpace::Lab, target);
            let residual = (lightness(snapped) - target).abs();
            assert!(residual < 1.0, "target {target}: residual {residual}");
        }
    }

    #[test]
    fn test_snap_lightness_preserves_hue_family() {
        let blue = parse_hex("#0274B6").unwrap();
        let snapped = snap_lightness(blue, BlendSpace::Lab, 30.0);
        // Still a blue: the b* axis stays firmly negative.
        assert!(to_lab(snapped).b < -10.0);
    }
}
