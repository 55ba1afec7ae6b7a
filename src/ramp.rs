//! Ramp generation pipeline: anchor placement, tint/shade interpolation, stop
//! population, and the lightness-normalization pass.

use indexmap::IndexMap;
use palette::Srgb;
use tracing::{debug, trace};

use crate::{
    colorspace::{self, BlendSpace},
    config::RampSettings,
    error::{RampError, SettingsError},
    swatch::{AnchorColor, Ramp, SwatchStop},
};

/// Swatch ramp generator bound to one immutable settings set.
///
/// Generation is pure and synchronous: no I/O, no shared mutable state. A
/// generator can be shared freely across threads, and several generators with
/// different settings can coexist.
#[derive(Debug, Clone)]
pub struct RampGenerator {
    settings: RampSettings,
}

impl RampGenerator {
    /// Build a generator, validating the ladder invariants up front.
    pub fn new(settings: RampSettings) -> Result<Self, SettingsError> {
        if settings.targets.is_empty() {
            return Err(SettingsError::EmptyLadder);
        }
        for (row, pair) in settings.targets.windows(2).enumerate() {
            if pair[1].l <= pair[0].l {
                return Err(SettingsError::LadderNotAscending {
                    row: row + 1,
                    prev: pair[0].l,
                    next: pair[1].l,
                });
            }
        }
        Ok(Self { settings })
    }

    /// Settings this generator was built with.
    #[must_use]
    pub fn settings(&self) -> &RampSettings {
        &self.settings
    }

    /// Generate the full ramp for one anchor.
    ///
    /// Single-pass pipeline: place the anchor on the ladder, render the
    /// tint/shade interpolations, populate the stop records, normalize
    /// lightness, return. Fails only on a malformed hex string.
    pub fn generate(&self, anchor: &AnchorColor) -> Result<Ramp, RampError> {
        let rgb = colorspace::parse_hex(&anchor.hex)?;
        let anchor_lightness = colorspace::lightness(rgb);
        let neutral = colorspace::chroma(rgb) < self.settings.neutral_threshold;
        let index = self.place_anchor(anchor_lightness);
        trace!(
            column = %anchor.column,
            lightness = anchor_lightness,
            row = index,
            "placed anchor on the lightness ladder"
        );

        let cells = self.render_tints_and_shades(rgb, index);
        let ramp = self.populate_stops(anchor, &cells, index, neutral);
        let ramp = self.normalize(ramp, &cells);
        debug!(
            column = %anchor.column,
            semantic = %anchor.semantic,
            row = index,
            neutral,
            "generated ramp"
        );
        Ok(ramp)
    }

    /// Generate one ramp per anchor, keyed by column name in input order.
    ///
    /// Ramps are independent of each other; a later anchor reusing a column
    /// name replaces the earlier entry.
    pub fn generate_palette(
        &self,
        anchors: &[AnchorColor],
    ) -> Result<IndexMap<String, Ramp>, RampError> {
        let mut palette = IndexMap::with_capacity(anchors.len());
        for anchor in anchors {
            palette.insert(anchor.column.clone(), self.generate(anchor)?);
        }
        Ok(palette)
    }

    /// Row whose target lightness is nearest to `lightness`.
    ///
    /// Strict comparison while scanning in ladder order, so an exact tie goes
    /// to the earlier (smaller) target.
    fn place_anchor(&self, lightness: f32) -> usize {
        let mut best_row = 0;
        let mut best_distance = f32::INFINITY;
        for (row, target) in self.settings.targets.iter().enumerate() {
            let distance = (target.l - lightness).abs();
            if distance < best_distance {
                best_distance = distance;
                best_row = row;
            }
        }
        best_row
    }

    /// One color per ladder row: the white-to-anchor tint run up to `index`,
    /// then the anchor-to-black shade run below it.
    fn render_tints_and_shades(&self, anchor: Srgb<u8>, index: usize) -> Vec<Srgb<u8>> {
        let rows = self.settings.rows();
        let white = Srgb::new(255, 255, 255);
        let black = Srgb::new(0, 0, 0);

        let mut cells = colorspace::scale(white, anchor, self.settings.tint_space, index);
        if cells.len() >= 2 {
            // Densify near white: sub-interpolate the midpoint of the two
            // lightest tints and slot it in as the new second row.
            let mid = colorspace::scale(cells[1], cells[0], self.settings.tint_space, 3)[1];
            cells.insert(1, mid);
        }
        if cells.len() == index {
            // Degenerate tint runs (zero or one row) stop short of the
            // anchor; append it so the slot at `index` is occupied.
            cells.push(anchor);
        }

        let mut shades = colorspace::scale(anchor, black, self.settings.shade_space, rows - index);
        if !shades.is_empty() {
            // The first shade duplicates the anchor recorded above.
            shades.remove(0);
        }
        cells.extend(shades);

        debug_assert_eq!(cells.len(), rows);
        cells
    }

    /// Build one independently-owned stop record per row. Row `index` keeps
    /// the caller's hex string verbatim and is flagged user-defined.
    fn populate_stops(
        &self,
        anchor: &AnchorColor,
        cells: &[Srgb<u8>],
        index: usize,
        neutral: bool,
    ) -> Ramp {
        let stops = cells
            .iter()
            .enumerate()
            .map(|(row, &cell)| {
                let target = &self.settings.targets[row];
                let hex = if row == index {
                    anchor.hex.clone()
                } else {
                    colorspace::format_hex(cell)
                };
                SwatchStop {
                    id: format!("{}{row}", anchor.column),
                    column: anchor.column.clone(),
                    row,
                    weight: target.weight.clone(),
                    target_lightness: target.l,
                    hex,
                    semantic: anchor.semantic.clone(),
                    name: format!("{}-{}", anchor.semantic, target.weight),
                    is_neutral: neutral,
                    is_user_defined: row == index,
                }
            })
            .collect();
        Ramp::new(stops, index)
    }

    /// Snap every non-user stop toward its effective target in CIE Lab,
    /// rebuilding the record with only `hex` replaced.
    ///
    /// `cells` holds the parsed interpolation output, so derived stops are
    /// snapped without re-parsing their own formatted hex.
    fn normalize(&self, ramp: Ramp, cells: &[Srgb<u8>]) -> Ramp {
        let user_row = ramp.user_row();
        let stops = ramp
            .stops()
            .iter()
            .map(|stop| {
                if stop.is_user_defined {
                    return stop.clone();
                }
                let target = self
                    .settings
                    .effective_target(stop.target_lightness, stop.is_neutral);
                let snapped = colorspace::snap_lightness(cells[stop.row], BlendSpace::Lab, target);
                trace!(id = %stop.id, target, "normalized stop lightness");
                SwatchStop {
                    hex: colorspace::format_hex(snapped),
                    ..stop.clone()
                }
            })
            .collect();
        Ramp::new(stops, user_row)
    }
}
