//! Record model shared between the generator and its consumers: the anchor
//! input, individual swatch stops, and the assembled ramp.

use serde::Serialize;

/// User-supplied seed for one ramp: a hex color plus naming metadata.
///
/// Immutable once handed to the generator; the hex string is kept verbatim on
/// the user-defined stop of the resulting ramp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorColor {
    /// Color as a 3- or 6-digit RGB hex string, with or without a leading `#`.
    pub hex: String,
    /// Semantic label the ramp's token names derive from, e.g. "primary".
    pub semantic: String,
    /// Column (ramp) name, also the prefix for stop ids.
    pub column: String,
}

impl AnchorColor {
    /// Build an anchor from its three parts.
    #[must_use]
    pub fn new(hex: String, semantic: String, column: String) -> Self {
        Self {
            hex,
            semantic,
            column,
        }
    }
}

/// One generated cell of a ramp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwatchStop {
    /// Identifier unique within a palette: column name plus row index.
    pub id: String,
    /// Column (ramp) this stop belongs to.
    pub column: String,
    /// Row index into the lightness ladder, 0 at the darkest end.
    pub row: usize,
    /// Weight label copied from the ladder row, e.g. "500".
    pub weight: String,
    /// Canonical lightness the row approximates.
    pub target_lightness: f32,
    /// Display color. Derived stops carry canonical `#RRGGBB`; the
    /// user-defined stop carries the caller's input verbatim.
    pub hex: String,
    /// Semantic label copied from the anchor.
    pub semantic: String,
    /// Design-token name, `semantic-weight`.
    pub name: String,
    /// Whether the whole ramp is classified as near-grayscale.
    pub is_neutral: bool,
    /// True only for the stop seeded by the user-picked anchor.
    pub is_user_defined: bool,
}

/// Fully generated ramp: exactly one stop per ladder row, exactly one of
/// them user-defined.
///
/// Serializes as the bare stop array so consumers can render it as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ramp {
    stops: Vec<SwatchStop>,
    #[serde(skip)]
    user_row: usize,
}

impl Ramp {
    /// Assemble a ramp from generator output. `user_row` is the row holding
    /// the user-defined stop.
    pub(crate) fn new(stops: Vec<SwatchStop>, user_row: usize) -> Self {
        debug_assert!(user_row < stops.len());
        debug_assert!(stops[user_row].is_user_defined);
        Self { stops, user_row }
    }

    /// All stops in row order.
    #[must_use]
    pub fn stops(&self) -> &[SwatchStop] {
        &self.stops
    }

    /// Number of stops, i.e. the ladder's row count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the ramp holds no stops. Never true for generator output,
    /// since an empty ladder is rejected at construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Stop at `row`, if within the ladder.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&SwatchStop> {
        self.stops.get(row)
    }

    /// Row index of the user-defined stop.
    #[must_use]
    pub fn user_row(&self) -> usize {
        self.user_row
    }

    /// The stop seeded by the anchor color.
    #[must_use]
    pub fn anchor_stop(&self) -> &SwatchStop {
        &self.stops[self.user_row]
    }
}
