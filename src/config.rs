//! Generator settings: the lightness ladder, neutrality threshold, correction
//! tables, and blend-space choices.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::colorspace::BlendSpace;

/// Default location on disk where [`RampSettings::load`] looks for overrides.
const DEFAULT_CONFIG_PATH: &str = "config/ramp.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "PALETTIZER_CONFIG_PATH";
/// LCH chroma below which an anchor is considered a gray.
///
/// `#6F6F6F` and friends measure near zero while even muted brand colors sit
/// well above 30, so the cutoff is not sensitive.
const DEFAULT_NEUTRAL_THRESHOLD: f32 = 10.0;

/// One row of the lightness ladder.
#[derive(Debug, Clone, PartialEq)]
pub struct LightnessTarget {
    /// Canonical CIE L* value the row approximates.
    pub l: f32,
    /// Human-facing weight label for the row, e.g. "500".
    pub weight: String,
}

/// Hand-tuned lightness override applied during normalization.
///
/// The values are empirically tuned and carried as data on purpose; there is
/// no formula behind them.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    /// Nominal ladder target the override applies to.
    pub target: f32,
    /// Replacement value the stop is snapped toward instead.
    pub corrected: f32,
}

#[derive(Debug, Clone, PartialEq)]
/// Immutable tuning data injected into a ramp generator at construction.
pub struct RampSettings {
    /// Ordered lightness ladder, one row per generated stop, strictly
    /// ascending (validated when a generator is built).
    pub targets: Vec<LightnessTarget>,
    /// LCH chroma below which an anchor classifies its whole ramp as neutral.
    pub neutral_threshold: f32,
    /// Correction overrides for chromatic (non-neutral) ramps.
    pub chromatic_corrections: Vec<Correction>,
    /// Correction overrides for neutral ramps.
    pub neutral_corrections: Vec<Correction>,
    /// Space used when blending from white toward the anchor.
    pub tint_space: BlendSpace,
    /// Space used when blending from the anchor toward black.
    pub shade_space: BlendSpace,
}

impl RampSettings {
    /// Load settings from disk, falling back to the built-in tables.
    ///
    /// The file is optional tuning input: any section it omits keeps its
    /// default value.
    #[must_use]
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawSettings>(&contents) {
                Ok(raw) => {
                    let settings: Self = raw.into();
                    info!(
                        path = %path.display(),
                        rows = settings.targets.len(),
                        "loaded ramp settings from config"
                    );
                    settings
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Number of ladder rows, i.e. stops per generated ramp.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.targets.len()
    }

    /// Effective normalization target for a nominal ladder value.
    ///
    /// Looks the value up in the neutral or chromatic correction table; rows
    /// without an override snap to their nominal target. Ladder and table
    /// values are copied verbatim from the same literals, so the exact
    /// comparison is intentional.
    #[must_use]
    pub fn effective_target(&self, nominal: f32, neutral: bool) -> f32 {
        let table = if neutral {
            &self.neutral_corrections
        } else {
            &self.chromatic_corrections
        };
        table
            .iter()
            .find(|correction| correction.target == nominal)
            .map_or(nominal, |correction| correction.corrected)
    }
}

impl Default for RampSettings {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            neutral_threshold: DEFAULT_NEUTRAL_THRESHOLD,
            chromatic_corrections: default_chromatic_corrections(),
            neutral_corrections: default_neutral_corrections(),
            tint_space: BlendSpace::Oklab,
            shade_space: BlendSpace::Oklab,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the settings file located at [`DEFAULT_CONFIG_PATH`].
struct RawSettings {
    targets: Option<Vec<RawTarget>>,
    neutral_threshold: Option<f32>,
    chromatic_corrections: Option<Vec<RawCorrection>>,
    neutral_corrections: Option<Vec<RawCorrection>>,
    tint_space: Option<BlendSpace>,
    shade_space: Option<BlendSpace>,
}

impl From<RawSettings> for RampSettings {
    fn from(value: RawSettings) -> Self {
        let defaults = Self::default();
        Self {
            targets: value
                .targets
                .map_or(defaults.targets, |targets| {
                    targets.into_iter().map(Into::into).collect()
                }),
            neutral_threshold: value.neutral_threshold.unwrap_or(defaults.neutral_threshold),
            chromatic_corrections: value
                .chromatic_corrections
                .map_or(defaults.chromatic_corrections, |corrections| {
                    corrections.into_iter().map(Into::into).collect()
                }),
            neutral_corrections: value
                .neutral_corrections
                .map_or(defaults.neutral_corrections, |corrections| {
                    corrections.into_iter().map(Into::into).collect()
                }),
            tint_space: value.tint_space.unwrap_or(defaults.tint_space),
            shade_space: value.shade_space.unwrap_or(defaults.shade_space),
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of one ladder row.
struct RawTarget {
    l: f32,
    weight: String,
}

impl From<RawTarget> for LightnessTarget {
    fn from(value: RawTarget) -> Self {
        Self {
            l: value.l,
            weight: value.weight,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of one correction override.
struct RawCorrection {
    target: f32,
    corrected: f32,
}

impl From<RawCorrection> for Correction {
    fn from(value: RawCorrection) -> Self {
        Self {
            target: value.target,
            corrected: value.corrected,
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Built-in lightness ladder shipped with the crate.
fn default_targets() -> Vec<LightnessTarget> {
    vec![
        LightnessTarget {
            l: 5.0,
            weight: "50".into(),
        },
        LightnessTarget {
            l: 10.0,
            weight: "100".into(),
        },
        LightnessTarget {
            l: 20.0,
            weight: "200".into(),
        },
        LightnessTarget {
            l: 30.0,
            weight: "300".into(),
        },
        LightnessTarget {
            l: 40.0,
            weight: "400".into(),
        },
        LightnessTarget {
            l: 50.0,
            weight: "500".into(),
        },
        LightnessTarget {
            l: 60.0,
            weight: "600".into(),
        },
        LightnessTarget {
            l: 70.0,
            weight: "700".into(),
        },
        LightnessTarget {
            l: 80.0,
            weight: "800".into(),
        },
        LightnessTarget {
            l: 95.0,
            weight: "900".into(),
        },
    ]
}

/// Built-in corrections for chromatic ramps.
fn default_chromatic_corrections() -> Vec<Correction> {
    vec![
        Correction {
            target: 5.0,
            corrected: 7.0,
        },
        Correction {
            target: 10.0,
            corrected: 13.5,
        },
        Correction {
            target: 50.0,
            corrected: 48.5,
        },
        Correction {
            target: 60.0,
            corrected: 57.5,
        },
    ]
}

/// Built-in corrections for neutral ramps.
fn default_neutral_corrections() -> Vec<Correction> {
    vec![
        Correction {
            target: 5.0,
            corrected: 7.0,
        },
        Correction {
            target: 10.0,
            corrected: 13.5,
        },
        Correction {
            target: 50.0,
            corrected: 49.5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ladder_is_strictly_ascending() {
        let settings = RampSettings::default();
        assert_eq!(settings.rows(), 10);
        for pair in settings.targets.windows(2) {
            assert!(pair[0].l < pair[1].l);
        }
    }

    #[test]
    fn test_chromatic_corrections_override_expected_rows() {
        let settings = RampSettings::default();
        assert_eq!(settings.effective_target(5.0, false), 7.0);
        assert_eq!(settings.effective_target(10.0, false), 13.5);
        assert_eq!(settings.effective_target(50.0, false), 48.5);
        assert_eq!(settings.effective_target(60.0, false), 57.5);
        // Rows without an override keep their nominal target.
        assert_eq!(settings.effective_target(20.0, false), 20.0);
        assert_eq!(settings.effective_target(95.0, false), 95.0);
    }

    #[test]
    fn test_neutral_corrections_leave_sixty_alone() {
        let settings = RampSettings::default();
        assert_eq!(settings.effective_target(5.0, true), 7.0);
        assert_eq!(settings.effective_target(10.0, true), 13.5);
        assert_eq!(settings.effective_target(50.0, true), 49.5);
        assert_eq!(settings.effective_target(60.0, true), 60.0);
    }

    #[test]
    fn test_raw_settings_full_document() {
        let json = r#"{
            "targets": [
                { "l": 10.0, "weight": "100" },
                { "l": 90.0, "weight": "900" }
            ],
            "neutral_threshold": 4.5,
            "chromatic_corrections": [ { "target": 10.0, "corrected": 12.0 } ],
            "neutral_corrections": [],
            "tint_space": "lab",
            "shade_space": "lch"
        }"#;
        let settings: RampSettings = serde_json::from_str::<RawSettings>(json).unwrap().into();
        assert_eq!(settings.rows(), 2);
        assert_eq!(settings.targets[1].weight, "900");
        assert_eq!(settings.neutral_threshold, 4.5);
        assert_eq!(settings.effective_target(10.0, false), 12.0);
        assert_eq!(settings.effective_target(10.0, true), 10.0);
        assert_eq!(settings.tint_space, BlendSpace::Lab);
        assert_eq!(settings.shade_space, BlendSpace::Lch);
    }

    #[test]
    fn test_raw_settings_partial_document_keeps_defaults() {
        let json = r#"{ "neutral_threshold": 8.0 }"#;
        let settings: RampSettings = serde_json::from_str::<RawSettings>(json).unwrap().into();
        assert_eq!(settings.neutral_threshold, 8.0);
        assert_eq!(settings.rows(), 10);
        assert_eq!(settings.tint_space, BlendSpace::Oklab);
        assert_eq!(settings.effective_target(50.0, false), 48.5);
    }
}
