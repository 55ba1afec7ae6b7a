//! Helper tool rendering the demo palette as an HTML grid plus a JSON dump.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

mod html;
mod json_io;

use anyhow::Result;
use palettizer::{config::RampSettings, ramp::RampGenerator, swatch::AnchorColor};

use html::write_html_grid;
use json_io::save_ramps_json;
use std::{env, fs, path::PathBuf};

pub fn run() -> Result<()> {
    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("tool-ramp-preview");
    fs::create_dir_all(&out_dir)?;

    let generator = RampGenerator::new(RampSettings::load())?;
    let palette = generator.generate_palette(&demo_anchors())?;

    let html_path = write_html_grid("Swatch ramp preview", &palette, out_dir.join("ramps.html"))?;
    let json_path = save_ramps_json(out_dir.join("ramps.json"), &palette)?;

    println!(
        "Generated ramp assets in {}:\n  - {}\n  - {}",
        out_dir.display(),
        html_path.display(),
        json_path.display()
    );

    Ok(())
}

/// Demo palette rendered by the preview: one anchor per semantic slot.
fn demo_anchors() -> Vec<AnchorColor> {
    [
        ("#082B9F", "primary"),
        ("#1057F7", "secondary"),
        ("#198038", "success"),
        ("#8A3FFC", "info"),
        ("#FFB000", "warning"),
        ("#DA1E28", "danger"),
        ("#6F6F6F", "neutral"),
    ]
    .into_iter()
    .map(|(hex, semantic)| AnchorColor::new(hex.into(), semantic.into(), semantic.into()))
    .collect()
}
