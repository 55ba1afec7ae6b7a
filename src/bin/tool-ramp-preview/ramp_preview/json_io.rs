#![forbid(unsafe_code)]

use anyhow::Result;
use indexmap::IndexMap;
use palettizer::swatch::Ramp;
use std::{fs::File, io::BufWriter, path::PathBuf};

/// Serialize the generated palette to a JSON file, keyed by column name.
pub fn save_ramps_json(
    path: impl AsRef<std::path::Path>,
    palette: &IndexMap<String, Ramp>,
) -> Result<PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let w = BufWriter::new(f);
    serde_json::to_writer_pretty(w, palette)?;
    Ok(path.to_path_buf())
}
