#![forbid(unsafe_code)]

use anyhow::Result;
use indexmap::IndexMap;
use palettizer::swatch::{Ramp, SwatchStop};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Pick a readable text color against a stop's background.
#[inline]
fn text_color(stop: &SwatchStop) -> &'static str {
    if stop.target_lightness < 55.0 {
        "#eee"
    } else {
        "#111"
    }
}

pub fn write_html_grid(
    title: &str,
    palette: &IndexMap<String, Ramp>,
    path: impl AsRef<std::path::Path>,
) -> Result<std::path::PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    let cols = palette.len().max(1);
    writeln!(
        w,
        r#"<!doctype html><meta charset="utf-8">
<style>
  body{{margin:0;background:#111;color:#eee;font-family:system-ui}}
  h2{{margin:12px}}
  .g{{display:grid;grid-template-columns:repeat({cols},1fr);gap:6px;padding:8px}}
  .s{{aspect-ratio:3/1;border-radius:10px;display:flex;align-items:center;justify-content:center;
      font-weight:700;text-shadow:0 1px 2px rgba(0,0,0,.35)}}
</style>
<h2>{title}</h2>
<div class="g">"#
    )?;
    let rows = palette.values().map(Ramp::len).max().unwrap_or(0);
    for row in 0..rows {
        for ramp in palette.values() {
            if let Some(stop) = ramp.get(row) {
                writeln!(
                    w,
                    r#"<div class="s" style="background:{};color:{}">{} | {}</div>"#,
                    stop.hex,
                    text_color(stop),
                    stop.name,
                    stop.hex
                )?;
            }
        }
    }
    writeln!(w, "</div>")?;
    Ok(path.to_path_buf())
}
