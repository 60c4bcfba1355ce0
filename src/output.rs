//! Output sinks for a finished `ResultSet`.

use std::fs;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::{Error, Result};
use crate::expand::ResultSet;
use crate::range::ParameterRange;

/// File name used for the empty label (zero parameter ranges).
pub const EMPTY_LABEL_FILE: &str = "_";

/// `label value` per line.
pub fn print_pairs(rs: &ResultSet, mut out: impl Write) -> std::io::Result<()> {
    for (label, value) in rs {
        writeln!(out, "{label} {value}")?;
    }
    out.flush()
}

/// Progress bar in the style of the scan drivers; hidden when `quiet`.
pub fn progress_bar(len: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template(" {bar:40.cyan/blue} {pos}/{len} [{elapsed_precise}]") {
        bar.set_style(style);
    }
    bar
}

/// One file per entry: named by label, containing the value string.
pub fn write_files(rs: &ResultSet, dir: &Path, bar: &ProgressBar) -> Result<usize> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut written = 0;
    for (label, value) in rs {
        let name = if label.is_empty() { EMPTY_LABEL_FILE } else { label.as_str() };
        let path = dir.join(name);
        fs::write(&path, value).map_err(|e| Error::io(&path, e))?;
        written += 1;
        bar.inc(1);
    }
    bar.finish();
    info!("wrote {written} combination files to {}", dir.display());
    Ok(written)
}

/// CSV manifest: `label,<name1>,...,<nameN>`.
pub fn write_manifest(rs: &ResultSet, ranges: &[ParameterRange], path: &Path) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;

    let mut header = Vec::with_capacity(ranges.len() + 1);
    header.push("label");
    header.extend(ranges.iter().map(|r| r.name.as_str()));
    wtr.write_record(&header)?;

    for (label, value) in rs {
        let mut row = Vec::with_capacity(ranges.len() + 1);
        row.push(label.as_str());
        row.extend(value.split_whitespace());
        wtr.write_record(&row)?;
    }
    wtr.flush().map_err(|e| Error::io(path, e))?;
    info!("manifest written to {}", path.display());
    Ok(())
}
