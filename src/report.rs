//! Text and JSON output for a finished simulation.
//!
//! The summary table lists expected value and standard deviation per
//! configuration with a bar of one glyph per 0.2 expected tries. Histograms
//! share one scale across all configurations: the tallest bucket in the run
//! maps to [`HIST_HEIGHT`] glyphs.

use std::path::Path;

use crate::constants::{HISTOGRAM_WIDTH, HIST_HEIGHT};
use crate::error::Result;
use crate::simulation::SimulationResult;

const BAR: char = '■';

/// Glyphs per unit of expected value in the summary bar.
const SUMMARY_BAR_SCALE: f64 = 5.0;

fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:4.1}", v),
        None => format!("{:>4}", "-"),
    }
}

fn bar(len: usize) -> String {
    std::iter::repeat(BAR).take(len).collect()
}

/// Summary table: lanes, E, Sd, and a bar proportional to E.
pub fn summary_table(result: &SimulationResult) -> String {
    let mut out = String::new();
    out.push_str("Lanes          E    Sd    E (Bar)\n");
    out.push_str("----------------------------------------------------------\n");
    for r in &result.results {
        let ev = r.stats.expected_value();
        let bar_len = ev.map_or(0, |e| (e * SUMMARY_BAR_SCALE) as usize);
        out.push_str(&format!(
            "{:<12} {} {}    {}\n",
            r.config.to_string(),
            fmt_stat(ev),
            fmt_stat(r.stats.std_dev()),
            bar(bar_len)
        ));
    }
    out
}

/// Counts per display glyph, so the tallest bucket spans [`HIST_HEIGHT`] glyphs.
pub fn histogram_scale(result: &SimulationResult) -> u64 {
    (result.max_bucket() / HIST_HEIGHT).max(1)
}

/// One ASCII histogram per configuration.
///
/// A configuration's histogram stops after the first bucket past 0 whose
/// scaled bar is empty; the remaining tail is too small to draw.
pub fn histograms(result: &SimulationResult) -> String {
    let scale = histogram_scale(result);
    let mut out = String::new();
    for r in &result.results {
        out.push_str(&format!("{}\n", r.config));
        for (i, &count) in r.stats.histogram().iter().enumerate() {
            let len = count / scale;
            out.push_str(&format!("{:2} {} {}\n", i, bar(len as usize), len));
            if len == 0 && i != 0 {
                break;
            }
        }
        if r.stats.overflow() > 0 {
            out.push_str(&format!(
                "{}+ {} trials\n",
                HISTOGRAM_WIDTH,
                r.stats.overflow()
            ));
        }
    }
    out
}

/// Full text report: summary table followed by histograms.
pub fn render(result: &SimulationResult) -> String {
    let mut out = summary_table(result);
    out.push('\n');
    out.push_str(&histograms(result));
    out
}

/// Write the run as pretty-printed JSON to `path`, creating parent directories.
pub fn save_statistics(result: &SimulationResult, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(&result.report())?;
    std::fs::write(path, json)?;
    Ok(())
}
