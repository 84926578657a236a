//! Text rendering and CSV export of distribution results

use crate::algorithm::mode::Mode;
use crate::algorithm::sampling::Simulation;
use crate::io::configuration::{PROBABILITY_DISPLAY_PRECISION, TABLE_HEADER};
use crate::io::error::{Result, file_system_error};
use crate::math::distribution::Distribution;
use std::fmt::Write as _;
use std::path::Path;

/// Format a probability with the configured number of decimals
pub fn format_probability(value: f64) -> String {
    format!("{value:.precision$}", precision = PROBABILITY_DISPLAY_PRECISION)
}

/// Describe a mode search result
pub fn format_mode(mode: &Mode) -> String {
    match mode.max {
        Some(k) => format!("max={k} p={}", format_probability(mode.p)),
        None => "max=none p=0".to_string(),
    }
}

/// Render `k,pmf,cdf` rows for every outcome count as CSV
///
/// # Errors
///
/// Propagates computation failures while building the table
pub fn render_table(distribution: &Distribution) -> Result<String> {
    let mut csv = String::from(TABLE_HEADER);
    csv.push('\n');

    for (k, (mass, cumulative)) in distribution.table()?.into_iter().enumerate() {
        // Writing to a String cannot fail
        let _ = writeln!(
            csv,
            "{k},{},{}",
            format_probability(mass),
            format_probability(cumulative)
        );
    }

    Ok(csv)
}

/// Write the distribution table to `path` as CSV
///
/// # Errors
///
/// Returns a file system error if the file cannot be written, or propagates
/// computation failures while building the table
pub fn write_table(distribution: &Distribution, path: &Path) -> Result<()> {
    let csv = render_table(distribution)?;
    std::fs::write(path, csv).map_err(|source| file_system_error(path, "table export", source))
}

/// Render observed frequencies next to the exact mass function
///
/// # Errors
///
/// Propagates computation failures while building the exact table
pub fn render_simulation(distribution: &Distribution, simulation: &Simulation) -> Result<String> {
    let mut text = String::from("k,observed,exact\n");

    for (k, (mass, _)) in distribution.table()?.into_iter().enumerate() {
        let _ = writeln!(
            text,
            "{k},{},{}",
            format_probability(simulation.frequency(k)),
            format_probability(mass)
        );
    }

    Ok(text)
}
