//! CLI Pretty Printing Module
//!
//! All user-facing output formatting for the rotbreak binary lives here,
//! so the look of the program stays in one place: colors, the case
//! banner, per-cracker result blocks, the stats line and the comparison
//! table.

use ansi_term::Colour;

use crate::crackers::crack_results::CrackResult;
use crate::generator::CipherCase;
use crate::instrument::Measurement;

/// Style for informational text.
fn info(text: &str) -> String {
    Colour::Cyan.paint(text).to_string()
}

/// Style for success text.
pub fn success(text: &str) -> String {
    Colour::Green.bold().paint(text).to_string()
}

/// Style for warnings and failure lines.
pub fn warning(text: &str) -> String {
    Colour::Red.bold().paint(text).to_string()
}

/// Banner for a freshly generated case: the ciphertext plus the true
/// shift the crackers are about to rediscover.
pub fn case_summary(case: &CipherCase) -> String {
    format!(
        "{} {}\n{} {}",
        info("Ciphertext:"),
        case.ciphertext,
        info("True shift:"),
        case.key
    )
}

/// One cracker's result block: header, candidate lines, stats line.
pub fn result_block(result: &CrackResult, measurement: &Measurement) -> String {
    let mut out = String::new();
    out.push_str(&success(&format!("=== {} ===", result.cracker_used)));
    out.push('\n');
    for line in result.candidate_lines() {
        if result.success {
            out.push_str(line);
        } else {
            out.push_str(&warning(line));
        }
        out.push('\n');
    }
    out.push_str(&stats_line(measurement));
    out
}

/// The measured time and memory line.
pub fn stats_line(measurement: &Measurement) -> String {
    format!(
        "Time: {} ns | Peak memory: {} bytes",
        measurement.elapsed_nanos(),
        measurement.peak_bytes
    )
}

/// Comparison table across strategies, one row per measured run.
pub fn comparison_table(rows: &[(&'static str, Measurement)]) -> String {
    let mut out = String::new();
    out.push_str(&info(&format!(
        "{:<18} {:>14} {:>14}",
        "Strategy", "Time (ns)", "Peak (bytes)"
    )));
    out.push('\n');
    for (name, measurement) in rows {
        out.push_str(&format!(
            "{:<18} {:>14} {:>14}\n",
            name,
            measurement.elapsed_nanos(),
            measurement.peak_bytes
        ));
    }
    out
}

/// Printed when the provided input text is empty.
pub fn input_is_empty() -> String {
    warning("No input text was provided. Use --text or --file.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn measurement() -> Measurement {
        Measurement {
            elapsed: Duration::from_nanos(1234),
            peak_bytes: 5678,
        }
    }

    #[test]
    fn stats_line_reports_both_numbers() {
        assert_eq!(
            stats_line(&measurement()),
            "Time: 1234 ns | Peak memory: 5678 bytes"
        );
    }

    #[test]
    fn comparison_table_lists_every_row() {
        let table = comparison_table(&[("Exhaustive", measurement()), ("Greedy", measurement())]);
        assert!(table.contains("Exhaustive"));
        assert!(table.contains("Greedy"));
        assert!(table.contains("1234"));
    }
}
