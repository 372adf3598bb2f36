//! Briefing output
//!
//! Splits the input text into blank-line-separated reports, decodes
//! each one, and prints a briefing per report. Reports that fail to
//! decode are logged and skipped; the run only fails as a whole if
//! nothing could be decoded.

use anyhow::anyhow;
use chrono::{Datelike, Utc};
use log::{info, warn};

use metwx::{decode, forecast_lines, observation_lines, Bulletin};

use crate::cli::{Args, CliError};

/// Decode and print every report in `input`
pub fn run(args: &Args, input: &str) -> Result<(), CliError> {
    let now = Utc::now();
    let year = args.year.unwrap_or_else(|| now.year());
    let month = args.month.unwrap_or_else(|| now.month());

    let reports = split_reports(input);
    if reports.is_empty() {
        return Err(CliError::new(anyhow!("no reports in input"), 1));
    }

    let mut decoded = 0;
    for (index, raw) in reports.iter().enumerate() {
        let bulletin = match decode(raw) {
            Ok(bulletin) => bulletin,
            Err(err) => {
                warn!("skipping report {}: {}", index + 1, err);
                continue;
            }
        };

        if decoded > 0 {
            println!();
        }
        if !args.quiet {
            println!("{}", raw.trim_end());
            println!();
        }

        match &bulletin {
            Bulletin::Metar(obs) => {
                for line in observation_lines(obs) {
                    println!("{}", line);
                }
            }
            Bulletin::Taf(fc) => {
                for line in forecast_lines(fc) {
                    println!("{}", line);
                }
            }
        }

        log_issue_time(&bulletin, year, month);
        decoded += 1;
    }

    if decoded == 0 {
        return Err(CliError::new(anyhow!("no report could be decoded"), 1));
    }

    Ok(())
}

// The grammar has no month or year; anchor the issue time with the
// calendar context from the command line.
fn log_issue_time(bulletin: &Bulletin, year: i32, month: u32) {
    let day_time = match bulletin {
        Bulletin::Metar(obs) => obs.observed,
        Bulletin::Taf(fc) => fc.issued,
    };

    match day_time.to_datetime(year, month) {
        Ok(issued) => info!(
            "{}: issued {}",
            bulletin.station(),
            issued.format("%Y-%m-%d %H:%M UTC")
        ),
        Err(err) => warn!("{}: {}", bulletin.station(), err),
    }
}

// Reports are separated by one or more blank lines
fn split_reports(input: &str) -> Vec<String> {
    let mut reports = Vec::new();
    let mut current = String::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                reports.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        reports.push(current);
    }

    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_reports() {
        let input = "WIII 010400Z 22003KT 8000\n\nTAF WIII 282300Z 2900/3006 20005KT 8000\n  BECMG 2904/2906 02010KT\n";
        let reports = split_reports(input);

        assert_eq!(2, reports.len());
        assert!(reports[0].starts_with("WIII"));
        assert!(reports[1].contains("BECMG"));
        assert!(!reports[1].ends_with('\n'));

        assert!(split_reports("\n  \n").is_empty());
    }
}
