// src/output.rs
use crate::aggregate::UsernameReport;
use crate::types::{Failure, NameScanError, Outcome};
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

const DIVIDER: &str = "-";
const DIVIDER_LENGTH: usize = 40;

pub struct OutputManager;

impl OutputManager {
    pub fn new() -> Self {
        Self
    }

    pub fn write_reports<W: Write>(
        &self,
        writer: &mut W,
        reports: &[UsernameReport],
    ) -> Result<(), NameScanError> {
        for report in reports {
            self.write_report(writer, report)?;
        }
        Ok(())
    }

    fn write_report<W: Write>(
        &self,
        writer: &mut W,
        report: &UsernameReport,
    ) -> Result<(), NameScanError> {
        let divider = DIVIDER.repeat(DIVIDER_LENGTH);
        let padding = (DIVIDER_LENGTH / 2).saturating_sub(report.username.chars().count() / 2);

        writeln!(writer, "{}", divider).map_err(write_error)?;
        writeln!(writer, "{}{}", " ".repeat(padding), report.username.bold()).map_err(write_error)?;
        writeln!(writer, "{}", divider).map_err(write_error)?;

        for result in &report.results {
            match result.outcome() {
                Outcome::Available => {
                    writeln!(writer, "{}", result.platform.green()).map_err(write_error)?;
                }
                Outcome::Taken => {
                    writeln!(
                        writer,
                        "{}{}",
                        format!("{}: ", result.platform).white(),
                        result.message.yellow()
                    )
                    .map_err(write_error)?;
                }
                Outcome::Unknown => {
                    writeln!(
                        writer,
                        "{}{}",
                        format!("{}: ", result.platform).white(),
                        result.message.red()
                    )
                    .map_err(write_error)?;
                }
            }
        }

        Ok(())
    }

    pub fn write_failures<W: Write>(
        &self,
        writer: &mut W,
        failures: &[Failure],
    ) -> Result<(), NameScanError> {
        for failure in failures {
            let line = format!(
                "{}: {} / {}: {}",
                failure.kind, failure.platform, failure.username, failure.detail
            );
            writeln!(writer, "{}", line.on_red()).map_err(write_error)?;
        }
        Ok(())
    }

    pub fn write_summary<W: Write>(
        &self,
        writer: &mut W,
        total_queries: usize,
        elapsed: Duration,
    ) -> Result<(), NameScanError> {
        writeln!(
            writer,
            "Completed {} queries in {:.2}s",
            total_queries,
            elapsed.as_secs_f64()
        )
        .map_err(write_error)
    }
}

impl Default for OutputManager {
    fn default() -> Self {
        Self::new()
    }
}

fn write_error(e: std::io::Error) -> NameScanError {
    NameScanError::OutputError(e.to_string())
}
