//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `paths.csv`
//! - `trials.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PathRow, TrialRow};

pub const PATHS_FILE: &str = "paths.csv";
pub const TRIALS_FILE: &str = "trials.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    paths:    Writer<File>,
    trials:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut paths = Writer::from_path(dir.join(PATHS_FILE))?;
        paths.write_record(["year", "unemployment", "nilf"])?;

        let mut trials = Writer::from_path(dir.join(TRIALS_FILE))?;
        trials.write_record(["trial", "raw_draw", "value", "terminal_unemployment"])?;

        Ok(Self {
            paths,
            trials,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_paths(&mut self, rows: &[PathRow]) -> OutputResult<()> {
        for row in rows {
            self.paths.write_record(&[
                row.year.to_string(),
                row.unemployment.to_string(),
                row.nilf.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_trial(&mut self, row: &TrialRow) -> OutputResult<()> {
        self.trials.write_record(&[
            row.trial.to_string(),
            row.raw_draw.to_string(),
            row.value.to_string(),
            row.terminal.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.paths.flush()?;
        self.trials.flush()?;
        Ok(())
    }
}
