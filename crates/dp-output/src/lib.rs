//! `dp-output` — presentation layer for the displacement simulator.
//!
//! Nothing here renders charts.  Paths and trial draws are written as CSV
//! tables for an external plotting tool, and the summary is rendered as
//! plain text.
//!
//! | File         | Columns                                  |
//! |--------------|------------------------------------------|
//! | `paths.csv`  | `year, unemployment, nilf`               |
//! | `trials.csv` | `trial, raw_draw, value, terminal_unemployment` |
//!
//! [`CsvWriter`] implements [`OutputWriter`] and is driven either directly
//! (for paths) or through [`McOutputObserver`], which implements
//! `dp_mc::TrialObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dp_output::{CsvWriter, McOutputObserver};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_paths(&PathRow::from_paths(&paths))?;
//! let mut obs = McOutputObserver::new(writer);
//! let outcome = mc.run_with(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! println!("{}", report::format_summary(&outcome.summary));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::McOutputObserver;
pub use row::{PathRow, TrialRow};
pub use writer::OutputWriter;
