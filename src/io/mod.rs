//! CSV persistence for graphs, distance vectors and timing runs.
//!
//! Readers are lenient about short rows, which are skipped, and strict about the
//! fields they do read: a value that does not parse is an error.

pub mod distances;
pub mod graph_csv;
pub mod timings;

pub use distances::{load_distances, write_distances, INF_SENTINEL};
pub use graph_csv::{load_graph_csv, write_graph_csv, LoadedGraph};
pub use timings::{compare_timings, read_timings, ComparisonRow, TimingLog, TimingRecord};

use std::path::Path;
use std::str::FromStr;

use crate::{Error, Result};

/// Parses column `index` of a record, reporting the field name on failure
fn parse_field<T: FromStr>(
    record: &csv::StringRecord,
    index: usize,
    field: &'static str,
) -> Result<T> {
    let value = record.get(index).unwrap_or_default();
    value.parse().map_err(|_| Error::Parse {
        line: record.position().map_or(0, |p| p.line()),
        field,
        value: value.to_string(),
    })
}

/// Creates the parent directory of `path` if it has one
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}
