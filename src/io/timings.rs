use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::{ensure_parent_dir, reader_builder};
use crate::Result;

/// One timed run of an algorithm over one graph file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimingRecord {
    /// File name of the input graph, without directories
    pub file: String,
    pub n_vertices: usize,
    pub n_edges: usize,
    /// Wall-clock seconds spent in the algorithm
    pub seconds: f64,
}

/// Appends timing records to a CSV file as runs complete
pub struct TimingLog<W: Write> {
    writer: csv::Writer<W>,
}

impl TimingLog<File> {
    /// Creates (or truncates) a timing file and writes its header
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        Self::from_writer(File::create(path)?)
    }
}

impl<W: Write> TimingLog<W> {
    /// Wraps a writer and writes the header row
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(["file", "n_vertices", "n_edges", "seconds"])?;
        Ok(TimingLog { writer })
    }

    /// Writes one record, seconds with six decimals, and flushes it
    pub fn record(&mut self, record: &TimingRecord) -> Result<()> {
        self.writer.serialize((
            &record.file,
            record.n_vertices,
            record.n_edges,
            format!("{:.6}", record.seconds),
        ))?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Loads a timing file keyed by graph file name
pub fn read_timings<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, TimingRecord>> {
    read_timings_from(File::open(path)?)
}

/// Loads a timing file that may not exist yet; a missing file reads as no records
pub fn read_optional_timings<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, TimingRecord>> {
    match File::open(path) {
        Ok(file) => read_timings_from(file),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
        Err(e) => Err(e.into()),
    }
}

/// Reads `file,n_vertices,n_edges,seconds` rows; rows with fewer than four fields are skipped
pub fn read_timings_from<R: Read>(reader: R) -> Result<BTreeMap<String, TimingRecord>> {
    let mut rdr = reader_builder().from_reader(reader);
    let mut timings = BTreeMap::new();

    for record in rdr.records() {
        let record = record?;
        if record.len() < 4 {
            continue;
        }
        let timing: TimingRecord = record.deserialize(None)?;
        timings.insert(timing.file.clone(), timing);
    }

    Ok(timings)
}

/// Timings of the three algorithms on one graph file
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub file: String,
    pub n_vertices: usize,
    pub n_edges: usize,
    pub bellman: f64,
    pub dijkstra: f64,
    /// Absent when no BMSSP timing exists for this file
    pub bmssp: Option<f64>,
}

impl ComparisonRow {
    /// How many times slower Bellman-Ford was than Dijkstra
    pub fn bellman_over_dijkstra(&self) -> f64 {
        ratio(self.bellman, self.dijkstra)
    }

    /// How many times slower Bellman-Ford was than BMSSP
    pub fn bellman_over_bmssp(&self) -> Option<f64> {
        self.bmssp.map(|bm| ratio(self.bellman, bm))
    }

    /// How many times slower BMSSP was than Dijkstra
    pub fn bmssp_over_dijkstra(&self) -> Option<f64> {
        self.bmssp.map(|bm| ratio(bm, self.dijkstra))
    }
}

/// Joins the timing tables by file name.
///
/// Only files timed by both Bellman-Ford and Dijkstra produce a row; vertex and edge
/// counts come from the Bellman-Ford table. Rows come out sorted by file name.
pub fn compare_timings(
    bellman: &BTreeMap<String, TimingRecord>,
    dijkstra: &BTreeMap<String, TimingRecord>,
    bmssp: &BTreeMap<String, TimingRecord>,
) -> Vec<ComparisonRow> {
    bellman
        .iter()
        .filter_map(|(file, bf)| {
            let dj = dijkstra.get(file)?;
            Some(ComparisonRow {
                file: file.clone(),
                n_vertices: bf.n_vertices,
                n_edges: bf.n_edges,
                bellman: bf.seconds,
                dijkstra: dj.seconds,
                bmssp: bmssp.get(file).map(|bm| bm.seconds),
            })
        })
        .collect()
}

/// Saves comparison rows; BMSSP columns are left blank where its timing is missing
pub fn write_comparison<P: AsRef<Path>>(path: P, rows: &[ComparisonRow]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    write_comparison_to(File::create(path)?, rows)
}

/// Writer-generic form of [`write_comparison`]
pub fn write_comparison_to<W: Write>(writer: W, rows: &[ComparisonRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "file",
        "n_vertices",
        "n_edges",
        "time_bellman",
        "time_dijkstra",
        "ratio_bf_over_dj",
        "time_bmssp",
        "ratio_bf_over_bmssp",
        "ratio_bmssp_over_dj",
    ])?;

    let fixed = |value: Option<f64>, precision: usize| {
        value.map_or_else(String::new, |v| format!("{:.*}", precision, v))
    };

    for row in rows {
        wtr.write_record([
            row.file.clone(),
            row.n_vertices.to_string(),
            row.n_edges.to_string(),
            format!("{:.6}", row.bellman),
            format!("{:.6}", row.dijkstra),
            format!("{:.2}", row.bellman_over_dijkstra()),
            fixed(row.bmssp, 6),
            fixed(row.bellman_over_bmssp(), 2),
            fixed(row.bmssp_over_dijkstra(), 2),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// `numerator / denominator`, or 0 when the denominator is not positive
fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}
