use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use super::{ensure_parent_dir, parse_field, reader_builder};
use crate::Result;

/// Written in place of the distance of an unreachable vertex
pub const INF_SENTINEL: &str = "INF";

/// Saves a distance vector as `vertex,dist` rows, creating parent directories as needed
pub fn write_distances<P: AsRef<Path>>(path: P, distances: &[f64]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    write_distances_to(File::create(path)?, distances)
}

/// Writes one row per vertex: `INF` for +inf, otherwise six decimals
pub fn write_distances_to<W: Write>(writer: W, distances: &[f64]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["vertex", "dist"])?;
    for (vertex, &d) in distances.iter().enumerate() {
        let value = if d == f64::INFINITY {
            INF_SENTINEL.to_string()
        } else {
            format!("{:.6}", d)
        };
        wtr.write_record([vertex.to_string(), value])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Loads a distance vector written by [`write_distances`]
pub fn load_distances<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    read_distances(File::open(path)?)
}

/// Reads `vertex,dist` rows back into a vector indexed by vertex.
///
/// `INF` maps to +inf. Vertices that never appear stay at +inf; rows with fewer than two
/// fields are skipped.
pub fn read_distances<R: Read>(reader: R) -> Result<Vec<f64>> {
    let mut rdr = reader_builder().from_reader(reader);
    let mut distances = Vec::new();

    for record in rdr.records() {
        let record = record?;
        if record.len() < 2 {
            continue;
        }

        let vertex: usize = parse_field(&record, 0, "vertex")?;
        let d = if record.get(1) == Some(INF_SENTINEL) {
            f64::INFINITY
        } else {
            parse_field(&record, 1, "dist")?
        };

        if vertex >= distances.len() {
            distances.resize(vertex + 1, f64::INFINITY);
        }
        distances[vertex] = d;
    }

    Ok(distances)
}
