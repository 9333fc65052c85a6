// src/output.rs
use crate::error::SdeResult;
use ndarray::ArrayView2;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a `[path, step]` matrix as CSV, one row per path
pub fn write_paths_to_csv<P: AsRef<Path>>(filename: P, paths: ArrayView2<'_, f64>) -> SdeResult<()> {
    let mut file = BufWriter::new(File::create(filename)?);

    write!(file, "path_id")?;
    for step in 0..paths.ncols() {
        write!(file, ",step_{}", step)?;
    }
    writeln!(file)?;

    for (i, row) in paths.rows().into_iter().enumerate() {
        write!(file, "{}", i)?;
        for value in row.iter() {
            write!(file, ",{}", value)?;
        }
        writeln!(file)?;
    }
    file.flush()?;
    Ok(())
}

pub fn write_summary_to_csv<P: AsRef<Path>>(filename: P, summary_data: &[(&str, String)]) -> SdeResult<()> {
    let mut file = BufWriter::new(File::create(filename)?);
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    file.flush()?;
    Ok(())
}
