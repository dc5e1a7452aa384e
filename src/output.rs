use std::path::{Path, PathBuf};

use crate::counts::CountTable;
use crate::error::{CustomError, Result};
use crate::genotype::format_count;

const SAMPLE_COLUMN: &str = "sampleid";

pub(crate) fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

/// Write the table as CSV. Rows go to a `.partial` sibling that is renamed
/// over `path` only once every row has been flushed; on failure the sibling
/// is removed.
pub fn write_count_table(table: &CountTable, path: &Path) -> Result<()> {
    let tmp_path = partial_path(path);
    let result = write_csv(table, &tmp_path).and_then(|()| {
        std::fs::rename(&tmp_path, path).map_err(|e| CustomError::Write {
            source: e,
            path: path.to_path_buf(),
        })
    });
    if result.is_err() {
        let _ = std::fs::remove_file(&tmp_path);
    }
    result
}

fn write_csv(table: &CountTable, tmp_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(tmp_path)?;
    let mut header = Vec::with_capacity(table.n_columns() + 1);
    header.push(SAMPLE_COLUMN);
    header.extend(table.labels().iter().map(String::as_str));
    wtr.write_record(&header)?;

    for (sample_idx, sample) in table.samples().iter().enumerate() {
        let mut record = Vec::with_capacity(table.n_columns() + 1);
        record.push(sample.clone());
        record.extend(table.row(sample_idx).iter().copied().map(format_count));
        wtr.write_record(&record)?;
    }
    wtr.flush().map_err(|e| CustomError::Write {
        source: e,
        path: tmp_path.to_path_buf(),
    })?;
    Ok(())
}

pub fn report_all_missing(table: &CountTable) {
    let missing = table.all_missing_columns();
    for label in &missing {
        println!("WARNING: {label} is entirely NA (allele not matched or variant absent from matrix)");
    }
    if missing.is_empty() {
        println!("[+] No column is entirely NA.");
    }
}
