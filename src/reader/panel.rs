use std::path::Path;

use itertools::Itertools;

use crate::error::{CustomError, Result};
use crate::model::PanelEntry;
use crate::reader::ensure_nonempty;

const VARIANT_COLUMNS: [&str; 3] = ["SNP", "rsID", "ID"];
const ALLELE_COLUMNS: [&str; 1] = ["Allele"];
const UTF8_BOM: char = '\u{feff}';

/// Index of the first candidate (in candidate order) present in `header`.
fn find_column(header: &[String], candidates: &[&str]) -> Option<usize> {
    candidates.iter().find_map(|cand| {
        header
            .iter()
            .position(|name| name.eq_ignore_ascii_case(cand))
    })
}

/// Read the target-allele panel. Entry order is file order; only the first
/// entry for each variant ID is kept.
pub fn read_panel(path: &impl AsRef<Path>) -> Result<Vec<PanelEntry>> {
    let path = path.as_ref();
    ensure_nonempty(&path, "panel")?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| CustomError::CsvRead {
            source,
            path: path.to_path_buf(),
        })?;
    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(record) => record
            .map_err(|source| CustomError::CsvRead {
                source,
                path: path.to_path_buf(),
            })?
            .iter()
            .map(|name| name.trim_start_matches(UTF8_BOM).trim().to_string())
            .collect(),
        None => {
            return Err(CustomError::PanelEmpty {
                path: path.to_path_buf(),
            });
        }
    };

    let (snp_idx, allele_idx) = match (
        find_column(&header, &VARIANT_COLUMNS),
        find_column(&header, &ALLELE_COLUMNS),
    ) {
        (Some(s), Some(a)) => (s, a),
        _ => {
            return Err(CustomError::PanelColumns {
                path: path.to_path_buf(),
            });
        }
    };

    let mut rows = Vec::new();
    for result in records {
        let record = result.map_err(|source| CustomError::CsvRead {
            source,
            path: path.to_path_buf(),
        })?;
        let (Some(variant_id), Some(allele)) = (record.get(snp_idx), record.get(allele_idx))
        else {
            continue;
        };
        let variant_id = variant_id.trim();
        let allele = allele.trim();
        if variant_id.is_empty() || allele.is_empty() {
            continue;
        }
        rows.push(PanelEntry {
            variant_id: variant_id.to_string(),
            allele: allele.to_uppercase(),
        });
    }

    let entries: Vec<PanelEntry> = rows
        .into_iter()
        .unique_by(|entry| entry.variant_id.clone())
        .collect();
    if entries.is_empty() {
        return Err(CustomError::PanelEmpty {
            path: path.to_path_buf(),
        });
    }
    Ok(entries)
}
