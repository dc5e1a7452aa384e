use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{CustomError, Result};
use crate::model::{GenotypeMatrix, MISSING_GENOTYPE, VariantRecord};
use crate::reader::ensure_nonempty;

// CHROM POS ID REF ALT
pub(crate) const FIXED_FIELDS: usize = 5;
pub(crate) const MIN_HEADER_FIELDS: usize = FIXED_FIELDS + 1;

/// Read a tab-separated genotype matrix keyed by variant ID.
///
/// Rows with fewer than the fixed fields are skipped, short genotype lists are
/// padded with `./.`, and a repeated variant ID replaces the earlier row.
pub fn read_matrix(path: &impl AsRef<Path>) -> Result<GenotypeMatrix> {
    let path = path.as_ref();
    ensure_nonempty(&path, "matrix")?;

    let f = File::open(path).map_err(|e| CustomError::ReadWithPath {
        source: e,
        path: path.to_path_buf(),
    })?;
    let mut lines = BufReader::new(f).lines();

    let header = lines
        .next()
        .transpose()
        .map_err(|e| CustomError::ReadWithPath {
            source: e,
            path: path.to_path_buf(),
        })?
        .unwrap_or_default();
    let header: Vec<String> = header.split('\t').map(|h| h.trim().to_string()).collect();
    if header.len() < MIN_HEADER_FIELDS {
        return Err(CustomError::MatrixHeader {
            path: path.to_path_buf(),
            n_fields: header.len(),
            expected: MIN_HEADER_FIELDS,
        });
    }
    let samples = header[FIXED_FIELDS..].to_vec();

    let mut variants = HashMap::new();
    for line in lines {
        let line = line.map_err(|e| CustomError::ReadWithPath {
            source: e,
            path: path.to_path_buf(),
        })?;
        if let Some(record) = parse_matrix_row(&line, samples.len()) {
            variants.insert(record.variant_id.clone(), record);
        }
    }

    Ok(GenotypeMatrix { samples, variants })
}

fn parse_matrix_row(line: &str, n_samples: usize) -> Option<VariantRecord> {
    if line.is_empty() {
        return None;
    }
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < FIXED_FIELDS {
        return None;
    }

    let mut genotypes: Vec<String> = fields[FIXED_FIELDS..]
        .iter()
        .map(|gt| gt.trim().to_string())
        .collect();
    if genotypes.len() < n_samples {
        genotypes.resize(n_samples, MISSING_GENOTYPE.to_string());
    }

    Some(VariantRecord {
        variant_id: fields[2].trim().to_string(),
        ref_allele: fields[3].trim().to_string(),
        alt_allele: fields[4].trim().to_string(),
        genotypes,
    })
}
