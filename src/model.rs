use std::collections::HashMap;

/// Placeholder for samples that have no field in a matrix row.
pub const MISSING_GENOTYPE: &str = "./.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSide {
    Ref,
    Alt,
    Neither,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub variant_id: String,
    pub allele: String,
}

impl PanelEntry {
    pub fn label(&self) -> String {
        format!("{}_{}", self.variant_id, self.allele)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    pub variant_id: String,
    pub ref_allele: String,
    pub alt_allele: String,
    pub genotypes: Vec<String>,
}

#[derive(Debug)]
pub struct GenotypeMatrix {
    pub samples: Vec<String>,
    pub variants: HashMap<String, VariantRecord>,
}

impl GenotypeMatrix {
    pub fn n_samples(&self) -> usize {
        self.samples.len()
    }

    pub fn n_variants(&self) -> usize {
        self.variants.len()
    }

    pub fn get(&self, variant_id: &str) -> Option<&VariantRecord> {
        self.variants.get(variant_id)
    }
}
