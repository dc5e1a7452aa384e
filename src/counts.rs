use indicatif::{ProgressBar, ProgressStyle};

use crate::genotype::{Count, count_for_side};
use crate::model::{GenotypeMatrix, PanelEntry};
use crate::orient::decide_target_side;

pub struct CountTable {
    samples: Vec<String>,
    labels: Vec<String>,
    n_samples: usize,
    n_columns: usize,
    cells: Vec<Count>, // Flat (n_samples x n_columns) row-major
    observed: Vec<bool>,
}

impl CountTable {
    /// Every cell starts out missing.
    pub fn new(samples: Vec<String>, panel: &[PanelEntry]) -> Self {
        let n_samples = samples.len();
        let n_columns = panel.len();
        Self {
            samples,
            labels: panel.iter().map(PanelEntry::label).collect(),
            n_samples,
            n_columns,
            cells: vec![None; n_samples * n_columns],
            observed: vec![false; n_columns],
        }
    }

    pub fn assemble(matrix: &GenotypeMatrix, panel: &[PanelEntry]) -> Self {
        Self::new(matrix.samples.clone(), panel).fill(matrix, panel)
    }

    pub fn idx(&self, sample: usize, column: usize) -> usize {
        self.n_columns * sample + column
    }

    pub fn fill(mut self, matrix: &GenotypeMatrix, panel: &[PanelEntry]) -> Self {
        let pb = ProgressBar::new(panel.len() as u64);
        if let Ok(style) =
            ProgressStyle::with_template("[{elapsed_precise}] {bar:30} {pos}/{len} targets")
        {
            pb.set_style(style);
        }

        for (column, entry) in panel.iter().enumerate() {
            pb.inc(1);
            // Absent variants leave the column missing
            let Some(record) = matrix.get(&entry.variant_id) else {
                continue;
            };
            let side = decide_target_side(&record.ref_allele, &record.alt_allele, &entry.allele);

            for sample in 0..self.n_samples {
                let count = record
                    .genotypes
                    .get(sample)
                    .and_then(|gt| count_for_side(gt, side));
                let cell = self.idx(sample, column);
                self.cells[cell] = count;
                if count.is_some() {
                    self.observed[column] = true;
                }
            }
        }
        pb.finish_and_clear();
        self
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn n_columns(&self) -> usize {
        self.n_columns
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn row(&self, sample: usize) -> &[Count] {
        let start = self.idx(sample, 0);
        &self.cells[start..start + self.n_columns]
    }

    /// Labels of columns where no sample produced a count, in panel order.
    pub fn all_missing_columns(&self) -> Vec<&str> {
        self.labels
            .iter()
            .zip(self.observed.iter())
            .filter(|&(_, &seen)| !seen)
            .map(|(label, _)| label.as_str())
            .collect()
    }
}
