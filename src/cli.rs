use crate::Args;
use crate::counts::CountTable;
use crate::error::{CustomError, Result};
use crate::output::{report_all_missing, write_count_table};
use crate::reader::matrix::read_matrix;
use crate::reader::panel::read_panel;
use std::path::{Path, PathBuf};

pub const DEFAULT_MATRIX: &str = "1kgp_out/rs41_GT_matrix_with_refalt.tsv";
pub const DEFAULT_PANEL: &str = "hirisplexs.csv";
pub const DEFAULT_OUTPUT: &str = "1kgp_out/hirisplex_by_sample_refaware.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub matrix: PathBuf,
    pub panel: PathBuf,
    pub output: PathBuf,
}

impl RunConfig {
    /// Paths not given explicitly fall back to the standard layout under `work_dir`.
    pub fn resolve(
        work_dir: &Path,
        matrix: Option<&Path>,
        panel: Option<&Path>,
        output: Option<&Path>,
    ) -> Self {
        let pick = |explicit: Option<&Path>, default: &str| {
            explicit
                .map(Path::to_path_buf)
                .unwrap_or_else(|| work_dir.join(default))
        };
        Self {
            matrix: pick(matrix, DEFAULT_MATRIX),
            panel: pick(panel, DEFAULT_PANEL),
            output: pick(output, DEFAULT_OUTPUT),
        }
    }

    pub fn print_paths(&self) {
        println!("PANEL : {}", self.panel.display());
        println!("MATRIX: {}", self.matrix.display());
        println!("OUTPUT: {}", self.output.display());
        println!();
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

pub fn build_run_config(args: &Args) -> RunConfig {
    RunConfig::resolve(
        &args.work_dir,
        args.matrix.as_deref(),
        args.panel.as_deref(),
        args.output.as_deref(),
    )
}

pub fn run(config: &RunConfig) -> Result<CountTable> {
    println!("[+] Reading panel: {}", config.panel.display());
    let panel = read_panel(&config.panel)?;

    println!("[+] Reading matrix: {}", config.matrix.display());
    let matrix = read_matrix(&config.matrix)?;
    println!("[+] Samples: {}", matrix.n_samples());
    println!("[+] Variants in matrix: {}", matrix.n_variants());
    println!("[+] Variants in panel: {}", panel.len());

    let table = CountTable::assemble(&matrix, &panel);

    if let Some(dir) = config.output_dir() {
        std::fs::create_dir_all(dir).map_err(|e| CustomError::OutputDir { source: e })?;
    }
    write_count_table(&table, &config.output)?;

    println!("[+] Wrote: {}", config.output.display());
    println!(
        "Total: {} samples x {} SNP_Allele",
        table.n_samples(),
        table.n_columns()
    );
    report_all_missing(&table);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_under_work_dir() {
        let config = RunConfig::resolve(Path::new("/data/labs"), None, None, None);
        assert_eq!(
            config.matrix,
            PathBuf::from("/data/labs/1kgp_out/rs41_GT_matrix_with_refalt.tsv")
        );
        assert_eq!(config.panel, PathBuf::from("/data/labs/hirisplexs.csv"));
        assert_eq!(
            config.output,
            PathBuf::from("/data/labs/1kgp_out/hirisplex_by_sample_refaware.csv")
        );
        assert_eq!(config.output_dir(), Some(Path::new("/data/labs/1kgp_out")));
    }

    #[test]
    fn explicit_paths_override_defaults() {
        let config = RunConfig::resolve(
            Path::new("/data/labs"),
            Some(Path::new("m.tsv")),
            None,
            Some(Path::new("out.csv")),
        );
        assert_eq!(config.matrix, PathBuf::from("m.tsv"));
        assert_eq!(config.panel, PathBuf::from("/data/labs/hirisplexs.csv"));
        assert_eq!(config.output, PathBuf::from("out.csv"));
        assert_eq!(config.output_dir(), None);
    }
}
