use thiserror::Error;

#[derive(Debug, Error)]
pub enum CustomError {
    #[error("could not read {path}")]
    ReadWithPath {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not read CSV {path}")]
    CsvRead {
        #[source]
        source: csv::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to {path}")]
    Write {
        #[source]
        source: std::io::Error,
        path: std::path::PathBuf,
    },

    #[error("could not write to CSV")]
    CsvWrite(#[from] csv::Error),

    #[error("could not create output directory")]
    OutputDir {
        #[source]
        source: std::io::Error,
    },

    #[error("could not install interrupt handler")]
    InterruptHandler(#[from] ctrlc::Error),

    #[error("{kind} file is missing or empty: {path}")]
    MissingInput {
        kind: &'static str,
        path: std::path::PathBuf,
    },

    #[error("could not find a 'SNP/rsID/ID' or 'Allele' column in panel {path}")]
    PanelColumns { path: std::path::PathBuf },

    #[error("panel has no valid entries: {path}")]
    PanelEmpty { path: std::path::PathBuf },

    #[error("expected at least {expected} fields (got {n_fields}) in matrix header of {path}")]
    MatrixHeader {
        path: std::path::PathBuf,
        n_fields: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, CustomError>;
