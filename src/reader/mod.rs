pub mod matrix;
pub mod panel;

use std::path::Path;

use crate::error::{CustomError, Result};

/// Fail unless `path` is a regular file with at least one byte.
pub(crate) fn ensure_nonempty(path: &impl AsRef<Path>, kind: &'static str) -> Result<()> {
    let path = path.as_ref();
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => Ok(()),
        _ => Err(CustomError::MissingInput {
            kind,
            path: path.to_path_buf(),
        }),
    }
}
