//! Output directory and file writes.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// Creates `dir` (one level) with a permissive mode if it is missing.
///
/// Errors are not returned: an unusable directory shows up as a write
/// failure on the first entry instead.
pub fn ensure_output_dir(dir: &Path) {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o777);
    }
    match builder.create(dir) {
        Ok(()) => tracing::debug!(dir = %dir.display(), "created output directory"),
        Err(e) => tracing::debug!(dir = %dir.display(), error = %e, "output directory not created"),
    }
}

/// Writes `data` to `dir/filename`, creating or truncating the file.
///
/// Returns the path written.
pub fn write_content(dir: &Path, filename: &str, data: &[u8]) -> Result<PathBuf, ExtractError> {
    let path = dir.join(filename);
    write_file(&path, data).map_err(|source| ExtractError::FileWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut options = File::options();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o777);
    }
    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.flush()
}
