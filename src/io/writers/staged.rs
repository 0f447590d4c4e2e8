use std::fs::File;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Error, Result};

#[cfg(unix)]
fn temp_builder<'a>() -> tempfile::Builder<'a, 'a> {
    use std::os::unix::fs::PermissionsExt;
    let mut builder = tempfile::Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o644));
    builder
}

#[cfg(not(unix))]
fn temp_builder<'a>() -> tempfile::Builder<'a, 'a> {
    tempfile::Builder::new()
}

/// A fully written temporary file waiting to be renamed over its
/// destination. Dropping it without `commit` removes the temporary file
/// and leaves the destination untouched.
#[derive(Debug)]
pub struct StagedFile {
    tmp: NamedTempFile,
    dest: PathBuf,
}

impl StagedFile {
    /// Create a temporary file next to `dest`, fill it with `write`, and
    /// sync it to disk.
    pub fn stage<F>(dest: &Path, suffix: &str, write: F) -> Result<Self>
    where
        F: FnOnce(&File) -> Result<()>,
    {
        let dir = match dest.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let stem = dest
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");

        let tmp = temp_builder()
            .prefix(&format!(".{}_", stem))
            .suffix(suffix)
            .tempfile_in(dir)?;
        debug!("Staging {:?} in {:?}", dest, tmp.path());

        write(tmp.as_file())?;
        tmp.as_file().sync_all()?;

        Ok(Self {
            tmp,
            dest: dest.to_path_buf(),
        })
    }

    /// Atomically rename the staged file over its destination.
    pub fn commit(self) -> Result<PathBuf> {
        let StagedFile { tmp, dest } = self;
        tmp.persist(&dest).map_err(|e| Error::Persist {
            path: dest.clone(),
            source: e.error,
        })?;
        Ok(dest)
    }
}
