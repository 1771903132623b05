use crate::error::{ExtOrgError, Result};
use crate::scanner::SourceFile;
use std::path::{Path, PathBuf};

pub struct FileCopier {
    dest_root: PathBuf,
    preserve_mtime: bool,
}

impl FileCopier {
    pub fn new<P: Into<PathBuf>>(dest_root: P) -> Self {
        Self {
            dest_root: dest_root.into(),
            preserve_mtime: true,
        }
    }

    pub fn with_preserve_mtime(mut self, preserve: bool) -> Self {
        self.preserve_mtime = preserve;
        self
    }

    /// Extension subdirectory for a file. Files without an extension are
    /// placed directly under the destination root.
    pub fn destination_dir(&self, file: &SourceFile) -> PathBuf {
        if file.extension.is_empty() {
            self.dest_root.clone()
        } else {
            self.dest_root.join(&file.extension)
        }
    }

    pub fn destination_path(&self, file: &SourceFile) -> PathBuf {
        self.destination_dir(file).join(&file.file_name)
    }

    /// Copies one file into its extension subdirectory, creating the
    /// directory on demand. create_dir_all tolerates concurrent creation of
    /// the same directory, so many tasks can race on one extension safely.
    /// An existing destination file is overwritten (last writer wins).
    pub async fn copy(&self, file: &SourceFile) -> Result<u64> {
        let dest_dir = self.destination_dir(file);

        tokio::fs::create_dir_all(&dest_dir)
            .await
            .map_err(|e| self.copy_error(file, &dest_dir, e))?;

        let dest_path = dest_dir.join(&file.file_name);
        let bytes = tokio::fs::copy(&file.path, &dest_path)
            .await
            .map_err(|e| self.copy_error(file, &dest_dir, e))?;

        if self.preserve_mtime {
            // Best effort: a copy with a fresh mtime is still a copy
            if let Ok(metadata) = std::fs::metadata(&file.path) {
                if let Ok(modified) = metadata.modified() {
                    let _ = filetime::set_file_mtime(
                        &dest_path,
                        filetime::FileTime::from_system_time(modified),
                    );
                }
            }
        }

        Ok(bytes)
    }

    fn copy_error(&self, file: &SourceFile, dest_dir: &Path, source: std::io::Error) -> ExtOrgError {
        ExtOrgError::CopyFailed {
            source_path: file.path.display().to_string(),
            dest_dir: dest_dir.display().to_string(),
            source,
        }
    }
}
