use crate::config::ScanConfig;
use crate::error::{ExtOrgError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub file_name: String,
    pub extension: String,
    pub size: u64,
}

impl SourceFile {
    pub fn new(path: PathBuf, size: u64) -> Self {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("")
            .to_string();

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        Self {
            path,
            file_name,
            extension,
            size,
        }
    }

    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }

    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub files: Vec<SourceFile>,
    pub warnings: Vec<String>,
}

pub struct TreeScanner {
    follow_links: bool,
    max_depth: Option<usize>,
}

impl TreeScanner {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            follow_links: config.follow_links,
            max_depth: config.max_depth,
        }
    }

    /// Walks the source tree and materializes the full work list before any
    /// copy is scheduled. Unreadable subtrees are skipped with a warning; the
    /// scan only fails outright when the root itself is unusable.
    pub fn scan<P: AsRef<Path>>(&self, root: P) -> Result<ScanOutcome> {
        let root_path = root.as_ref();

        if !root_path.exists() {
            return Err(ExtOrgError::SourceNotFound {
                path: root_path.display().to_string(),
            });
        }

        if !root_path.is_dir() {
            return Err(ExtOrgError::NotADirectory {
                path: root_path.display().to_string(),
            });
        }

        let mut outcome = ScanOutcome::default();

        let mut walker = WalkDir::new(root_path).follow_links(self.follow_links);
        if let Some(max_depth) = self.max_depth {
            walker = walker.max_depth(max_depth);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if err
                        .io_error()
                        .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied)
                    {
                        outcome.warnings.push(format!("Permission denied: {}", err));
                    } else {
                        outcome.warnings.push(format!("Scan error: {}", err));
                    }
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            match entry.metadata() {
                Ok(metadata) => {
                    outcome
                        .files
                        .push(SourceFile::new(entry.into_path(), metadata.len()));
                }
                Err(err) => {
                    outcome.warnings.push(format!(
                        "Error reading metadata for {}: {}",
                        entry.path().display(),
                        err
                    ));
                }
            }
        }

        // A root we could not descend into at all is fatal
        if outcome.files.is_empty() && !outcome.warnings.is_empty() {
            return Err(ExtOrgError::Permission {
                path: format!(
                    "{} ({})",
                    root_path.display(),
                    outcome.warnings.join(", ")
                ),
            });
        }

        Ok(outcome)
    }

    pub fn statistics(&self, files: &[SourceFile]) -> ScanStatistics {
        let total_files = files.len();
        let total_bytes = files.iter().map(|f| f.size).sum();

        let mut files_by_extension = std::collections::HashMap::new();
        for file in files {
            let ext = if file.extension.is_empty() {
                "no_extension".to_string()
            } else {
                file.extension.clone()
            };
            *files_by_extension.entry(ext).or_insert(0) += 1;
        }

        ScanStatistics {
            total_files,
            total_bytes,
            files_by_extension,
        }
    }
}

#[derive(Debug, Default)]
pub struct ScanStatistics {
    pub total_files: usize,
    pub total_bytes: u64,
    pub files_by_extension: std::collections::HashMap<String, usize>,
}

impl ScanStatistics {
    pub fn display_summary(&self) -> String {
        let mut summary = format!(
            "Scan results:\n  Total files: {}\n  Total size: {}\n",
            self.total_files,
            format_bytes(self.total_bytes)
        );

        if !self.files_by_extension.is_empty() {
            summary.push_str("  Files by extension:\n");
            let mut extensions: Vec<_> = self.files_by_extension.iter().collect();
            extensions.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

            for (ext, count) in extensions {
                summary.push_str(&format!("    {}: {} files\n", ext, count));
            }
        }

        summary
    }
}

pub(crate) fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.1} {}", size, UNITS[unit_index])
    }
}
