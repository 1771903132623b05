use crate::scanner::SourceFile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Aggregate outcome of one run. Per-file failures are recorded here for the
/// end-of-run summary; they never influence the process exit code.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total_files: usize,
    pub copied: usize,
    pub failed: usize,
    pub bytes_copied: u64,
    pub files_by_extension: HashMap<String, usize>,
    pub errors: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
    #[serde(skip)]
    start: Instant,
}

impl RunSummary {
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            copied: 0,
            failed: 0,
            bytes_copied: 0,
            files_by_extension: HashMap::new(),
            errors: Vec::new(),
            started_at: Utc::now(),
            duration: Duration::from_secs(0),
            start: Instant::now(),
        }
    }

    pub fn record_success(&mut self, file: &SourceFile, bytes: u64) {
        self.copied += 1;
        self.bytes_copied += bytes;

        let ext = if file.extension.is_empty() {
            "no_extension".to_string()
        } else {
            file.extension.clone()
        };
        *self.files_by_extension.entry(ext).or_insert(0) += 1;
    }

    pub fn record_failure<S: Into<String>>(&mut self, error: S) {
        self.failed += 1;
        self.errors.push(error.into());
    }

    pub fn finish(&mut self) {
        self.duration = self.start.elapsed();
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}
