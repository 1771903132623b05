use crate::copier::{FileCopier, RunSummary};
use crate::error::Result;
use crate::scanner::SourceFile;
use crate::ui::OutputFormatter;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

#[derive(Debug)]
pub struct CopyOutcome {
    pub file: SourceFile,
    pub dest_dir: PathBuf,
    pub result: Result<u64>,
}

/// Fans out one copy task per file and collects every outcome. A failed copy
/// is logged and counted; it never aborts a sibling task or the run.
pub struct CopyDispatcher {
    copier: Arc<FileCopier>,
    concurrency: Option<usize>,
}

impl CopyDispatcher {
    pub fn new(copier: FileCopier) -> Self {
        Self {
            copier: Arc::new(copier),
            concurrency: None,
        }
    }

    /// Bounds the number of copies in flight. Unbounded when `None`.
    pub fn with_concurrency(mut self, limit: Option<usize>) -> Self {
        self.concurrency = limit;
        self
    }

    pub async fn dispatch(
        &self,
        files: Vec<SourceFile>,
        formatter: &OutputFormatter,
    ) -> RunSummary {
        let mut summary = RunSummary::new(files.len());
        let semaphore = self
            .concurrency
            .map(|limit| Arc::new(Semaphore::new(limit)));

        let mut tasks = JoinSet::new();
        for file in files {
            let copier = Arc::clone(&self.copier);
            let semaphore = semaphore.clone();

            tasks.spawn(async move {
                let _permit = match semaphore {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };

                let dest_dir = copier.destination_dir(&file);
                let result = copier.copy(&file).await;
                CopyOutcome {
                    file,
                    dest_dir,
                    result,
                }
            });
        }

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(outcome) => match outcome.result {
                    Ok(bytes) => {
                        formatter.info(&format!(
                            "Copied {} to {}",
                            outcome.file.file_name,
                            outcome.dest_dir.display()
                        ));
                        summary.record_success(&outcome.file, bytes);
                    }
                    Err(error) => {
                        let message = error.to_string();
                        formatter.error(&message);
                        summary.record_failure(message);
                    }
                },
                Err(join_error) => {
                    let message = format!("Copy task failed: {}", join_error);
                    formatter.error(&message);
                    summary.record_failure(message);
                }
            }
        }

        summary.finish();
        summary
    }
}
