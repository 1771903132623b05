pub mod cli;
pub mod config;
pub mod copier;
pub mod error;
pub mod scanner;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{CliOverrides, Config, CopyConfig, ScanConfig};
pub use error::{ExtOrgError, Result, UserFriendlyError};

// Core functionality re-exports
pub use copier::{CopyDispatcher, CopyOutcome, FileCopier, RunSummary};
pub use scanner::{ScanOutcome, ScanStatistics, SourceFile, TreeScanner};
pub use ui::{OutputFormatter, OutputMode};

use std::path::{Path, PathBuf};

/// Main library interface: scan a source tree, then copy every file into
/// the destination, one extension directory per file type.
pub struct ExtOrg {
    config: Config,
    formatter: OutputFormatter,
}

impl ExtOrg {
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let formatter = OutputFormatter::new(output_mode, verbose, quiet);

        Self { config, formatter }
    }

    /// Create an ExtOrg instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Result<Self> {
        let config = cli_args.load_config()?;
        let output_mode = match cli_args.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        };

        Ok(Self::new(
            config,
            output_mode,
            cli_args.verbose,
            cli_args.quiet,
        ))
    }

    /// Run the full pipeline against one source directory. Fatal errors
    /// (missing source, unreadable root) surface as `Err`; per-file copy
    /// failures are logged, counted in the summary, and swallowed.
    pub async fn organize<P: AsRef<Path>>(&self, source: P) -> Result<RunSummary> {
        self.formatter.start_operation("Scanning source directory");

        let scanner = TreeScanner::new(&self.config.scan);
        let outcome = scanner.scan(source)?;

        for warning in &outcome.warnings {
            self.formatter.warning(warning);
        }

        if outcome.files.is_empty() {
            self.formatter.info("No files found; nothing to copy");
            let mut summary = RunSummary::new(0);
            summary.finish();
            return Ok(summary);
        }

        self.formatter
            .info(&format!("Found {} files", outcome.files.len()));

        let stats = scanner.statistics(&outcome.files);
        self.formatter.debug(&stats.display_summary());

        self.formatter.start_operation("Copying files");

        let copier = FileCopier::new(self.config.copy.destination.clone())
            .with_preserve_mtime(self.config.copy.preserve_mtime);
        let dispatcher =
            CopyDispatcher::new(copier).with_concurrency(self.config.copy.concurrency);

        let summary = dispatcher.dispatch(outcome.files, &self.formatter).await;

        self.formatter.print_run_summary(&summary);

        if summary.all_succeeded() {
            self.formatter
                .success(&format!("Copied {} files", summary.copied));
        } else {
            self.formatter.warning(&format!(
                "Copied {} files, {} failed",
                summary.copied, summary.failed
            ));
        }

        Ok(summary)
    }

    /// Scan only: the (file, destination directory) pairs a run would copy.
    pub fn plan<P: AsRef<Path>>(&self, source: P) -> Result<Vec<(SourceFile, PathBuf)>> {
        let scanner = TreeScanner::new(&self.config.scan);
        let outcome = scanner.scan(source)?;

        for warning in &outcome.warnings {
            self.formatter.warning(warning);
        }

        let copier = FileCopier::new(self.config.copy.destination.clone());
        Ok(outcome
            .files
            .into_iter()
            .map(|file| {
                let dest_dir = copier.destination_dir(&file);
                (file, dest_dir)
            })
            .collect())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn formatter(&self) -> &OutputFormatter {
        &self.formatter
    }

    /// Handle a fatal error with user-friendly output
    pub fn handle_error(&self, error: &ExtOrgError) {
        self.formatter.print_user_friendly_error(error);
    }
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
