use crate::error::{ExtOrgError, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub scan: ScanConfig,
    pub copy: CopyConfig,
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub follow_links: bool,
    pub max_depth: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct CopyConfig {
    pub destination: PathBuf,
    pub concurrency: Option<usize>,
    pub preserve_mtime: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            follow_links: false,
            max_depth: None, // unlimited
        }
    }
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::new(),
            concurrency: None, // unbounded
            preserve_mtime: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge_with_cli_args(&mut self, cli_args: &CliOverrides) {
        if let Some(ref destination) = cli_args.destination {
            self.copy.destination = destination.clone();
        }

        if let Some(follow_links) = cli_args.follow_links {
            self.scan.follow_links = follow_links;
        }

        if let Some(max_depth) = cli_args.max_depth {
            self.scan.max_depth = Some(max_depth);
        }

        if let Some(concurrency) = cli_args.concurrency {
            self.copy.concurrency = Some(concurrency);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.copy.destination.as_os_str().is_empty() {
            return Err(ExtOrgError::Config {
                message: "Destination directory must be specified".to_string(),
            });
        }

        if self.copy.concurrency == Some(0) {
            return Err(ExtOrgError::Config {
                message: "Concurrency limit must be greater than 0".to_string(),
            });
        }

        if self.scan.max_depth == Some(0) {
            return Err(ExtOrgError::Config {
                message: "Maximum scan depth must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub destination: Option<PathBuf>,
    pub follow_links: Option<bool>,
    pub max_depth: Option<usize>,
    pub concurrency: Option<usize>,
}

impl CliOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_destination(mut self, destination: Option<PathBuf>) -> Self {
        self.destination = destination;
        self
    }

    pub fn with_follow_links(mut self, follow_links: Option<bool>) -> Self {
        self.follow_links = follow_links;
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_concurrency(mut self, concurrency: Option<usize>) -> Self {
        self.concurrency = concurrency;
        self
    }
}
