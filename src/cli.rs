use crate::config::{CliOverrides, Config};
use crate::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "extorg")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sort files into folders named after their extension")]
#[command(
    long_about = "ExtOrg recursively scans a source directory and copies every file it finds \
                  into the destination, grouped into one subdirectory per file extension."
)]
#[command(after_help = "EXAMPLES:\n  \
    extorg ~/Downloads ~/sorted\n  \
    extorg ./inbox ./archive --dry-run\n  \
    extorg /mnt/dump /mnt/sorted --concurrency 64 --output-format json\n\n\
    Files without an extension are placed directly under the destination root.")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Directory to scan for files
    pub source: PathBuf,

    /// Directory that receives one subdirectory per extension
    pub destination: PathBuf,

    /// Follow symbolic links while scanning
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum directory depth to scan
    #[arg(long, help = "Limit how deep the scan descends into subdirectories")]
    pub max_depth: Option<usize>,

    /// Maximum number of copies in flight
    #[arg(
        short,
        long,
        help = "Bound concurrent copy operations (unbounded when omitted)"
    )]
    pub concurrency: Option<usize>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be copied without executing)
    #[arg(long, help = "Show where each file would go without copying anything")]
    pub dry_run: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::default();

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_destination(Some(self.destination.clone()))
            .with_follow_links(self.follow_links.then_some(true))
            .with_max_depth(self.max_depth)
            .with_concurrency(self.concurrency)
    }

    pub fn should_use_colors(&self) -> bool {
        !self.quiet && console::Term::stdout().features().colors_supported()
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_positional_arguments() {
        let cli = parse(&["extorg", "/src", "/dest"]);
        assert_eq!(cli.source, PathBuf::from("/src"));
        assert_eq!(cli.destination, PathBuf::from("/dest"));
        assert!(!cli.dry_run);
        assert!(cli.concurrency.is_none());
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Cli::try_parse_from(["extorg", "/src"]).is_err());
        assert!(Cli::try_parse_from(["extorg"]).is_err());
    }

    #[test]
    fn test_flags() {
        let cli = parse(&[
            "extorg",
            "/src",
            "/dest",
            "--follow-links",
            "--max-depth",
            "3",
            "--concurrency",
            "16",
            "--dry-run",
        ]);
        assert!(cli.follow_links);
        assert_eq!(cli.max_depth, Some(3));
        assert_eq!(cli.concurrency, Some(16));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["extorg", "/src", "/dest", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_verbosity_level() {
        let cli = parse(&["extorg", "/src", "/dest", "-vv"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = parse(&["extorg", "/src", "/dest", "--quiet"]);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_load_config_applies_overrides() {
        let cli = parse(&["extorg", "/src", "/dest", "--concurrency", "8"]);
        let config = cli.load_config().unwrap();

        assert_eq!(config.copy.destination, PathBuf::from("/dest"));
        assert_eq!(config.copy.concurrency, Some(8));
        assert!(!config.scan.follow_links);
    }

    #[test]
    fn test_load_config_rejects_zero_concurrency() {
        let cli = parse(&["extorg", "/src", "/dest", "--concurrency", "0"]);
        assert!(cli.load_config().is_err());
    }
}
