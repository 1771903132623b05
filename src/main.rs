use clap::Parser;
use extorg::{Cli, ExtOrg, ExtOrgError, OutputFormatter, OutputMode};
use std::process;

#[tokio::main]
async fn main() {
    let exit_code = run().await;
    process::exit(exit_code);
}

async fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Create ExtOrg instance
    let extorg = match ExtOrg::from_cli(&cli) {
        Ok(extorg) => extorg,
        Err(e) => {
            print_startup_error(&e);
            return 1;
        }
    };

    // Handle dry run mode
    if cli.dry_run {
        return handle_dry_run(&cli, &extorg);
    }

    // Execute the copy run. Per-file failures are logged inside organize()
    // and do not change the exit code.
    match extorg.organize(&cli.source).await {
        Ok(_summary) => 0,
        Err(e) => {
            extorg.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &ExtOrgError) -> i32 {
    match error {
        ExtOrgError::SourceNotFound { .. } | ExtOrgError::NotADirectory { .. } => 3,
        ExtOrgError::Permission { .. } => 7,
        _ => 1,
    }
}

fn handle_dry_run(cli: &Cli, extorg: &ExtOrg) -> i32 {
    let formatter = extorg.formatter();

    formatter.info("DRY RUN MODE - no files will be copied");

    match extorg.plan(&cli.source) {
        Ok(plan) => {
            for (file, dest_dir) in &plan {
                println!("  {} -> {}", file.path.display(), dest_dir.display());
            }
            formatter.success(&format!("{} files would be copied", plan.len()));
            0
        }
        Err(e) => {
            extorg.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn print_startup_error(error: &ExtOrgError) {
    // Basic formatter for errors raised before the app exists
    let formatter = OutputFormatter::new(OutputMode::Human, 0, false);
    formatter.print_user_friendly_error(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cli_for(source: PathBuf, destination: PathBuf) -> Cli {
        Cli::try_parse_from([
            "extorg",
            source.to_str().unwrap(),
            destination.to_str().unwrap(),
            "--quiet",
            "--dry-run",
        ])
        .unwrap()
    }

    #[test]
    fn test_exit_code_mapping() {
        let not_found = ExtOrgError::SourceNotFound {
            path: "/nope".to_string(),
        };
        assert_eq!(exit_code_for(&not_found), 3);

        let permission = ExtOrgError::Permission {
            path: "/secret".to_string(),
        };
        assert_eq!(exit_code_for(&permission), 7);

        let config = ExtOrgError::Config {
            message: "bad".to_string(),
        };
        assert_eq!(exit_code_for(&config), 1);
    }

    #[test]
    fn test_dry_run_copies_nothing() {
        let source_dir = TempDir::new().unwrap();
        let dest_dir = TempDir::new().unwrap();
        fs::write(source_dir.path().join("a.txt"), "alpha").unwrap();

        let cli = cli_for(
            source_dir.path().to_path_buf(),
            dest_dir.path().to_path_buf(),
        );
        let extorg = ExtOrg::from_cli(&cli).unwrap();

        let exit_code = handle_dry_run(&cli, &extorg);
        assert_eq!(exit_code, 0);
        assert!(!dest_dir.path().join("txt").exists());
    }

    #[test]
    fn test_dry_run_with_missing_source() {
        let dest_dir = TempDir::new().unwrap();

        let cli = cli_for(PathBuf::from("/no/such/dir"), dest_dir.path().to_path_buf());
        let extorg = ExtOrg::from_cli(&cli).unwrap();

        let exit_code = handle_dry_run(&cli, &extorg);
        assert_eq!(exit_code, 3);
    }
}
