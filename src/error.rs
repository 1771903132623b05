use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtOrgError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Source directory not found: {path}")]
    SourceNotFound { path: String },

    #[error("Source is not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Permission denied: {path}")]
    Permission { path: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to copy {source_path} into {dest_dir}: {source}")]
    CopyFailed {
        source_path: String,
        dest_dir: String,
        #[source]
        source: std::io::Error,
    },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ExtOrgError {
    fn user_message(&self) -> String {
        match self {
            ExtOrgError::SourceNotFound { path } => {
                format!("Source directory not found: {}", path)
            }
            ExtOrgError::NotADirectory { path } => {
                format!("Source is not a directory: {}", path)
            }
            ExtOrgError::Permission { path } => {
                format!("Permission denied accessing: {}", path)
            }
            ExtOrgError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            ExtOrgError::CopyFailed {
                source_path,
                dest_dir,
                source,
            } => {
                format!(
                    "Failed to copy {} into {}: {}",
                    source_path, dest_dir, source
                )
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ExtOrgError::SourceNotFound { .. } => Some(
                "Check that the source path exists and is spelled correctly.".to_string(),
            ),
            ExtOrgError::NotADirectory { .. } => Some(
                "The source argument must be a directory, not a file. Point it at the folder you want to organize.".to_string(),
            ),
            ExtOrgError::Permission { .. } => Some(
                "Ensure you have read permission on the source tree and write permission on the destination.".to_string(),
            ),
            ExtOrgError::Config { .. } => Some(
                "Check the command-line flags; run with --help for the accepted values.".to_string(),
            ),
            ExtOrgError::CopyFailed { .. } => Some(
                "Check free space and write permissions on the destination directory.".to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtOrgError>;
