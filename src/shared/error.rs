use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Partial traversal failures still exit with `Success`: only failures that
/// leave no root to walk are reported as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The graph was collected and written (rendering may still have failed)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (manifest missing or unparseable, bad config, I/O error)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for dependency graph collection and rendering.
#[derive(Debug, Error)]
pub enum DepGraphError {
    #[error("Failed to parse manifest: {path}\nDetails: {details}\n\n💡 Hint: The manifest must be a JSON object with an optional \"dependencies\" object")]
    ManifestParse { path: PathBuf, details: String },

    #[error("Entry '{entry}' not found in archive: {archive}\n\n💡 Hint: Check the archive contents or set \"archive_entry\" in the config file")]
    ManifestEntryNotFound { archive: PathBuf, entry: String },

    #[error("Registry lookup failed for {package}@{version}: {reason}")]
    Lookup {
        package: String,
        version: String,
        reason: String,
    },

    #[error("Failed to render diagram: {path}\nDetails: {details}\n\n💡 Hint: Make sure the Mermaid CLI (mmdc) is installed and on your PATH")]
    Render { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileRead { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWrite { path: PathBuf, details: String },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    Config { message: String, hint: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    Security {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl DepGraphError {
    pub fn lookup(package: &str, version: &str, reason: impl Into<String>) -> Self {
        DepGraphError::Lookup {
            package: package.to_string(),
            version: version.to_string(),
            reason: reason.into(),
        }
    }
}
