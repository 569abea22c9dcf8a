//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use wfsync::config::ConfigFileError;
use wfsync::transport::HttpError;
use wfsync::wfs::{BuildFailure, ReadFailure, SubmitFailure, SyncError};

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to create the HTTP client
    ClientCreation(HttpError),
    /// Failed to read features
    Read(ReadFailure),
    /// Failed to build or submit a transaction
    Sync(SyncError),
    /// Input file is not GeoJSON features
    InvalidInput { path: String, reason: String },
    /// Failed to read input file
    FileRead { path: String, error: std::io::Error },
    /// Failed to write output file
    FileWrite { path: String, error: std::io::Error },
    /// Failed to render command output
    Output(String),
}

impl CliError {
    /// Returns true if the server rejected the bearer credential.
    pub fn is_unauthorized(&self) -> bool {
        match self {
            CliError::Read(e) => e.is_unauthorized(),
            CliError::Sync(e) => e.is_unauthorized(),
            _ => false,
        }
    }

    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        if self.is_unauthorized() {
            eprintln!();
            eprintln!("The feature server rejected the credential. Make sure:");
            eprintln!("  1. bearer_token is set in the [server] section of config.ini");
            eprintln!("  2. The token has not expired (sign in again to refresh it)");
        }
        match self {
            CliError::Sync(SyncError::Build(BuildFailure::NothingToSubmit { .. })) => {
                eprintln!();
                eprintln!("Only Point features can be written. Updates also need an id,");
                eprintln!("and delete is not supported by the transaction builder.");
            }
            CliError::Read(ReadFailure::Transport(HttpError::Request { .. }))
            | CliError::Sync(SyncError::Submit(SubmitFailure::Transport(HttpError::Request {
                ..
            }))) => {
                eprintln!();
                eprintln!("Could not reach the feature server. Check base_url with:");
                eprintln!("  wfsync config show");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ClientCreation(e) => write!(f, "Failed to create HTTP client: {}", e),
            CliError::Read(e) => write!(f, "{}", e),
            CliError::Sync(e) => write!(f, "{}", e),
            CliError::InvalidInput { path, reason } => {
                write!(f, "Invalid GeoJSON in '{}': {}", path, reason)
            }
            CliError::FileRead { path, error } => {
                write!(f, "Failed to read file '{}': {}", path, error)
            }
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
            CliError::Output(msg) => write!(f, "Failed to render output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ClientCreation(e) => Some(e),
            CliError::Read(e) => Some(e),
            CliError::Sync(e) => Some(e),
            CliError::FileRead { error, .. } => Some(error),
            CliError::FileWrite { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<HttpError> for CliError {
    fn from(e: HttpError) -> Self {
        CliError::ClientCreation(e)
    }
}

impl From<ReadFailure> for CliError {
    fn from(e: ReadFailure) -> Self {
        CliError::Read(e)
    }
}

impl From<SyncError> for CliError {
    fn from(e: SyncError) -> Self {
        CliError::Sync(e)
    }
}

impl From<BuildFailure> for CliError {
    fn from(e: BuildFailure) -> Self {
        CliError::Sync(SyncError::Build(e))
    }
}
