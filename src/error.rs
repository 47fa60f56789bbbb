//! Error type for the CLI binary.

use idb_api::code::ParseCodeError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The argument is not a recognized code value or name.
    #[error(transparent)]
    Code(#[from] ParseCodeError),

    /// Writing output failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Code(_) => 2,
            Self::Io(_) | Self::Json(_) => 1,
        }
    }
}
