use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    /// An external tool is missing, cannot be started, or exited non-zero.
    #[error("subprocess `{command}` failed: {reason}")]
    SubprocessFailure { command: String, reason: String },

    /// The target directory cannot be listed.
    #[error("cannot list directory `{}`: {source}", path.display())]
    FilesystemError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing a comparison block to the output stream failed.
    #[error("output write failed: {0}")]
    OutputWrite(#[from] std::io::Error),
}
