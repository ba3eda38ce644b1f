//! Error type shared by the shell.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Objective-C class `{0}` is not available")]
    ClassNotFound(String),

    #[error("invalid target URL: {0:?}")]
    InvalidUrl(String),

    #[error("view is not attached to a window")]
    NoWindow,

    #[error("native call failed: {0}")]
    Native(String),

    #[error("failed to open {url} in the default browser")]
    OpenLink {
        url: String,
        #[source]
        source: std::io::Error,
    },
}
