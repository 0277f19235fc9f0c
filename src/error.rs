//! Errors raised while writing the icon batch.

use std::path::PathBuf;

use thiserror::Error;

/// A failure on one output entry. Any of these aborts the whole batch.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {} as PNG", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
