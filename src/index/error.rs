//! Package index error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error raised by a package index operation.
///
/// A package that simply is not there is not an error: content lookups
/// return `Ok(None)` in that case.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("invalid package file name: '{filename}'")]
    InvalidFilename { filename: String },

    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to fetch {url} from upstream")]
    UpstreamFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("`{operation}` is not supported by this index")]
    NotImplemented { operation: &'static str },

    #[error("upstream URL cannot be used as a base: {url}")]
    InvalidUpstream { url: String },
}

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_filename(filename: impl Into<String>) -> Self {
        IndexError::InvalidFilename {
            filename: filename.into(),
        }
    }
}

/// Error raised by a [`Fetcher`](crate::index::Fetcher).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}")]
    Status { status: u16 },
}
