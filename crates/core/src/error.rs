//! Error types for stylesheet generation and concatenation.

use std::{io, path::PathBuf, result};

/// Errors that can occur while building or reading font faces.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Path \"{}\" does not exist.", path.display())]
    PathNotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot derive a family name from {}", path.display())]
    MalformedGroupKey { path: PathBuf },

    #[error("{} is not under {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("invalid discovery pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to walk directory: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("failed to start I/O thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = result::Result<T, Error>;
