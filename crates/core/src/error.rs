use std::path::PathBuf;

/// Errors reported by directory operations.
///
/// Every variant maps to one of the caller-visible failure conditions:
/// *not-found* (an index outside current roster bounds), *duplicate*
/// (re-registering an existing doctor), *malformed input* (an unparseable
/// appointment date) or a storage failure. Operations validate before they
/// mutate, so a returned error always means the session is unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("no doctor at position {0}")]
    DoctorNotFound(usize),
    #[error("no patient at position {0}")]
    PatientNotFound(usize),
    #[error("a doctor named {0} is already registered")]
    DuplicateDoctor(String),
    #[error("invalid appointment date {value:?}: expected YYYY-MM-DD")]
    MalformedDate {
        value: String,
        #[source]
        source: chrono::format::ParseError,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors raised by the flat-file roster store.
///
/// A missing file on load is deliberately *not* an error; it is reported to
/// the caller as "no prior data" (an empty roster).
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to write roster file {path}: {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read roster file {path}: {source}", path = path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type DirectoryResult<T> = std::result::Result<T, DirectoryError>;
