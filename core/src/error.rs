use thiserror::Error;

/// Failure taxonomy for backend calls. Every call site treats both
/// variants the same way: abandon the call and keep prior state. The
/// distinction exists so logs can tell a dead backend from a bad
/// document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}
