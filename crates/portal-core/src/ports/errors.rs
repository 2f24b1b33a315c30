use thiserror::Error;

/// Why the catalog could not be fetched. Only displayed, never interpreted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("request timed out")]
    Timeout,

    #[error("backend responded with status {0}")]
    Status(u16),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),
}
