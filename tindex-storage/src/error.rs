use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("page full: {remaining} bytes left")]
    PageFull { remaining: usize },

    #[error("out of order: {id} after {last}")]
    OutOfOrder { last: u64, id: u64 },

    #[error("zero cannot be stored as the first id")]
    ZeroId,

    #[error("unsupported page size: {0}")]
    UnsupportedPageSize(usize),

    #[error("page size mismatch: expected {expected}, found {found}")]
    PageSizeMismatch { expected: usize, found: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
