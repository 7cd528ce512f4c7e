use thiserror::Error;

pub type Result<T> = std::result::Result<T, LegalityError>;

#[derive(Error, Debug)]
pub enum LegalityError {
    /// Species index outside the reference tables.
    #[error("species index {0} is outside the reference tables")]
    OutOfRange(usize),

    /// National dex number with no species in the reference tables.
    #[error("no species with national dex number {0}")]
    InvalidDexNumber(u16),

    /// A growth table failed its integrity check, or a raw growth curve has no table.
    #[error("malformed growth table: {0}")]
    MalformedTable(String),

    /// Trash pattern data could not be used as a match candidate.
    #[error("invalid trash pattern: {0}")]
    InvalidPattern(String),

    #[error("unknown region {0}")]
    UnknownRegion(u8),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pattern file error: {0}")]
    Json(#[from] serde_json::Error),
}
