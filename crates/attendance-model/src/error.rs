use thiserror::Error;

/// Errors that abort normalization of a whole workbook.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Every sheet was skipped, so there is nothing to write.
    #[error("no valid sheets found to update ({skipped} skipped)")]
    NoValidSheets { skipped: usize },
}

pub type Result<T> = std::result::Result<T, NormalizeError>;
