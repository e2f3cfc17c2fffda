use thiserror::Error;

/// Everything that can go wrong while decoding an IGC file.
///
#[derive(Debug, Error, PartialEq)]
pub enum IgcError {
    #[error("Bad B record at line {0}: {1}")]
    BadFix(usize, String),
    #[error("Bad date header at line {0}: {1}")]
    BadDate(usize, String),
    #[error("No date header (HFDTE) found.")]
    MissingDate,
    #[error("No fix (B record) found.")]
    NoFixes,
}
