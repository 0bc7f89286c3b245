//! Error layer for the announcer crate.

use thiserror::Error;

/// Everything that can go wrong while announcing.
///
/// The counting logic itself has no failure path; only the output stream
/// underneath it can fail.
#[derive(Error, Debug)]
pub enum AnnounceError {
    #[error("could not write to the output stream")]
    Io(#[from] std::io::Error),
}

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, AnnounceError>;
