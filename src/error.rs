//! Error types for update engine operations.
//!
//! This module provides the [`UpdateError`] type for all engine operations
//! and the [`Result`] convenience type.

use crate::repository::RepositoryError;
use thiserror::Error;

/// Error type for all update engine operations.
///
/// Ordinary business outcomes (a rejected update, a failed repository write)
/// are reported through [`crate::ServiceResult`] values, not through this
/// type. `UpdateError` covers the conditions that halt an action tree
/// entirely: caller contract violations and repository faults surfaced
/// outside of an action's own failure handling.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The record does not carry the fields needed to derive its identifier.
    ///
    /// Supplying a record with a resolvable identifier is a caller
    /// precondition; this error fails the whole tree fast rather than
    /// guessing at an identity.
    #[error("Record is missing identifier data: {0}")]
    MissingIdentifier(String),

    /// Error indicating an invalid or malformed record.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// A repository port call failed outside of an action's own failure
    /// handling.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Convenience type alias for [`std::result::Result`] with [`UpdateError`].
pub type Result<T> = std::result::Result<T, UpdateError>;
