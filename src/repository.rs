//! The repository port: the external record store consumed by the engine.
//!
//! This module defines the [`Repository`] trait that every store backend
//! must implement, giving the action engine a uniform, blocking interface
//! for fetching, saving, and linking records regardless of the backing
//! technology.
//!
//! # Design Rationale
//!
//! The trait is designed to:
//! - Be object-safe, so actions can hold `&mut dyn Repository` through the
//!   processing state rather than being generic over the backend
//! - Keep link storage on the repository side: a record's fields only
//!   encode the information links are derived from
//! - Make [`remove_links`](Repository::remove_links) a single set-clear and
//!   [`link_append`](Repository::link_append) idempotent, so aborted or
//!   failed trees can be retried safely
//!
//! Concurrency control (per-identifier serialization, transactions) is the
//! backend's responsibility and opaque to the engine. The engine never
//! accesses a repository through global state; the handle is injected by
//! the caller via [`crate::UpdateState`].

use crate::identifier::RecordId;
use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for repository port operations.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No record version exists under the given identifier.
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    /// The backend could not be reached or rejected the operation.
    #[error("Repository I/O error: {0}")]
    Io(String),

    /// The record payload was invalid or could not be decoded.
    #[error("Invalid record data: {0}")]
    Corrupt(String),
}

/// Convenience type alias for repository port results.
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Content mimetype a record is saved under.
///
/// Names the MARC-XML-derived exchange format of the stored payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MimeType {
    /// text/marcxchange - common bibliographic records
    #[default]
    MarcXchange,
    /// text/article+marcxchange - article records
    ArticleXchange,
    /// text/authority+marcxchange - authority records
    AuthorityXchange,
    /// text/enrichment+marcxchange - agency enrichment records
    EnrichmentXchange,
}

impl MimeType {
    /// The mime string used on the wire and in the store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MimeType::MarcXchange => "text/marcxchange",
            MimeType::ArticleXchange => "text/article+marcxchange",
            MimeType::AuthorityXchange => "text/authority+marcxchange",
            MimeType::EnrichmentXchange => "text/enrichment+marcxchange",
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The external record store abstraction consumed by the engine.
///
/// All operations are blocking; the calling thread is occupied for the
/// duration of each call. Implementations decide their own concurrency
/// control and durability.
///
/// # Idempotency contract
///
/// - [`remove_links`](Self::remove_links) clears the identifier's outgoing
///   link set in one call; invoking it with no remaining links is a no-op.
/// - [`link_append`](Self::link_append) treats a duplicate edge as a no-op.
///   The engine issues one append per qualifying field without
///   deduplication and relies on this.
pub trait Repository: std::fmt::Debug {
    /// Fetch the record stored under an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no record version exists
    /// under the identifier, or an I/O error if the backend fails.
    fn fetch_record(&self, id: &RecordId) -> RepositoryResult<Record>;

    /// Check whether a record exists under an identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn record_exists(&self, id: &RecordId) -> RepositoryResult<bool>;

    /// Save a record under the identifier derived from its own fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the write is rejected or the backend fails.
    fn save_record(&mut self, record: &Record, mimetype: MimeType) -> RepositoryResult<()>;

    /// Remove every outgoing link of an identifier in one set-clear.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn remove_links(&mut self, id: &RecordId) -> RepositoryResult<()>;

    /// Append a directed link between two identifiers.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails.
    fn link_append(&mut self, from: &RecordId, to: &RecordId) -> RepositoryResult<()>;
}
