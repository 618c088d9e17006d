//! In-memory repository implementation.
//!
//! [`MemoryRepository`] is a complete, self-contained implementation of the
//! [`Repository`] port backed by insertion-ordered maps. It is the
//! substitute backend used by the test suite and by callers exercising
//! action trees without an external store.

use crate::identifier::RecordId;
use crate::record::Record;
use crate::repository::{MimeType, Repository, RepositoryError, RepositoryResult};
use indexmap::{IndexMap, IndexSet};

/// An in-memory record store with link tracking.
///
/// Records and links are held in insertion-ordered maps so that stored
/// state is reproducible: `links_from` reports edges in the order they were
/// appended, matching the engine's field-order link derivation.
///
/// # Examples
///
/// ```
/// use bibup::{Field, MemoryRepository, MimeType, Record, Repository};
///
/// let record = Record::builder()
///     .field(
///         Field::builder("001")
///             .subfield_str('a', "20611529")
///             .subfield_str('b', "870970")
///             .build(),
///     )
///     .build();
///
/// let mut repo = MemoryRepository::new();
/// repo.save_record(&record, MimeType::MarcXchange).unwrap();
/// assert_eq!(repo.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: IndexMap<RecordId, (Record, MimeType)>,
    links: IndexMap<RecordId, IndexSet<RecordId>>,
}

impl MemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        MemoryRepository::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the repository holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a stored record and the mimetype it was saved under.
    #[must_use]
    pub fn record(&self, id: &RecordId) -> Option<&(Record, MimeType)> {
        self.records.get(id)
    }

    /// Outgoing links of an identifier, in append order.
    #[must_use]
    pub fn links_from(&self, id: &RecordId) -> Vec<&RecordId> {
        self.links
            .get(id)
            .map(|targets| targets.iter().collect())
            .unwrap_or_default()
    }
}

impl Repository for MemoryRepository {
    fn fetch_record(&self, id: &RecordId) -> RepositoryResult<Record> {
        self.records
            .get(id)
            .map(|(record, _)| record.clone())
            .ok_or_else(|| RepositoryError::NotFound(id.clone()))
    }

    fn record_exists(&self, id: &RecordId) -> RepositoryResult<bool> {
        Ok(self.records.contains_key(id))
    }

    fn save_record(&mut self, record: &Record, mimetype: MimeType) -> RepositoryResult<()> {
        let id = RecordId::from_record(record)
            .map_err(|err| RepositoryError::Corrupt(err.to_string()))?;
        self.records.insert(id, (record.clone(), mimetype));
        Ok(())
    }

    fn remove_links(&mut self, id: &RecordId) -> RepositoryResult<()> {
        self.links.shift_remove(id);
        Ok(())
    }

    fn link_append(&mut self, from: &RecordId, to: &RecordId) -> RepositoryResult<()> {
        self.links
            .entry(from.clone())
            .or_default()
            .insert(to.clone());
        Ok(())
    }
}
