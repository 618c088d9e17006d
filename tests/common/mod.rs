//! Common test helpers and fixtures shared across the test suite.

use bibup::{
    Field, MemoryRepository, MimeType, Record, RecordId, Repository, RepositoryError,
    RepositoryResult,
};
use std::cell::RefCell;

/// One observed repository port call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoCall {
    FetchRecord(RecordId),
    RecordExists(RecordId),
    SaveRecord(RecordId, MimeType),
    RemoveLinks(RecordId),
    LinkAppend(RecordId, RecordId),
}

/// Repository double that journals every port call in order.
///
/// Delegates to a [`MemoryRepository`] so state assertions keep working,
/// and supports injecting failures per operation for error-path tests.
#[derive(Debug, Default)]
pub struct JournalRepository {
    pub inner: MemoryRepository,
    pub calls: RefCell<Vec<RepoCall>>,
    pub fail_save: bool,
    pub fail_remove_links: bool,
    pub fail_link_append: bool,
}

impl JournalRepository {
    pub fn new() -> Self {
        JournalRepository::default()
    }

    /// The journaled calls, in the order they were issued.
    pub fn calls(&self) -> Vec<RepoCall> {
        self.calls.borrow().clone()
    }

    fn record_call(&self, call: RepoCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Repository for JournalRepository {
    fn fetch_record(&self, id: &RecordId) -> RepositoryResult<Record> {
        self.record_call(RepoCall::FetchRecord(id.clone()));
        self.inner.fetch_record(id)
    }

    fn record_exists(&self, id: &RecordId) -> RepositoryResult<bool> {
        self.record_call(RepoCall::RecordExists(id.clone()));
        self.inner.record_exists(id)
    }

    fn save_record(&mut self, record: &Record, mimetype: MimeType) -> RepositoryResult<()> {
        let id = RecordId::from_record(record).expect("test record carries an identifier");
        self.record_call(RepoCall::SaveRecord(id, mimetype));
        if self.fail_save {
            return Err(RepositoryError::Io("save rejected".to_string()));
        }
        self.inner.save_record(record, mimetype)
    }

    fn remove_links(&mut self, id: &RecordId) -> RepositoryResult<()> {
        self.record_call(RepoCall::RemoveLinks(id.clone()));
        if self.fail_remove_links {
            return Err(RepositoryError::Io("remove links rejected".to_string()));
        }
        self.inner.remove_links(id)
    }

    fn link_append(&mut self, from: &RecordId, to: &RecordId) -> RepositoryResult<()> {
        self.record_call(RepoCall::LinkAppend(from.clone(), to.clone()));
        if self.fail_link_append {
            return Err(RepositoryError::Io("link append rejected".to_string()));
        }
        self.inner.link_append(from, to)
    }
}

/// Creates a common record owned by agency 870970.
#[allow(dead_code)]
pub fn create_common_record(id: &str) -> Record {
    Record::builder()
        .field(
            Field::builder("001")
                .subfield_str('a', id)
                .subfield_str('b', "870970")
                .build(),
        )
        .field(Field::builder("245").subfield_str('a', "Eventyr").build())
        .build()
}

/// Creates a field referencing an authority record at agency 870979.
#[allow(dead_code)]
pub fn create_authority_reference(tag: &str, authority_id: &str) -> Field {
    Field::builder(tag)
        .subfield_str('a', "Andersen, H. C.")
        .subfield_str('5', "870979")
        .subfield_str('6', authority_id)
        .build()
}

/// Creates the deletion-marked form of a record.
#[allow(dead_code)]
pub fn create_deletion_of(record: &Record) -> Record {
    let mut deleted = record.clone();
    deleted.add_field(Field::builder("004").subfield_str('r', "d").build());
    deleted
}
