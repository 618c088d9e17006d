//! Action persisting a record's content.

use crate::engine::UpdateAction;
use crate::error::Result;
use crate::identifier::RecordId;
use crate::record::Record;
use crate::repository::MimeType;
use crate::result::ServiceResult;
use crate::state::UpdateState;
use tracing::{debug, warn};

/// Persists a record to the repository as-is.
///
/// The record is written under the identifier derived from its own fields,
/// with the mimetype configured on the action or, absent that, the one
/// configured on the processing state.
#[derive(Debug)]
pub struct StoreRecordAction {
    record: Record,
    mimetype: Option<MimeType>,
}

impl StoreRecordAction {
    /// Create a store action for a record.
    #[must_use]
    pub fn new(record: Record) -> Self {
        StoreRecordAction {
            record,
            mimetype: None,
        }
    }

    /// Override the mimetype to save under, instead of the state's.
    pub fn set_mimetype(&mut self, mimetype: MimeType) {
        self.mimetype = Some(mimetype);
    }

    /// The record this action will persist: the input, unchanged.
    #[must_use]
    pub fn record_to_store(&self) -> &Record {
        &self.record
    }

    /// Whether the stored form carries a deletion mark. Always false here;
    /// see [`crate::actions::DeleteRecordAction`] for the deletion variant.
    #[must_use]
    pub fn deletion_mark_to_store(&self) -> bool {
        false
    }
}

impl UpdateAction for StoreRecordAction {
    fn name(&self) -> &str {
        "StoreRecordAction"
    }

    fn perform(&mut self, state: &mut UpdateState<'_>) -> Result<ServiceResult> {
        let id = RecordId::from_record(&self.record)?;
        let mimetype = self.mimetype.unwrap_or(state.mimetype());

        match state.repository().save_record(self.record_to_store(), mimetype) {
            Ok(()) => {
                debug!(record = %id, %mimetype, "stored record");
                Ok(ServiceResult::ok())
            },
            Err(err) => {
                warn!(record = %id, error = %err, "store failed");
                Ok(ServiceResult::from_error(format!(
                    "Failed to save record {id}: {err}"
                )))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::memory::MemoryRepository;
    use crate::record::Field;

    fn sample_record() -> Record {
        Record::builder()
            .field(
                Field::builder("001")
                    .subfield_str('a', "20611529")
                    .subfield_str('b', "870970")
                    .build(),
            )
            .field(Field::builder("245").subfield_str('a', "Title").build())
            .build()
    }

    #[test]
    fn test_store_persists_record_under_state_mimetype() {
        let mut repo = MemoryRepository::new();
        {
            let mut state = UpdateState::new(&mut repo, MimeType::MarcXchange);
            let mut action = StoreRecordAction::new(sample_record());
            let result = Engine::new().execute(&mut action, &mut state).unwrap();
            assert!(result.is_ok());
        }

        let id = RecordId::new("20611529", 870_970);
        let (stored, mimetype) = repo.record(&id).unwrap();
        assert_eq!(stored, &sample_record());
        assert_eq!(*mimetype, MimeType::MarcXchange);
    }

    #[test]
    fn test_store_mimetype_override_wins() {
        let mut repo = MemoryRepository::new();
        {
            let mut state = UpdateState::new(&mut repo, MimeType::MarcXchange);
            let mut action = StoreRecordAction::new(sample_record());
            action.set_mimetype(MimeType::AuthorityXchange);
            Engine::new().execute(&mut action, &mut state).unwrap();
        }

        let id = RecordId::new("20611529", 870_970);
        let (_, mimetype) = repo.record(&id).unwrap();
        assert_eq!(*mimetype, MimeType::AuthorityXchange);
    }

    #[test]
    fn test_store_without_identifier_fails_fast() {
        let mut repo = MemoryRepository::new();
        let mut state = UpdateState::new(&mut repo, MimeType::MarcXchange);
        let mut action = StoreRecordAction::new(Record::new());
        assert!(Engine::new().execute(&mut action, &mut state).is_err());
    }

    #[test]
    fn test_deletion_mark_to_store_is_false() {
        let action = StoreRecordAction::new(sample_record());
        assert!(!action.deletion_mark_to_store());
    }
}
