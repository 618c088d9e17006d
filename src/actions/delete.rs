//! Action persisting a record's deletion-marked form.

use crate::engine::UpdateAction;
use crate::error::Result;
use crate::identifier::RecordId;
use crate::record::Record;
use crate::repository::MimeType;
use crate::result::ServiceResult;
use crate::state::UpdateState;
use tracing::{debug, warn};

/// Persists the deletion-marked form of a record.
///
/// A deletion is always written to the repository as a tombstone, never
/// silently dropped: [`deletion_mark_to_store`](Self::deletion_mark_to_store)
/// is a fixed policy, not content-dependent. The record handed to this
/// action already expresses the delete intent in its field values, so the
/// stored form equals the input — the marking is structural bookkeeping in
/// the content, not a change applied at this layer.
#[derive(Debug)]
pub struct DeleteRecordAction {
    record: Record,
    mimetype: Option<MimeType>,
}

impl DeleteRecordAction {
    /// Create a delete action for a record.
    #[must_use]
    pub fn new(record: Record) -> Self {
        DeleteRecordAction {
            record,
            mimetype: None,
        }
    }

    /// Override the mimetype to save under, instead of the state's.
    pub fn set_mimetype(&mut self, mimetype: MimeType) {
        self.mimetype = Some(mimetype);
    }

    /// Whether the deletion must be physically persisted. Always true.
    #[must_use]
    pub fn deletion_mark_to_store(&self) -> bool {
        true
    }

    /// The record this action will persist for the deletion.
    ///
    /// Equal to the input record: round-trip identity for the
    /// single-record deletion case.
    #[must_use]
    pub fn record_to_store(&self) -> &Record {
        &self.record
    }
}

impl UpdateAction for DeleteRecordAction {
    fn name(&self) -> &str {
        "DeleteRecordAction"
    }

    fn perform(&mut self, state: &mut UpdateState<'_>) -> Result<ServiceResult> {
        let id = RecordId::from_record(&self.record)?;
        let mimetype = self.mimetype.unwrap_or(state.mimetype());

        match state.repository().save_record(self.record_to_store(), mimetype) {
            Ok(()) => {
                debug!(record = %id, %mimetype, "stored deletion-marked record");
                Ok(ServiceResult::ok())
            },
            Err(err) => {
                warn!(record = %id, error = %err, "delete save failed");
                Ok(ServiceResult::from_error(format!(
                    "Failed to save deletion of record {id}: {err}"
                )))
            },
        }
    }
}
