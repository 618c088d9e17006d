//! Action clearing a record's outgoing links.

use crate::engine::UpdateAction;
use crate::error::Result;
use crate::identifier::RecordId;
use crate::record::Record;
use crate::result::ServiceResult;
use crate::state::UpdateState;
use tracing::{debug, warn};

/// Deletes all outgoing links of the identifier derived from a record.
///
/// The record's own content is untouched. The repository operation is a
/// single set-clear regardless of how many links currently exist, so the
/// action is idempotent: running it again against a record with no
/// remaining links is a no-op that still succeeds.
///
/// The record must carry a derivable identifier; its absence is a caller
/// contract violation and fails the tree fast.
#[derive(Debug)]
pub struct RemoveLinksAction {
    record: Record,
}

impl RemoveLinksAction {
    /// Create a remove-links action for a record.
    #[must_use]
    pub fn new(record: Record) -> Self {
        RemoveLinksAction { record }
    }
}

impl UpdateAction for RemoveLinksAction {
    fn name(&self) -> &str {
        "RemoveLinksAction"
    }

    fn perform(&mut self, state: &mut UpdateState<'_>) -> Result<ServiceResult> {
        let id = RecordId::from_record(&self.record)?;

        match state.repository().remove_links(&id) {
            Ok(()) => {
                debug!(record = %id, "removed outgoing links");
                Ok(ServiceResult::ok())
            },
            Err(err) => {
                warn!(record = %id, error = %err, "remove links failed");
                Ok(ServiceResult::from_error(format!(
                    "Failed to remove links of record {id}: {err}"
                )))
            },
        }
    }
}
