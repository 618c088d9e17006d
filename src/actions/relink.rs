//! Action rebuilding a stored record's links from its content.

use crate::actions::{LinkAuthorityAction, RemoveLinksAction};
use crate::engine::UpdateAction;
use crate::error::Result;
use crate::identifier::RecordId;
use crate::repository::RepositoryError;
use crate::result::ServiceResult;
use crate::state::UpdateState;
use tracing::{debug, warn};

/// Rebuilds the outgoing links of an already-stored record.
///
/// Fetches the record under the given identifier and schedules
/// [`RemoveLinksAction`] followed by [`LinkAuthorityAction`] over the
/// stored content: existing links are cleared in one set-clear, then
/// re-derived from the record's authority reference fields. Both children
/// are idempotent, so an aborted or failed relink can be retried safely.
///
/// Relinking an identifier with no stored record is an error result, not a
/// fault: the caller asked to rebuild links for something that is not
/// there.
#[derive(Debug)]
pub struct RelinkRecordAction {
    id: RecordId,
    children: Vec<Box<dyn UpdateAction>>,
}

impl RelinkRecordAction {
    /// Create a relink action for a stored record's identifier.
    #[must_use]
    pub fn new(id: RecordId) -> Self {
        RelinkRecordAction {
            id,
            children: Vec::new(),
        }
    }
}

impl UpdateAction for RelinkRecordAction {
    fn name(&self) -> &str {
        "RelinkRecordAction"
    }

    fn perform(&mut self, state: &mut UpdateState<'_>) -> Result<ServiceResult> {
        match state.repository().fetch_record(&self.id) {
            Ok(record) => {
                debug!(record = %self.id, "scheduling relink");
                self.children = vec![
                    Box::new(RemoveLinksAction::new(record.clone())),
                    Box::new(LinkAuthorityAction::new(record)),
                ];
                Ok(ServiceResult::ok())
            },
            Err(RepositoryError::NotFound(_)) => {
                warn!(record = %self.id, "relink of nonexistent record rejected");
                Ok(ServiceResult::from_error(format!(
                    "Cannot relink record {}: record does not exist",
                    self.id
                )))
            },
            Err(err) => Ok(ServiceResult::from_error(format!(
                "Failed to fetch record {}: {err}",
                self.id
            ))),
        }
    }

    fn children(&mut self) -> Vec<Box<dyn UpdateAction>> {
        std::mem::take(&mut self.children)
    }
}
