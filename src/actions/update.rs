//! Top-level composite action for store/delete requests.

use crate::actions::{
    DeleteRecordAction, LinkAuthorityAction, RemoveLinksAction, StoreRecordAction,
};
use crate::engine::UpdateAction;
use crate::error::Result;
use crate::identifier::RecordId;
use crate::record::Record;
use crate::repository::MimeType;
use crate::result::ServiceResult;
use crate::state::UpdateState;
use tracing::{debug, warn};

/// Applies an update request for one record.
///
/// The top-level action a caller builds from an input record. Its own step
/// validates deletion preconditions and schedules the children that carry
/// the work:
///
/// - deletion-marked record: [`RemoveLinksAction`] then
///   [`DeleteRecordAction`] — clear referential state before the tombstone
///   is written
/// - anything else: [`StoreRecordAction`], [`RemoveLinksAction`], then
///   [`LinkAuthorityAction`] — persist the new content, drop links derived
///   from the previous content, re-derive links from the new content
#[derive(Debug)]
pub struct UpdateRecordAction {
    record: Record,
    mimetype: Option<MimeType>,
    children: Vec<Box<dyn UpdateAction>>,
}

impl UpdateRecordAction {
    /// Create an update action for an input record.
    #[must_use]
    pub fn new(record: Record) -> Self {
        UpdateRecordAction {
            record,
            mimetype: None,
            children: Vec::new(),
        }
    }

    /// Override the mimetype the scheduled store/delete child saves under.
    pub fn set_mimetype(&mut self, mimetype: MimeType) {
        self.mimetype = Some(mimetype);
    }
}

impl UpdateAction for UpdateRecordAction {
    fn name(&self) -> &str {
        "UpdateRecordAction"
    }

    fn perform(&mut self, state: &mut UpdateState<'_>) -> Result<ServiceResult> {
        let id = RecordId::from_record(&self.record)?;

        if self.record.is_marked_for_deletion() {
            match state.repository().record_exists(&id) {
                Ok(true) => {},
                Ok(false) => {
                    warn!(record = %id, "deletion of nonexistent record rejected");
                    return Ok(ServiceResult::from_error(format!(
                        "Cannot delete record {id}: record does not exist"
                    )));
                },
                Err(err) => {
                    return Ok(ServiceResult::from_error(format!(
                        "Failed to check existence of record {id}: {err}"
                    )));
                },
            }

            debug!(record = %id, "scheduling deletion");
            let mut delete = DeleteRecordAction::new(self.record.clone());
            if let Some(mimetype) = self.mimetype {
                delete.set_mimetype(mimetype);
            }
            self.children = vec![
                Box::new(RemoveLinksAction::new(self.record.clone())),
                Box::new(delete),
            ];
        } else {
            debug!(record = %id, "scheduling store");
            let mut store = StoreRecordAction::new(self.record.clone());
            if let Some(mimetype) = self.mimetype {
                store.set_mimetype(mimetype);
            }
            self.children = vec![
                Box::new(store),
                Box::new(RemoveLinksAction::new(self.record.clone())),
                Box::new(LinkAuthorityAction::new(self.record.clone())),
            ];
        }

        Ok(ServiceResult::ok())
    }

    fn children(&mut self) -> Vec<Box<dyn UpdateAction>> {
        std::mem::take(&mut self.children)
    }
}
