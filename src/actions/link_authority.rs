//! Action registering links to referenced authority records.

use crate::engine::UpdateAction;
use crate::error::Result;
use crate::identifier::RecordId;
use crate::record::{Record, SUBFIELD_AUT_AGENCY, SUBFIELD_AUT_ID};
use crate::result::{Diagnostic, ServiceResult};
use crate::state::UpdateState;
use tracing::{debug, warn};

/// Scans a record for authority references and registers each as a
/// directed link from the record's own identifier to the referenced one.
///
/// A field encodes a reference when it carries both the authority agency
/// subfield (*5) and the authority record id subfield (*6); the first
/// occurrence of each wins. Fields carrying only one of the pair are
/// skipped silently, and a record with no qualifying fields succeeds with
/// zero link calls — absence of authority links is valid.
///
/// Links are appended in field order with no deduplication: the same
/// target appearing in multiple fields produces multiple append calls,
/// which the repository treats as idempotent. Individual append failures
/// do not stop the scan; every qualifying field is attempted and the
/// aggregated status becomes an error if any attempt failed.
#[derive(Debug)]
pub struct LinkAuthorityAction {
    record: Record,
}

impl LinkAuthorityAction {
    /// Create a link-authority action for a record.
    #[must_use]
    pub fn new(record: Record) -> Self {
        LinkAuthorityAction { record }
    }
}

impl UpdateAction for LinkAuthorityAction {
    fn name(&self) -> &str {
        "LinkAuthorityAction"
    }

    fn perform(&mut self, state: &mut UpdateState<'_>) -> Result<ServiceResult> {
        let source = RecordId::from_record(&self.record)?;
        let mut result = ServiceResult::ok();

        for field in self.record.fields() {
            let agency = field.get_subfield(SUBFIELD_AUT_AGENCY);
            let record_id = field.get_subfield(SUBFIELD_AUT_ID);
            let (Some(agency), Some(record_id)) = (agency, record_id) else {
                continue;
            };

            let Ok(agency_id) = agency.parse::<u32>() else {
                warn!(record = %source, field = %field.tag, agency, "authority agency id is not numeric");
                result.add_diagnostic(Diagnostic::error(format!(
                    "Field {}: authority agency id is not numeric: '{agency}'",
                    field.tag
                )));
                continue;
            };

            let target = RecordId::new(record_id, agency_id);
            match state.repository().link_append(&source, &target) {
                Ok(()) => {
                    debug!(record = %source, authority = %target, field = %field.tag, "linked authority record");
                },
                Err(err) => {
                    warn!(record = %source, authority = %target, error = %err, "link append failed");
                    result.add_diagnostic(Diagnostic::error(format!(
                        "Failed to link record {source} to authority record {target}: {err}"
                    )));
                },
            }
        }

        Ok(result)
    }
}
