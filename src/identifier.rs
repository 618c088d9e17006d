//! Record identifiers.
//!
//! A [`RecordId`] is the (bibliographic-record-id, agency-id) pair that
//! uniquely addresses one record version within the repository. It is the
//! lookup and mutation key for every repository port operation.

use crate::error::{Result, UpdateError};
use crate::record::{Record, SUBFIELD_AGENCY_ID, SUBFIELD_RECORD_ID, TAG_RECORD_ID};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a record within the repository.
///
/// Immutable after construction; equality and hashing cover both fields.
///
/// # Examples
///
/// ```
/// use bibup::RecordId;
///
/// let id = RecordId::new("20611529", 870_970);
/// assert_eq!(id.to_string(), "20611529:870970");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId {
    /// The bibliographic record id (001 *a).
    pub bibliographic_record_id: String,
    /// The agency owning this record version (001 *b).
    pub agency_id: u32,
}

impl RecordId {
    /// Create an identifier from its two components.
    #[must_use]
    pub fn new(bibliographic_record_id: impl Into<String>, agency_id: u32) -> Self {
        RecordId {
            bibliographic_record_id: bibliographic_record_id.into(),
            agency_id,
        }
    }

    /// Derive the identifier of a record from its own fields.
    ///
    /// Reads field 001: subfield *a carries the bibliographic record id,
    /// subfield *b the agency id. A record that lacks either is a caller
    /// contract violation and fails fast.
    ///
    /// # Errors
    ///
    /// Returns [`UpdateError::MissingIdentifier`] if field 001 or one of its
    /// two identifying subfields is absent, or if the agency id does not
    /// parse as an unsigned integer.
    pub fn from_record(record: &Record) -> Result<Self> {
        let field = record.get_field(TAG_RECORD_ID).ok_or_else(|| {
            UpdateError::MissingIdentifier(format!("field {TAG_RECORD_ID} not found"))
        })?;

        let bibliographic_record_id = field.get_subfield(SUBFIELD_RECORD_ID).ok_or_else(|| {
            UpdateError::MissingIdentifier(format!(
                "subfield *{SUBFIELD_RECORD_ID} not found in field {TAG_RECORD_ID}"
            ))
        })?;

        let agency_value = field.get_subfield(SUBFIELD_AGENCY_ID).ok_or_else(|| {
            UpdateError::MissingIdentifier(format!(
                "subfield *{SUBFIELD_AGENCY_ID} not found in field {TAG_RECORD_ID}"
            ))
        })?;

        let agency_id = agency_value.parse::<u32>().map_err(|_| {
            UpdateError::MissingIdentifier(format!("agency id is not numeric: '{agency_value}'"))
        })?;

        Ok(RecordId::new(bibliographic_record_id, agency_id))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bibliographic_record_id, self.agency_id)
    }
}
