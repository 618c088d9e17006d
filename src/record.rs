//! Catalog record structures and operations.
//!
//! This module provides the core record types for working with bibliographic
//! catalog records:
//! - [`Record`] — An ordered sequence of fields
//! - [`Field`] — A tagged group of subfields
//! - [`Subfield`] — A coded data element within a field
//!
//! # Examples
//!
//! Create a record with the builder API:
//!
//! ```
//! use bibup::{Field, Record};
//!
//! let record = Record::builder()
//!     .field(
//!         Field::builder("001")
//!             .subfield_str('a', "20611529")
//!             .subfield_str('b', "870970")
//!             .build(),
//!     )
//!     .field(
//!         Field::builder("100")
//!             .subfield_str('a', "Andersen")
//!             .build(),
//!     )
//!     .build();
//!
//! assert_eq!(record.get_value("001", 'a'), Some("20611529"));
//! ```
//!
//! Field order is preserved through every operation. The engine depends on
//! this: link resolution walks fields in record order, and the stored form
//! of a record must reproduce the input's field sequence exactly.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Tag of the field carrying the record's own identifier.
pub const TAG_RECORD_ID: &str = "001";

/// Subfield code carrying the bibliographic record id inside [`TAG_RECORD_ID`].
pub const SUBFIELD_RECORD_ID: char = 'a';

/// Subfield code carrying the agency id inside [`TAG_RECORD_ID`].
pub const SUBFIELD_AGENCY_ID: char = 'b';

/// Tag of the field carrying record status markers.
pub const TAG_RECORD_STATUS: &str = "004";

/// Subfield code of the deletion marker inside [`TAG_RECORD_STATUS`].
pub const SUBFIELD_DELETION_MARK: char = 'r';

/// Value of the deletion marker subfield for a deletion-marked record.
pub const DELETION_MARK: &str = "d";

/// Subfield code carrying the agency id of a referenced authority record.
pub const SUBFIELD_AUT_AGENCY: char = '5';

/// Subfield code carrying the record id of a referenced authority record.
pub const SUBFIELD_AUT_ID: char = '6';

/// A bibliographic catalog record.
///
/// Fields are stored as a flat, ordered sequence. Insertion order is
/// preserved through mutation and serialization, which keeps the stored
/// representation reproducible and gives link resolution its defined order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Fields in insertion order.
    pub fields: Vec<Field>,
}

/// A data field in a catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field tag (3 digits)
    pub tag: String,
    /// Indicator characters, "00" when unused
    pub indicators: String,
    /// Subfields (stored in `SmallVec` to avoid allocation for typical fields with 4 or fewer subfields)
    pub subfields: SmallVec<[Subfield; 4]>,
}

/// A subfield within a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

impl Record {
    /// Create a new, empty record.
    #[must_use]
    pub fn new() -> Self {
        Record { fields: Vec::new() }
    }

    /// Create a builder for fluently constructing records.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibup::{Field, Record};
    ///
    /// let record = Record::builder()
    ///     .field(Field::builder("001").subfield_str('a', "12345").build())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder {
            record: Record::new(),
        }
    }

    /// Append a field, preserving insertion order.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Iterate over all fields in record order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Iterate over fields matching a specific tag, in record order.
    pub fn fields_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields.iter().filter(move |field| field.tag == tag)
    }

    /// Get the first field with a given tag.
    #[must_use]
    pub fn get_field(&self, tag: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.tag == tag)
    }

    /// Get the first value of a subfield within the first field with a tag.
    ///
    /// First-match semantics on both the field and the subfield.
    #[must_use]
    pub fn get_value(&self, tag: &str, code: char) -> Option<&str> {
        self.get_field(tag).and_then(|field| field.get_subfield(code))
    }

    /// Number of fields in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Check whether the record carries the deletion marker (004 *r = "d").
    ///
    /// A deletion-marked record is stored as a tombstone rather than being
    /// silently dropped; see [`crate::actions::DeleteRecordAction`].
    #[must_use]
    pub fn is_marked_for_deletion(&self) -> bool {
        self.get_value(TAG_RECORD_STATUS, SUBFIELD_DELETION_MARK) == Some(DELETION_MARK)
    }
}

impl Field {
    /// Create a new field with the given tag and default "00" indicators.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Field {
            tag: tag.into(),
            indicators: "00".to_string(),
            subfields: SmallVec::new(),
        }
    }

    /// Create a builder for constructing fields fluently.
    ///
    /// # Examples
    ///
    /// ```
    /// use bibup::Field;
    ///
    /// let field = Field::builder("100")
    ///     .subfield('a', "Andersen".to_string())
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder(tag: impl Into<String>) -> FieldBuilder {
        FieldBuilder {
            field: Field::new(tag),
        }
    }

    /// Add a subfield.
    pub fn add_subfield(&mut self, code: char, value: String) {
        self.subfields.push(Subfield { code, value });
    }

    /// Add a subfield using a string slice.
    ///
    /// Convenience method that converts &str to String automatically.
    pub fn add_subfield_str(&mut self, code: char, value: &str) {
        self.add_subfield(code, value.to_string());
    }

    /// Get first value for a subfield code.
    #[must_use]
    pub fn get_subfield(&self, code: char) -> Option<&str> {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }

    /// Check whether a subfield with the given code is present.
    #[must_use]
    pub fn has_subfield(&self, code: char) -> bool {
        self.subfields.iter().any(|sf| sf.code == code)
    }

    /// Iterate over all subfields.
    pub fn subfields(&self) -> impl Iterator<Item = &Subfield> {
        self.subfields.iter()
    }

    /// Iterate over subfields with a specific code.
    pub fn subfields_by_code(&self, code: char) -> impl Iterator<Item = &str> {
        self.subfields
            .iter()
            .filter(move |sf| sf.code == code)
            .map(|sf| sf.value.as_str())
    }
}

/// Builder for fluently constructing records
///
/// # Examples
///
/// ```
/// use bibup::{Field, Record};
///
/// let record = Record::builder()
///     .field(Field::builder("001").subfield_str('a', "12345").build())
///     .field(Field::builder("245").subfield_str('a', "Title").build())
///     .build();
/// ```
#[derive(Debug)]
pub struct RecordBuilder {
    record: Record,
}

impl RecordBuilder {
    /// Add a data field to the record being built
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.record.add_field(field);
        self
    }

    /// Build the record
    #[must_use]
    pub fn build(self) -> Record {
        self.record
    }
}

/// Builder for fluently constructing fields
#[derive(Debug)]
pub struct FieldBuilder {
    field: Field,
}

impl FieldBuilder {
    /// Set the indicator characters.
    #[must_use]
    pub fn indicators(mut self, indicators: impl Into<String>) -> Self {
        self.field.indicators = indicators.into();
        self
    }

    /// Add a subfield to the field being built
    #[must_use]
    pub fn subfield(mut self, code: char, value: String) -> Self {
        self.field.add_subfield(code, value);
        self
    }

    /// Add a subfield using a string slice
    #[must_use]
    pub fn subfield_str(mut self, code: char, value: &str) -> Self {
        self.field.add_subfield_str(code, value);
        self
    }

    /// Build the field
    #[must_use]
    pub fn build(self) -> Field {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> Record {
        Record::builder()
            .field(
                Field::builder(TAG_RECORD_ID)
                    .subfield_str('a', "20611529")
                    .subfield_str('b', "870970")
                    .build(),
            )
            .field(Field::builder("100").subfield_str('a', "Andersen, H. C.").build())
            .field(
                Field::builder("600")
                    .subfield_str('5', "870979")
                    .subfield_str('6', "11111111")
                    .build(),
            )
            .build()
    }

    // ------------------------------------------------------------------
    // Field order and lookup
    // ------------------------------------------------------------------

    #[test]
    fn test_field_order_is_preserved() {
        let record = sample_record();
        let tags: Vec<&str> = record.fields().map(|f| f.tag.as_str()).collect();
        assert_eq!(tags, vec!["001", "100", "600"]);
    }

    #[test]
    fn test_get_field_first_match() {
        let mut record = sample_record();
        record.add_field(Field::builder("100").subfield_str('a', "Second").build());

        let field = record.get_field("100").unwrap();
        assert_eq!(field.get_subfield('a'), Some("Andersen, H. C."));
    }

    #[test]
    fn test_fields_by_tag() {
        let mut record = sample_record();
        record.add_field(
            Field::builder("600")
                .subfield_str('5', "870979")
                .subfield_str('6', "22222222")
                .build(),
        );

        let ids: Vec<&str> = record
            .fields_by_tag("600")
            .filter_map(|f| f.get_subfield('6'))
            .collect();
        assert_eq!(ids, vec!["11111111", "22222222"]);
    }

    #[test]
    fn test_get_value() {
        let record = sample_record();
        assert_eq!(record.get_value("001", 'a'), Some("20611529"));
        assert_eq!(record.get_value("001", 'b'), Some("870970"));
        assert_eq!(record.get_value("001", 'z'), None);
        assert_eq!(record.get_value("999", 'a'), None);
    }

    // ------------------------------------------------------------------
    // Subfield access
    // ------------------------------------------------------------------

    #[test]
    fn test_get_subfield_first_match() {
        let field = Field::builder("245")
            .subfield_str('a', "first")
            .subfield_str('a', "second")
            .build();
        assert_eq!(field.get_subfield('a'), Some("first"));
    }

    #[test]
    fn test_subfields_by_code() {
        let field = Field::builder("245")
            .subfield_str('a', "first")
            .subfield_str('b', "other")
            .subfield_str('a', "second")
            .build();
        let values: Vec<&str> = field.subfields_by_code('a').collect();
        assert_eq!(values, vec!["first", "second"]);
    }

    #[test]
    fn test_has_subfield() {
        let field = Field::builder("600").subfield_str('5', "870979").build();
        assert!(field.has_subfield('5'));
        assert!(!field.has_subfield('6'));
    }

    #[test]
    fn test_indicators_default_and_override() {
        let field = Field::new("245");
        assert_eq!(field.indicators, "00");

        let field = Field::builder("245").indicators("10").build();
        assert_eq!(field.indicators, "10");
    }

    // ------------------------------------------------------------------
    // Deletion marker
    // ------------------------------------------------------------------

    #[test]
    fn test_deletion_marker_present() {
        let record = Record::builder()
            .field(Field::builder("001").subfield_str('a', "1").build())
            .field(Field::builder("004").subfield_str('r', "d").build())
            .build();
        assert!(record.is_marked_for_deletion());
    }

    #[test]
    fn test_deletion_marker_absent() {
        assert!(!sample_record().is_marked_for_deletion());
    }

    #[test]
    fn test_deletion_marker_other_value() {
        let record = Record::builder()
            .field(Field::builder("004").subfield_str('r', "c").build())
            .build();
        assert!(!record.is_marked_for_deletion());
    }

    // ------------------------------------------------------------------
    // Serialization round trip
    // ------------------------------------------------------------------

    #[test]
    fn test_serde_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
