//! Concrete update actions.
//!
//! Each action is a small, independently constructible value implementing
//! [`crate::UpdateAction`]:
//!
//! - [`StoreRecordAction`] — persist a record's content
//! - [`DeleteRecordAction`] — persist a record's deletion-marked form
//! - [`RemoveLinksAction`] — clear a record's outgoing links
//! - [`LinkAuthorityAction`] — register links to referenced authority records
//! - [`UpdateRecordAction`] — the top-level composite for store/delete requests
//! - [`RelinkRecordAction`] — rebuild a stored record's links from its content

mod delete;
mod link_authority;
mod relink;
mod remove_links;
mod store;
mod update;

pub use delete::DeleteRecordAction;
pub use link_authority::LinkAuthorityAction;
pub use relink::RelinkRecordAction;
pub use remove_links::RemoveLinksAction;
pub use store::StoreRecordAction;
pub use update::UpdateRecordAction;
