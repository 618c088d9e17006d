//! Processing state shared across an action tree.

use crate::repository::{MimeType, Repository};

/// Caller-owned context passed to every action in a tree.
///
/// Holds the repository handle and the configuration the actions read: the
/// content mimetype used when saving. The engine reads this state but never
/// redefines it, and each top-level request must supply its own — the
/// engine keeps no state between invocations.
///
/// # Examples
///
/// ```
/// use bibup::{MemoryRepository, MimeType, UpdateState};
///
/// let mut repo = MemoryRepository::new();
/// let state = UpdateState::new(&mut repo, MimeType::MarcXchange);
/// assert_eq!(state.mimetype(), MimeType::MarcXchange);
/// ```
#[derive(Debug)]
pub struct UpdateState<'a> {
    repository: &'a mut dyn Repository,
    mimetype: MimeType,
}

impl<'a> UpdateState<'a> {
    /// Create a state over a repository handle with a configured mimetype.
    pub fn new(repository: &'a mut dyn Repository, mimetype: MimeType) -> Self {
        UpdateState {
            repository,
            mimetype,
        }
    }

    /// The repository port.
    pub fn repository(&mut self) -> &mut dyn Repository {
        &mut *self.repository
    }

    /// The content mimetype configured for saves in this tree.
    #[must_use]
    pub fn mimetype(&self) -> MimeType {
        self.mimetype
    }
}
