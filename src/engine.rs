//! The action contract and the tree executor.
//!
//! Every update operation is expressed as a tree of small,
//! single-responsibility actions implementing [`UpdateAction`]. An action
//! performs its own local step and may schedule child actions; the
//! [`Engine`] walks the tree depth-first, executes children in their
//! scheduled order, stops at the first failing node, and aggregates every
//! executed node's [`ServiceResult`] bottom-up.
//!
//! The engine is stateless between invocations and single-threaded within
//! one: no action spawns concurrent work, and every repository call blocks
//! the calling thread. Side effects already committed by earlier siblings
//! are not rolled back when a later sibling fails — transactional
//! boundaries spanning multiple actions belong to the caller.
//!
//! # Examples
//!
//! ```
//! use bibup::actions::UpdateRecordAction;
//! use bibup::{Engine, Field, MemoryRepository, MimeType, Record, UpdateState};
//!
//! let record = Record::builder()
//!     .field(
//!         Field::builder("001")
//!             .subfield_str('a', "20611529")
//!             .subfield_str('b', "870970")
//!             .build(),
//!     )
//!     .build();
//!
//! let mut repo = MemoryRepository::new();
//! let mut state = UpdateState::new(&mut repo, MimeType::MarcXchange);
//! let mut action = UpdateRecordAction::new(record);
//!
//! let result = Engine::new().execute(&mut action, &mut state).unwrap();
//! assert!(result.is_ok());
//! ```

use crate::error::Result;
use crate::result::ServiceResult;
use crate::state::UpdateState;
use tracing::debug;

/// The uniform contract every action implements.
///
/// Actions are pure-construction values: each holds the record (or
/// identifier) it operates on and nothing else, and reaches the repository
/// only through the [`UpdateState`] passed to
/// [`perform`](UpdateAction::perform).
///
/// Ordinary business failures — a rejected update, a failed repository
/// write — are reported through the returned [`ServiceResult`]. The `Err`
/// branch is reserved for conditions that halt the whole tree: caller
/// contract violations such as a record without a derivable identifier.
pub trait UpdateAction: std::fmt::Debug {
    /// Short name of the action, used in logs and diagnostics.
    fn name(&self) -> &str;

    /// Perform this action's own local step.
    ///
    /// May schedule child actions for the engine to execute afterwards;
    /// scheduled children are drained through
    /// [`children`](UpdateAction::children).
    ///
    /// # Errors
    ///
    /// Returns an error only for tree-halting conditions; see the trait
    /// documentation.
    fn perform(&mut self, state: &mut UpdateState<'_>) -> Result<ServiceResult>;

    /// Drain the child actions scheduled by the last
    /// [`perform`](UpdateAction::perform) call, in execution order.
    ///
    /// The default is a leaf action with no children.
    fn children(&mut self) -> Vec<Box<dyn UpdateAction>> {
        Vec::new()
    }
}

/// Depth-first executor for action trees.
///
/// Stateless; one engine value can execute any number of trees, but each
/// tree execution needs its own [`UpdateState`].
#[derive(Debug, Default)]
pub struct Engine;

impl Engine {
    /// Create an engine.
    #[must_use]
    pub fn new() -> Self {
        Engine
    }

    /// Execute an action tree and return the aggregated result.
    ///
    /// The action's own step runs first. If it fails, its children are
    /// never built or executed. Otherwise children run depth-first in
    /// scheduled order; the first child reporting an error halts its later
    /// siblings. The aggregate carries the action's own diagnostics
    /// followed by the results of every child that actually ran, including
    /// the failing one.
    ///
    /// # Errors
    ///
    /// Propagates tree-halting errors from any executed action; see
    /// [`UpdateAction::perform`].
    pub fn execute(
        &self,
        action: &mut dyn UpdateAction,
        state: &mut UpdateState<'_>,
    ) -> Result<ServiceResult> {
        debug!(action = action.name(), "executing action");
        let mut aggregate = action.perform(state)?;
        if aggregate.is_error() {
            debug!(action = action.name(), "action failed, skipping children");
            return Ok(aggregate);
        }

        for mut child in action.children() {
            let child_result = self.execute(child.as_mut(), state)?;
            let failed = child_result.is_error();
            aggregate.add_child(child_result);
            if failed {
                debug!(
                    action = action.name(),
                    "child failed, halting remaining siblings"
                );
                break;
            }
        }

        Ok(aggregate)
    }
}
