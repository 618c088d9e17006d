//! Service results: the uniform outcome value returned by every action.
//!
//! A [`ServiceResult`] carries a status, an ordered list of diagnostics, and
//! the results of the child actions that were executed. Results are built
//! bottom-up during tree execution and are never mutated after being handed
//! to a parent.
//!
//! The status is derived, not free: a result is [`Status::Error`] exactly
//! when its own diagnostics contain an error-severity entry or any child's
//! status is `Error`. The two mutators ([`ServiceResult::add_diagnostic`]
//! and [`ServiceResult::add_child`]) maintain this invariant, so a
//! `ServiceResult` can never report `Ok` while holding a failure.

use serde::{Deserialize, Serialize};

/// Severity of a single diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    /// Informational message, never affects the status.
    Info,
    /// Something worth surfacing to the caller, still a success.
    Warning,
    /// A failure; forces the carrying result to [`Status::Error`].
    Error,
}

/// Aggregated status of a service result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The action (and every executed child) succeeded.
    Ok,
    /// The action or one of its executed children failed.
    Error,
}

/// A single human-readable diagnostic produced by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable description of the condition.
    pub message: String,
    /// Severity of the condition.
    pub severity: Severity,
}

impl Diagnostic {
    /// Create an informational diagnostic.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    /// Create a warning diagnostic.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    /// Create an error diagnostic.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// Outcome of executing one action, aggregated over its executed children.
///
/// # Examples
///
/// ```
/// use bibup::{Diagnostic, ServiceResult, Status};
///
/// let mut parent = ServiceResult::ok();
/// parent.add_child(ServiceResult::ok());
/// assert_eq!(parent.status(), Status::Ok);
///
/// parent.add_child(ServiceResult::from_error("save rejected"));
/// assert_eq!(parent.status(), Status::Error);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResult {
    status: Status,
    diagnostics: Vec<Diagnostic>,
    children: Vec<ServiceResult>,
}

impl ServiceResult {
    /// Create an empty, successful result.
    #[must_use]
    pub fn ok() -> Self {
        ServiceResult {
            status: Status::Ok,
            diagnostics: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a failed result carrying a single error diagnostic.
    #[must_use]
    pub fn from_error(message: impl Into<String>) -> Self {
        let mut result = ServiceResult::ok();
        result.add_diagnostic(Diagnostic::error(message));
        result
    }

    /// Append a diagnostic, escalating the status on error severity.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity == Severity::Error {
            self.status = Status::Error;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Append an executed child's result, escalating the status on failure.
    ///
    /// Children are appended in execution order; a failed child's result is
    /// included, unexecuted siblings are not represented at all.
    pub fn add_child(&mut self, child: ServiceResult) {
        if child.status == Status::Error {
            self.status = Status::Error;
        }
        self.children.push(child);
    }

    /// The aggregated status.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Check whether the aggregated status is [`Status::Ok`].
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Check whether the aggregated status is [`Status::Error`].
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == Status::Error
    }

    /// This result's own diagnostics, in the order they were attached.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Results of the executed children, in execution order.
    #[must_use]
    pub fn children(&self) -> &[ServiceResult] {
        &self.children
    }

    /// Collect every diagnostic in the tree, depth-first.
    ///
    /// Own diagnostics come before those of the children, matching the
    /// aggregation order: a parent reports its own outcome first, then each
    /// executed child in order.
    #[must_use]
    pub fn flattened_diagnostics(&self) -> Vec<&Diagnostic> {
        let mut collected = Vec::new();
        self.collect_diagnostics(&mut collected);
        collected
    }

    fn collect_diagnostics<'a>(&'a self, into: &mut Vec<&'a Diagnostic>) {
        into.extend(self.diagnostics.iter());
        for child in &self.children {
            child.collect_diagnostics(into);
        }
    }

    /// Serialize the full result tree to a JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------
    // Status invariant
    // ------------------------------------------------------------------

    #[test]
    fn test_ok_is_ok() {
        let result = ServiceResult::ok();
        assert!(result.is_ok());
        assert!(!result.is_error());
    }

    #[test]
    fn test_error_diagnostic_forces_error_status() {
        let mut result = ServiceResult::ok();
        result.add_diagnostic(Diagnostic::error("broken"));
        assert_eq!(result.status(), Status::Error);
    }

    #[test]
    fn test_info_and_warning_keep_ok_status() {
        let mut result = ServiceResult::ok();
        result.add_diagnostic(Diagnostic::info("stored"));
        result.add_diagnostic(Diagnostic::warning("slow save"));
        assert_eq!(result.status(), Status::Ok);
        assert_eq!(result.diagnostics().len(), 2);
    }

    #[test]
    fn test_failed_child_forces_error_status() {
        let mut parent = ServiceResult::ok();
        parent.add_child(ServiceResult::ok());
        assert!(parent.is_ok());

        parent.add_child(ServiceResult::from_error("child failed"));
        assert!(parent.is_error());
    }

    #[test]
    fn test_error_status_is_sticky() {
        let mut parent = ServiceResult::from_error("own failure");
        parent.add_child(ServiceResult::ok());
        parent.add_diagnostic(Diagnostic::info("after the fact"));
        assert!(parent.is_error());
    }

    #[test]
    fn test_nested_child_failure_propagates() {
        let mut inner = ServiceResult::ok();
        inner.add_child(ServiceResult::from_error("deep failure"));

        let mut outer = ServiceResult::ok();
        outer.add_child(inner);
        assert!(outer.is_error());
    }

    // ------------------------------------------------------------------
    // Ordering and flattening
    // ------------------------------------------------------------------

    #[test]
    fn test_children_preserve_execution_order() {
        let mut parent = ServiceResult::ok();
        let mut first = ServiceResult::ok();
        first.add_diagnostic(Diagnostic::info("first"));
        let mut second = ServiceResult::ok();
        second.add_diagnostic(Diagnostic::info("second"));
        parent.add_child(first);
        parent.add_child(second);

        let messages: Vec<&str> = parent
            .children()
            .iter()
            .map(|c| c.diagnostics()[0].message.as_str())
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_flattened_diagnostics_own_before_children() {
        let mut parent = ServiceResult::ok();
        parent.add_diagnostic(Diagnostic::info("parent"));

        let mut child = ServiceResult::ok();
        child.add_diagnostic(Diagnostic::info("child"));
        let mut grandchild = ServiceResult::ok();
        grandchild.add_diagnostic(Diagnostic::info("grandchild"));
        child.add_child(grandchild);
        parent.add_child(child);

        let messages: Vec<&str> = parent
            .flattened_diagnostics()
            .iter()
            .map(|d| d.message.as_str())
            .collect();
        assert_eq!(messages, vec!["parent", "child", "grandchild"]);
    }

    // ------------------------------------------------------------------
    // Serialization
    // ------------------------------------------------------------------

    #[test]
    fn test_to_json_round_trip() {
        let mut result = ServiceResult::ok();
        result.add_diagnostic(Diagnostic::warning("heads up"));
        result.add_child(ServiceResult::from_error("save rejected"));

        let json = result.to_json().unwrap();
        let back: ServiceResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
