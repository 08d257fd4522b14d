//! Guard boundary for route handlers and command dispatch.
//!
//! The evaluator itself only ever returns a boolean. Consumers that
//! propagate errors with `?` (server-side route guards, command handlers)
//! go through [`ensure`], which turns a denial into a typed error.

use thiserror::Error;

use crate::actor::Actor;
use crate::evaluate::evaluate;
use crate::explain::explain;
use crate::requirement::Requirement;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No resolved actor on the request.
    #[error("unauthenticated")]
    Unauthenticated,

    /// The actor failed the requirement.
    #[error("forbidden: {0}")]
    Forbidden(String),
}

/// Access contract for commands and routes (checked before dispatch).
///
/// Implement this on operations that require access; the serving layer
/// enforces the requirement before handing control to the handler.
pub trait RequiredAccess {
    fn required_access(&self) -> Requirement;
}

/// Enforce a requirement, converting a denial into an error.
///
/// Never diverges from [`evaluate`]: the decision is taken there, and the
/// explanation is only consulted to word the `Forbidden` message.
pub fn ensure(actor: Option<&Actor>, requirement: &Requirement) -> Result<(), AccessError> {
    let Some(actor) = actor else {
        return Err(AccessError::Unauthenticated);
    };

    if evaluate(Some(actor), requirement) {
        return Ok(());
    }

    let explanation = explain(Some(actor), requirement);
    let detail = explanation
        .denial
        .map(|denial| denial.message)
        .unwrap_or_else(|| "access denied".to_string());
    Err(AccessError::Forbidden(detail))
}

/// Enforce an operation's declared requirement.
pub fn ensure_for<C: RequiredAccess>(actor: Option<&Actor>, operation: &C) -> Result<(), AccessError> {
    ensure(actor, &operation.required_access())
}
