//! `trellis-access` — pure access-control evaluation (zero-trust).
//!
//! This crate is intentionally decoupled from HTTP, sessions and storage:
//! the identity layer resolves an [`Actor`], callers declare a
//! [`Requirement`], and [`evaluate`] returns the decision.

pub mod actor;
pub mod evaluate;
pub mod explain;
pub mod guard;
pub mod requirement;
pub mod snapshot;

#[cfg(test)]
pub(crate) mod testkit;

pub use actor::{Actor, Permission, Role, SUPERUSER_ROLE};
pub use evaluate::evaluate;
pub use explain::{AccessExplanation, ActorState, Denial, DenialKind, explain};
pub use guard::{AccessError, RequiredAccess, ensure, ensure_for};
pub use requirement::{RawRequirement, Requirement, Rule};
pub use snapshot::{ActorSnapshot, PermissionSnapshot, RoleSnapshot};
