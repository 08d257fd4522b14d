//! Explained access decisions (audit trail).
//!
//! `explain` answers "why was this allowed or denied?" with the same
//! decision `evaluate` produces plus the actor's state and the first
//! failing clause. Useful for admin dashboards and support tooling; the hot
//! path should keep calling [`evaluate`](crate::evaluate::evaluate).

use serde::Serialize;

use trellis_core::ActorId;

use crate::actor::Actor;
use crate::evaluate::{missing_permissions, roles_satisfied};
use crate::requirement::{Requirement, Rule, SUPER_OVERRIDES_DEFAULT};

/// Detailed explanation of an access decision.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    /// Whether access was granted.
    pub allowed: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// State of the actor being checked; `None` when unauthenticated.
    pub actor: Option<ActorState>,

    /// If denied, what was missing.
    pub denial: Option<Denial>,
}

/// Snapshot of the actor's grants at decision time.
#[derive(Debug, Clone, Serialize)]
pub struct ActorState {
    pub actor_id: ActorId,
    pub roles: Vec<String>,
    pub effective_permissions: Vec<String>,
    pub is_superuser: bool,
}

/// Why access was denied.
#[derive(Debug, Clone, Serialize)]
pub struct Denial {
    pub kind: DenialKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    Unauthenticated,
    NotSuperuser,
    MissingRole,
    MissingPermission,
    NoAlternative,
}

/// Explain the decision `evaluate` would make for the same inputs.
///
/// The two functions share their clause logic, and a property test pins
/// `explain(..).allowed == evaluate(..)` for generated inputs.
pub fn explain(actor: Option<&Actor>, requirement: &Requirement) -> AccessExplanation {
    let Some(actor) = actor else {
        return AccessExplanation {
            allowed: false,
            reason: "no authenticated actor".to_string(),
            actor: None,
            denial: Some(Denial {
                kind: DenialKind::Unauthenticated,
                message: "the request carries no resolved actor".to_string(),
            }),
        };
    };

    let is_super = actor.is_super();
    let state = actor_state(actor, is_super);

    match first_denial(actor, is_super, requirement, SUPER_OVERRIDES_DEFAULT) {
        None => {
            let reason = if is_super {
                format!("actor {} satisfies the requirement (superuser standing)", actor.id)
            } else {
                format!("actor {} satisfies the requirement", actor.id)
            };
            AccessExplanation {
                allowed: true,
                reason,
                actor: Some(state),
                denial: None,
            }
        }
        Some(denial) => AccessExplanation {
            allowed: false,
            reason: denial.message.clone(),
            actor: Some(state),
            denial: Some(denial),
        },
    }
}

fn actor_state(actor: &Actor, is_super: bool) -> ActorState {
    let mut effective: Vec<String> = actor
        .effective_permissions()
        .into_iter()
        .map(|slug| slug.as_str().to_string())
        .collect();
    effective.sort();

    ActorState {
        actor_id: actor.id,
        roles: actor.roles.iter().map(|r| r.slug.as_str().to_string()).collect(),
        effective_permissions: effective,
        is_superuser: is_super,
    }
}

/// Mirror of the evaluation fold that reports the first failing clause
/// instead of a boolean. `None` means the subtree passes.
fn first_denial(
    actor: &Actor,
    is_super: bool,
    requirement: &Requirement,
    inherited: bool,
) -> Option<Denial> {
    let bypass = requirement.super_overrides().unwrap_or(inherited);

    match requirement.rule() {
        Rule::Superuser => (!is_super).then(|| Denial {
            kind: DenialKind::NotSuperuser,
            message: "requirement demands superuser standing".to_string(),
        }),
        Rule::Any(children) => {
            if children
                .iter()
                .any(|child| first_denial(actor, is_super, child, bypass).is_none())
            {
                return None;
            }
            children
                .iter()
                .find_map(|child| first_denial(actor, is_super, child, bypass))
                .or_else(|| {
                    Some(Denial {
                        kind: DenialKind::NoAlternative,
                        message: "rule lists no alternatives".to_string(),
                    })
                })
        }
        Rule::All(children) => children
            .iter()
            .find_map(|child| first_denial(actor, is_super, child, bypass)),
        Rule::Roles(slugs) => {
            if (bypass && is_super) || roles_satisfied(actor, slugs) {
                return None;
            }
            let listed: Vec<&str> = slugs.iter().map(|s| s.as_str()).collect();
            Some(Denial {
                kind: DenialKind::MissingRole,
                message: format!("requires one of roles: {listed:?}"),
            })
        }
        Rule::Permissions(slugs) => {
            if bypass && is_super {
                return None;
            }
            let missing = missing_permissions(actor, slugs);
            if missing.is_empty() {
                return None;
            }
            let listed: Vec<&str> = missing.iter().map(|s| s.as_str()).collect();
            Some(Denial {
                kind: DenialKind::MissingPermission,
                message: format!("missing permissions: {listed:?}"),
            })
        }
    }
}
