//! The access decision function.
//!
//! `evaluate` is pure, synchronous and total: it never fails, never touches
//! IO, and only reads the actor snapshot it is handed. Safe to call from any
//! number of threads at once.

use tracing::debug;

use trellis_core::Slug;

use crate::actor::Actor;
use crate::requirement::{Requirement, Rule, SUPER_OVERRIDES_DEFAULT};

/// Decide whether `actor` satisfies `requirement`.
///
/// An absent actor is denied before anything else is looked at, including
/// vacuous requirements. Everything downstream of that check is a boolean
/// fold over the requirement tree with short-circuiting `Any`/`All`.
pub fn evaluate(actor: Option<&Actor>, requirement: &Requirement) -> bool {
    let Some(actor) = actor else {
        debug!("access denied: no authenticated actor");
        return false;
    };

    let is_super = actor.is_super();
    let allowed = eval_node(actor, is_super, requirement, SUPER_OVERRIDES_DEFAULT);
    debug!(actor = %actor.id, allowed, "access decision");
    allowed
}

fn eval_node(actor: &Actor, is_super: bool, requirement: &Requirement, inherited: bool) -> bool {
    let bypass = requirement.super_overrides().unwrap_or(inherited);

    match requirement.rule() {
        // The bypass rule itself: never subject to the bypass flag.
        Rule::Superuser => is_super,
        Rule::Any(children) => children
            .iter()
            .any(|child| eval_node(actor, is_super, child, bypass)),
        Rule::All(children) => children
            .iter()
            .all(|child| eval_node(actor, is_super, child, bypass)),
        Rule::Roles(slugs) => (bypass && is_super) || roles_satisfied(actor, slugs),
        Rule::Permissions(slugs) => {
            (bypass && is_super) || missing_permissions(actor, slugs).is_empty()
        }
    }
}

/// OR across the listed roles; an empty list is vacuously satisfied.
pub(crate) fn roles_satisfied(actor: &Actor, slugs: &[Slug]) -> bool {
    slugs.is_empty() || slugs.iter().any(|slug| actor.holds_role(slug))
}

/// Listed permissions absent from the actor's effective set (AND semantics:
/// the clause is satisfied iff this comes back empty).
pub(crate) fn missing_permissions<'a>(actor: &Actor, slugs: &'a [Slug]) -> Vec<&'a Slug> {
    if slugs.is_empty() {
        return Vec::new();
    }
    let effective = actor.effective_permissions();
    slugs.iter().filter(|slug| !effective.contains(*slug)).collect()
}
