//! Proptest strategies shared by the crate's property tests.

use proptest::prelude::*;

use trellis_core::ActorId;

use crate::actor::{Actor, Permission, Role};
use crate::requirement::{Requirement, Rule};

/// Small shared vocabulary so generated actors and requirements overlap
/// often enough for both branches of every law to be exercised.
pub(crate) fn slug_pool() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "admin",
        "provider",
        "client",
        "support",
        "superuser",
        "orders:read",
        "orders:write",
        "listings:manage",
        "payouts:view",
    ])
}

pub(crate) fn role_strategy() -> impl Strategy<Value = Role> {
    (slug_pool(), prop::collection::vec(slug_pool(), 0..3)).prop_map(|(slug, perms)| {
        Role::new(slug).with_permissions(perms.into_iter().map(Permission::new))
    })
}

pub(crate) fn actor_strategy() -> impl Strategy<Value = Actor> {
    (
        prop::collection::vec(role_strategy(), 0..3),
        prop::collection::vec(slug_pool(), 0..3),
        any::<bool>(),
    )
        .prop_map(|(roles, permissions, is_superuser)| {
            Actor::new(ActorId::new())
                .with_roles(roles)
                .with_permissions(permissions.into_iter().map(Permission::new))
                .with_superuser(is_superuser)
        })
}

fn maybe_overridden(inner: BoxedStrategy<Requirement>) -> BoxedStrategy<Requirement> {
    (inner, prop::option::of(any::<bool>()))
        .prop_map(|(req, flag)| match flag {
            Some(enabled) => req.with_super_overrides(enabled),
            None => req,
        })
        .boxed()
}

pub(crate) fn requirement_strategy() -> BoxedStrategy<Requirement> {
    let leaf = maybe_overridden(
        prop_oneof![
            Just(Requirement::superuser()),
            prop::collection::vec(slug_pool(), 0..3).prop_map(Requirement::roles),
            prop::collection::vec(slug_pool(), 0..3).prop_map(Requirement::permissions),
        ]
        .boxed(),
    );
    leaf.prop_recursive(3, 24, 4, |inner| {
        maybe_overridden(
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Requirement::any),
                prop::collection::vec(inner, 0..4).prop_map(Requirement::all),
            ]
            .boxed(),
        )
    })
    .boxed()
}

/// Rebuild a requirement with every slug upper-cased.
pub(crate) fn shouted(requirement: &Requirement) -> Requirement {
    let rebuilt = match requirement.rule() {
        Rule::Superuser => Requirement::superuser(),
        Rule::Roles(slugs) => Requirement::roles(slugs.iter().map(|s| s.as_str().to_uppercase())),
        Rule::Permissions(slugs) => {
            Requirement::permissions(slugs.iter().map(|s| s.as_str().to_uppercase()))
        }
        Rule::Any(children) => Requirement::any(children.iter().map(shouted)),
        Rule::All(children) => Requirement::all(children.iter().map(shouted)),
    };
    match requirement.super_overrides() {
        Some(enabled) => rebuilt.with_super_overrides(enabled),
        None => rebuilt,
    }
}
