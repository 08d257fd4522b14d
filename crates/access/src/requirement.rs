//! Declarative authorization requirements.
//!
//! A [`Requirement`] is a recursive rule tree built from five closed
//! variants. Callers usually construct trees through the builder methods;
//! the platform's JSON guard objects arrive as [`RawRequirement`] and are
//! normalized into the closed form before evaluation.

use serde::{Deserialize, Serialize};

use trellis_core::Slug;

/// Superuser bypass applies unless a node (or an ancestor) switches it off.
pub(crate) const SUPER_OVERRIDES_DEFAULT: bool = true;

/// A node in the requirement tree.
///
/// `super_overrides` controls whether superuser standing bypasses the
/// role/permission checks in this subtree. `None` inherits the parent's
/// effective value (the root defaults to enabled).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    rule: Rule,
    super_overrides: Option<bool>,
}

/// The rule at a requirement node. Exactly one variant is active per node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// Passes only for actors with superuser standing. This variant is the
    /// bypass itself and ignores `super_overrides`.
    Superuser,
    /// Passes if the actor holds at least one listed role (OR across the
    /// list). An empty list is vacuously satisfied.
    Roles(Vec<Slug>),
    /// Passes if the actor's effective permission set contains every listed
    /// slug (AND across the list). An empty list is vacuously satisfied.
    Permissions(Vec<Slug>),
    /// Passes if at least one child passes.
    Any(Vec<Requirement>),
    /// Passes if every child passes.
    All(Vec<Requirement>),
}

impl Requirement {
    fn node(rule: Rule) -> Self {
        Self {
            rule,
            super_overrides: None,
        }
    }

    pub fn superuser() -> Self {
        Self::node(Rule::Superuser)
    }

    pub fn roles(slugs: impl IntoIterator<Item = impl Into<Slug>>) -> Self {
        Self::node(Rule::Roles(slugs.into_iter().map(Into::into).collect()))
    }

    pub fn permissions(slugs: impl IntoIterator<Item = impl Into<Slug>>) -> Self {
        Self::node(Rule::Permissions(slugs.into_iter().map(Into::into).collect()))
    }

    pub fn any(children: impl IntoIterator<Item = Requirement>) -> Self {
        Self::node(Rule::Any(children.into_iter().collect()))
    }

    pub fn all(children: impl IntoIterator<Item = Requirement>) -> Self {
        Self::node(Rule::All(children.into_iter().collect()))
    }

    /// The unrestricted requirement: any authenticated actor passes.
    pub fn none() -> Self {
        Self::all([])
    }

    /// Pin the superuser-bypass flag for this subtree.
    pub fn with_super_overrides(mut self, enabled: bool) -> Self {
        self.super_overrides = Some(enabled);
        self
    }

    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    pub fn super_overrides(&self) -> Option<bool> {
        self.super_overrides
    }
}

/// Requirement as callers write it: a JSON object with optional fields.
///
/// This mirrors the guard objects the platform's pages and route handlers
/// declare. The discriminant is resolved in evaluation order: `superuser`,
/// then `any`, then `all`, then the role/permission leaf. An object that
/// sets none of them normalizes to [`Requirement::none`]: a deliberate
/// no-restriction rule, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawRequirement {
    pub superuser: Option<bool>,
    pub roles: Option<Vec<Slug>>,
    pub permissions: Option<Vec<Slug>>,
    pub any: Option<Vec<RawRequirement>>,
    pub all: Option<Vec<RawRequirement>>,
    pub super_overrides: Option<bool>,
}

impl RawRequirement {
    /// Resolve the duck-typed object into the closed requirement tree.
    pub fn normalize(self) -> Requirement {
        let RawRequirement {
            superuser,
            roles,
            permissions,
            any,
            all,
            super_overrides,
        } = self;

        // Empty lists and absent fields mean the same thing.
        let roles = roles.filter(|r| !r.is_empty());
        let permissions = permissions.filter(|p| !p.is_empty());

        let rule = if superuser.unwrap_or(false) {
            Rule::Superuser
        } else if let Some(children) = any {
            Rule::Any(children.into_iter().map(RawRequirement::normalize).collect())
        } else if let Some(children) = all {
            Rule::All(children.into_iter().map(RawRequirement::normalize).collect())
        } else {
            match (roles, permissions) {
                (Some(roles), Some(permissions)) => Rule::All(vec![
                    Requirement::node(Rule::Roles(roles)),
                    Requirement::node(Rule::Permissions(permissions)),
                ]),
                (Some(roles), None) => Rule::Roles(roles),
                (None, Some(permissions)) => Rule::Permissions(permissions),
                (None, None) => Rule::All(Vec::new()),
            }
        };

        Requirement {
            rule,
            super_overrides,
        }
    }
}

impl From<RawRequirement> for Requirement {
    fn from(raw: RawRequirement) -> Self {
        raw.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Requirement {
        serde_json::from_str::<RawRequirement>(json).unwrap().normalize()
    }

    #[test]
    fn empty_object_normalizes_to_unrestricted() {
        assert_eq!(parse("{}"), Requirement::none());
    }

    #[test]
    fn superuser_flag_wins_over_other_fields() {
        let req = parse(r#"{"superuser": true, "roles": ["admin"]}"#);
        assert_eq!(req.rule(), &Rule::Superuser);
    }

    #[test]
    fn superuser_false_is_treated_as_unset() {
        let req = parse(r#"{"superuser": false, "roles": ["admin"]}"#);
        assert_eq!(req, Requirement::roles(["admin"]));
    }

    #[test]
    fn combined_leaf_becomes_conjunction() {
        let req = parse(r#"{"roles": ["provider"], "permissions": ["orders:read"]}"#);
        assert_eq!(
            req,
            Requirement::all([
                Requirement::roles(["provider"]),
                Requirement::permissions(["orders:read"]),
            ])
        );
    }

    #[test]
    fn empty_lists_degrade_to_unrestricted() {
        assert_eq!(parse(r#"{"roles": [], "permissions": []}"#), Requirement::none());
    }

    #[test]
    fn nested_any_with_override_flag() {
        let req = parse(
            r#"{"any": [{"roles": ["admin"]}, {"permissions": ["orders:write"]}], "superOverrides": false}"#,
        );
        assert_eq!(req.super_overrides(), Some(false));
        match req.rule() {
            Rule::Any(children) => {
                assert_eq!(children.len(), 2);
                assert_eq!(children[0], Requirement::roles(["admin"]));
                assert_eq!(children[1].super_overrides(), None);
            }
            other => panic!("expected Any, got {other:?}"),
        }
    }

    #[test]
    fn builder_and_wire_forms_agree() {
        let wire = parse(r#"{"all": [{"superuser": true}, {"roles": ["client"]}]}"#);
        let built = Requirement::all([Requirement::superuser(), Requirement::roles(["client"])]);
        assert_eq!(wire, built);
    }
}
