//! Resolved actor model: roles, permissions, superuser standing.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use trellis_core::{ActorId, Entity, Slug, ValueObject};

/// Role slug that grants implicit superuser standing when held.
pub const SUPERUSER_ROLE: &str = "superuser";

/// Atomic capability.
///
/// Permissions are opaque slugs (e.g. "orders:read"); mapping them to
/// features is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission(Slug);

impl Permission {
    pub fn new(slug: impl Into<Slug>) -> Self {
        Self(slug.into())
    }

    pub fn slug(&self) -> &Slug {
        &self.0
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl ValueObject for Permission {}

impl core::fmt::Display for Permission {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Named bundle of permissions assignable to an actor.
///
/// Roles are flat: a role carries permissions and nothing else. There is no
/// role-inheritance graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub slug: Slug,
    pub permissions: Vec<Permission>,
}

impl Role {
    pub fn new(slug: impl Into<Slug>) -> Self {
        Self {
            slug: slug.into(),
            permissions: Vec::new(),
        }
    }

    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions = permissions.into_iter().collect();
        self
    }
}

/// Identity resolved from a credential by the identity provider.
///
/// An `Actor` is an immutable snapshot for the duration of one evaluation;
/// the evaluator never mutates it and never reaches back to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub roles: Vec<Role>,
    pub permissions: Vec<Permission>,
    pub is_superuser: bool,
}

impl Actor {
    pub fn new(id: ActorId) -> Self {
        Self {
            id,
            roles: Vec::new(),
            permissions: Vec::new(),
            is_superuser: false,
        }
    }

    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    pub fn with_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions = permissions.into_iter().collect();
        self
    }

    pub fn with_superuser(mut self, is_superuser: bool) -> Self {
        self.is_superuser = is_superuser;
        self
    }

    /// Superuser standing: the explicit flag, or holding the
    /// [`SUPERUSER_ROLE`] role (matched case-insensitively).
    pub fn is_super(&self) -> bool {
        self.is_superuser || self.roles.iter().any(|r| r.slug.matches(SUPERUSER_ROLE))
    }

    /// Whether the actor holds a role with the given slug.
    pub fn holds_role(&self, slug: &Slug) -> bool {
        self.roles.iter().any(|r| r.slug == *slug)
    }

    /// Union of direct grants and every held role's bundle.
    ///
    /// Slugs that differ only in case collapse to one entry.
    pub fn effective_permissions(&self) -> HashSet<&Slug> {
        let mut set: HashSet<&Slug> = self.permissions.iter().map(Permission::slug).collect();
        for role in &self.roles {
            set.extend(role.permissions.iter().map(Permission::slug));
        }
        set
    }

    /// Whether the effective permission set contains the given slug.
    pub fn holds_permission(&self, slug: &Slug) -> bool {
        self.effective_permissions().contains(slug)
    }
}

impl Entity for Actor {
    type Id = ActorId;

    fn id(&self) -> &ActorId {
        &self.id
    }
}
