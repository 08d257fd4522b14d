//! Actor snapshots from the identity provider.
//!
//! The evaluator never validates credentials. It consumes a snapshot the
//! identity layer already resolved (a profile endpoint response or a decoded
//! session payload) and normalizes it into the domain [`Actor`]. Absent
//! collections and explicit empty lists mean the same thing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use trellis_core::{ActorId, Slug, TenantId};

use crate::actor::{Actor, Permission, Role};

/// Wire shape of a resolved actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorSnapshot {
    pub id: ActorId,

    #[serde(default)]
    pub roles: Vec<RoleSnapshot>,

    /// Permissions granted directly, independent of any role.
    #[serde(default)]
    pub permissions: Vec<Slug>,

    #[serde(default)]
    pub is_superuser: bool,

    /// Tenant the snapshot was resolved in. Audit context only; evaluation
    /// does not consult it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<TenantId>,

    /// When the identity provider produced this snapshot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSnapshot {
    pub slug: Slug,

    #[serde(default)]
    pub permissions: Vec<PermissionSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSnapshot {
    pub slug: Slug,
}

impl ActorSnapshot {
    /// Normalize the wire shape into the domain actor.
    ///
    /// Slugs are kept exactly as spelled; case only matters at comparison
    /// time, inside evaluation.
    pub fn into_actor(self) -> Actor {
        let roles = self
            .roles
            .into_iter()
            .map(|role| {
                Role::new(role.slug).with_permissions(
                    role.permissions
                        .into_iter()
                        .map(|permission| Permission::new(permission.slug)),
                )
            })
            .collect::<Vec<_>>();

        let permissions = self
            .permissions
            .into_iter()
            .map(Permission::new)
            .collect::<Vec<_>>();

        Actor::new(self.id)
            .with_roles(roles)
            .with_permissions(permissions)
            .with_superuser(self.is_superuser)
    }
}

impl From<ActorSnapshot> for Actor {
    fn from(snapshot: ActorSnapshot) -> Self {
        snapshot.into_actor()
    }
}
