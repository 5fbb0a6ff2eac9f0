//! Permission checks over a [`UserPermissions`] snapshot
//!
//! All checks are pure. `None` stands for an unauthenticated user and never
//! grants anything.

use serde_json::Value;

use super::defaults::{default_permissions, role_allows};
use super::types::{ActionType, Conditions, Permission, ResourceType, Role, UserPermissions};

/// Fresh permission set for a user: role defaults only, no explicit grants
pub fn create_user_permissions(user_id: impl Into<String>, role: Role) -> UserPermissions {
    UserPermissions::new(user_id, role)
}

/// Check whether the user may perform `action` on `resource`.
///
/// Explicit grants are checked first. When both the caller and a grant carry
/// conditions, every caller attribute has to be accepted by the grant. A grant
/// without conditions accepts any caller conditions. Role defaults never carry
/// conditions and ignore them.
pub fn has_permission(
    user: Option<&UserPermissions>,
    resource: ResourceType,
    action: ActionType,
    conditions: Option<&Conditions>,
) -> bool {
    let Some(user) = user else {
        return false;
    };

    let explicit = user
        .permissions
        .iter()
        .any(|grant| grant_matches(grant, resource, action, conditions));

    explicit || role_allows(user.role, resource, action)
}

/// Resources the user can perform `action` on, explicit grants first
pub fn get_accessible_resources(
    user: Option<&UserPermissions>,
    action: ActionType,
) -> Vec<ResourceType> {
    let Some(user) = user else {
        return Vec::new();
    };

    let explicit = user
        .permissions
        .iter()
        .filter(|grant| grant.action == action)
        .map(|grant| grant.resource);
    let defaults = default_permissions(user.role)
        .iter()
        .filter(|(_, a)| *a == action)
        .map(|(r, _)| *r);

    dedup_in_order(explicit.chain(defaults))
}

/// Actions the user can perform on `resource`, explicit grants first
pub fn get_available_actions(
    user: Option<&UserPermissions>,
    resource: ResourceType,
) -> Vec<ActionType> {
    let Some(user) = user else {
        return Vec::new();
    };

    let explicit = user
        .permissions
        .iter()
        .filter(|grant| grant.resource == resource)
        .map(|grant| grant.action);
    let defaults = default_permissions(user.role)
        .iter()
        .filter(|(r, _)| *r == resource)
        .map(|(_, a)| *a);

    dedup_in_order(explicit.chain(defaults))
}

fn grant_matches(
    grant: &Permission,
    resource: ResourceType,
    action: ActionType,
    conditions: Option<&Conditions>,
) -> bool {
    if grant.resource != resource || grant.action != action {
        return false;
    }

    match (conditions, grant.conditions.as_ref()) {
        (Some(requested), Some(constraints)) => requested
            .iter()
            .all(|(key, value)| constraint_accepts(constraints.get(key), value)),
        _ => true,
    }
}

fn constraint_accepts(expected: Option<&Value>, actual: &Value) -> bool {
    match expected {
        Some(Value::Array(accepted)) => accepted.contains(actual),
        Some(expected) => expected == actual,
        None => false,
    }
}

fn dedup_in_order<T: PartialEq>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut result: Vec<T> = Vec::new();
    for item in items {
        if !result.contains(&item) {
            result.push(item);
        }
    }
    result
}
