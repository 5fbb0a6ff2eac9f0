//! Static per-role permission table
//!
//! Every role maps to the full list of (resource, action) pairs it is granted
//! without any explicit grant. The table is built once from [`role_allows`],
//! whose matches have no wildcard arms: a new role or resource does not
//! compile until its row is decided here.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::types::{ActionType, ResourceType, Role};

/// Role → granted (resource, action) pairs, resource-major in declaration order
pub static DEFAULT_ROLE_PERMISSIONS: Lazy<HashMap<Role, Vec<(ResourceType, ActionType)>>> =
    Lazy::new(|| {
        Role::ALL
            .into_iter()
            .map(|role| {
                let pairs = ResourceType::ALL
                    .into_iter()
                    .flat_map(|resource| {
                        ActionType::ALL
                            .into_iter()
                            .filter(move |action| role_allows(role, resource, *action))
                            .map(move |action| (resource, action))
                    })
                    .collect();
                (role, pairs)
            })
            .collect()
    });

/// Granted pairs for a role
pub fn default_permissions(role: Role) -> &'static [(ResourceType, ActionType)] {
    DEFAULT_ROLE_PERMISSIONS
        .get(&role)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Whether the role default grants `action` on `resource`
pub fn role_allows(role: Role, resource: ResourceType, action: ActionType) -> bool {
    // settings and users are administrative: everyone below manager is locked out
    let administrative = match resource {
        ResourceType::Settings | ResourceType::Users => true,
        ResourceType::Dashboard
        | ResourceType::Sales
        | ResourceType::Products
        | ResourceType::Inventory
        | ResourceType::Customers
        | ResourceType::Reports => false,
    };
    let report_export = resource == ResourceType::Reports && action == ActionType::Export;

    match role {
        Role::Admin => true,
        Role::Manager => !administrative || action == ActionType::View,
        Role::Staff => {
            !administrative
                && (matches!(
                    action,
                    ActionType::View | ActionType::Create | ActionType::Update
                ) || report_export)
        }
        Role::Viewer => !administrative && (action == ActionType::View || report_export),
        Role::Guest => {
            action == ActionType::View
                && matches!(resource, ResourceType::Dashboard | ResourceType::Reports)
        }
    }
}
