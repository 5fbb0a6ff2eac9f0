use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Attribute constraints attached to a grant, or supplied by a caller.
///
/// On a grant, an array value means "any of these", any other value must
/// match exactly.
pub type Conditions = HashMap<String, Value>;

/// User role. Exactly one per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
    Viewer,
    Guest,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::Manager,
        Role::Staff,
        Role::Viewer,
        Role::Guest,
    ];

    /// Get the role code used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Staff => "staff",
            Role::Viewer => "viewer",
            Role::Guest => "guest",
        }
    }

    /// Get the human-readable role name
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Manager => "Manager",
            Role::Staff => "Staff",
            Role::Viewer => "Viewer",
            Role::Guest => "Guest",
        }
    }

    /// Get all roles
    pub fn all() -> Vec<Role> {
        Self::ALL.to_vec()
    }

    /// Parse a role from its code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.code() == code)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Protected business object category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Dashboard,
    Sales,
    Products,
    Inventory,
    Customers,
    Reports,
    Settings,
    Users,
}

impl ResourceType {
    pub const ALL: [ResourceType; 8] = [
        ResourceType::Dashboard,
        ResourceType::Sales,
        ResourceType::Products,
        ResourceType::Inventory,
        ResourceType::Customers,
        ResourceType::Reports,
        ResourceType::Settings,
        ResourceType::Users,
    ];

    /// Get the resource code used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            ResourceType::Dashboard => "dashboard",
            ResourceType::Sales => "sales",
            ResourceType::Products => "products",
            ResourceType::Inventory => "inventory",
            ResourceType::Customers => "customers",
            ResourceType::Reports => "reports",
            ResourceType::Settings => "settings",
            ResourceType::Users => "users",
        }
    }

    /// Get the human-readable section name
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceType::Dashboard => "Dashboard",
            ResourceType::Sales => "Sales",
            ResourceType::Products => "Products",
            ResourceType::Inventory => "Inventory",
            ResourceType::Customers => "Customers",
            ResourceType::Reports => "Reports",
            ResourceType::Settings => "Settings",
            ResourceType::Users => "Users",
        }
    }

    /// Get all resources
    pub fn all() -> Vec<ResourceType> {
        Self::ALL.to_vec()
    }

    /// Parse a resource from its code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resource| resource.code() == code)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Operation on a resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    #[default]
    View,
    Create,
    Update,
    Delete,
    Export,
    Import,
    Approve,
    Assign,
    Share,
}

impl ActionType {
    pub const ALL: [ActionType; 9] = [
        ActionType::View,
        ActionType::Create,
        ActionType::Update,
        ActionType::Delete,
        ActionType::Export,
        ActionType::Import,
        ActionType::Approve,
        ActionType::Assign,
        ActionType::Share,
    ];

    /// Get the action code used on the wire
    pub fn code(&self) -> &'static str {
        match self {
            ActionType::View => "view",
            ActionType::Create => "create",
            ActionType::Update => "update",
            ActionType::Delete => "delete",
            ActionType::Export => "export",
            ActionType::Import => "import",
            ActionType::Approve => "approve",
            ActionType::Assign => "assign",
            ActionType::Share => "share",
        }
    }

    /// Get the human-readable action label
    pub fn display_name(&self) -> &'static str {
        match self {
            ActionType::View => "View",
            ActionType::Create => "Create",
            ActionType::Update => "Edit",
            ActionType::Delete => "Delete",
            ActionType::Export => "Export",
            ActionType::Import => "Import",
            ActionType::Approve => "Approve",
            ActionType::Assign => "Assign",
            ActionType::Share => "Share",
        }
    }

    /// Get all actions
    pub fn all() -> Vec<ActionType> {
        Self::ALL.to_vec()
    }

    /// Parse an action from its code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.code() == code)
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Explicit grant of one action on one resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    pub resource: ResourceType,
    pub action: ActionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Conditions>,
}

impl Permission {
    pub fn new(resource: ResourceType, action: ActionType) -> Self {
        Self {
            resource,
            action,
            conditions: None,
        }
    }

    pub fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = Some(conditions);
        self
    }
}

/// Role plus explicit grants of a single user.
///
/// Explicit grants only add to the role defaults, there is no deny record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub user_id: String,
    pub role: Role,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl UserPermissions {
    pub fn new(user_id: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            permissions: Vec::new(),
        }
    }

    pub fn with_grant(mut self, permission: Permission) -> Self {
        self.permissions.push(permission);
        self
    }
}
