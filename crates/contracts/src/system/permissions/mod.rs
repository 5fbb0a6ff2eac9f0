//! Role-based access control for the venue dashboard
//!
//! A user has exactly one [`Role`] and a list of explicit [`Permission`]
//! grants. A check passes when an explicit grant matches or the role default
//! table allows the pair.

pub mod defaults;
pub mod evaluator;
pub mod persisted;
pub mod types;

pub use defaults::{default_permissions, role_allows, DEFAULT_ROLE_PERMISSIONS};
pub use evaluator::{
    create_user_permissions, get_accessible_resources, get_available_actions, has_permission,
};
pub use persisted::{
    decode_permissions, encode_permissions, PermissionsFormatError, CURRENT_PERMISSIONS_VERSION,
};
pub use types::{ActionType, Conditions, Permission, ResourceType, Role, UserPermissions};
