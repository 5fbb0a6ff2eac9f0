use contracts::system::permissions::{
    get_accessible_resources, get_available_actions, has_permission, ActionType, Conditions,
    ResourceType, UserPermissions,
};
use leptos::prelude::*;

use super::session::PermissionSession;
use super::storage::BrowserStorage;

/// Reactive access to the current user's permissions
#[derive(Clone, Copy)]
pub struct PermissionsContext {
    session: StoredValue<PermissionSession<BrowserStorage>>,
    current: RwSignal<Option<UserPermissions>>,
    loading: RwSignal<bool>,
}

impl PermissionsContext {
    fn new() -> Self {
        Self {
            session: StoredValue::new(PermissionSession::new(BrowserStorage)),
            current: RwSignal::new(None),
            loading: RwSignal::new(true),
        }
    }

    fn start(&self, initial: Option<UserPermissions>) {
        let restored = self.session.try_update_value(|session| {
            session.start(initial);
            session.permissions().cloned()
        });
        self.current.set(restored.flatten());
        self.loading.set(false);
    }

    pub fn permissions(&self) -> Option<UserPermissions> {
        self.current.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Replace the permissions (login, role change) and persist them
    pub fn set_permissions(&self, permissions: Option<UserPermissions>) {
        self.session
            .update_value(|session| session.set_permissions(permissions.clone()));
        self.current.set(permissions);
    }

    /// Drop the permissions on logout
    pub fn clear(&self) {
        self.set_permissions(None);
    }

    pub fn has_permission(
        &self,
        resource: ResourceType,
        action: ActionType,
        conditions: Option<&Conditions>,
    ) -> bool {
        self.current
            .with(|current| has_permission(current.as_ref(), resource, action, conditions))
    }

    pub fn accessible_resources(&self, action: ActionType) -> Vec<ResourceType> {
        self.current
            .with(|current| get_accessible_resources(current.as_ref(), action))
    }

    pub fn available_actions(&self, resource: ResourceType) -> Vec<ActionType> {
        self.current
            .with(|current| get_available_actions(current.as_ref(), resource))
    }
}

/// Permission context provider component
#[component]
pub fn PermissionProvider(
    #[prop(optional)] initial: Option<UserPermissions>,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = PermissionsContext::new();
    let mut initial = initial;

    // Restore permissions from localStorage on mount
    Effect::new(move |_| {
        ctx.start(initial.take());
    });

    provide_context(ctx);

    children()
}

/// Hook to access permissions
pub fn use_permissions() -> PermissionsContext {
    use_context::<PermissionsContext>().expect("PermissionProvider not found in component tree")
}
