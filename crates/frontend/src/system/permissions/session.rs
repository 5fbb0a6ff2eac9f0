//! Current-user permission holder with load/persist lifecycle
//!
//! The session owns the store and the current snapshot. Store and format
//! failures are logged and treated as "no permissions", they never reach the
//! caller.

use contracts::system::permissions::{
    decode_permissions, encode_permissions, get_accessible_resources, get_available_actions,
    has_permission, ActionType, Conditions, ResourceType, UserPermissions,
};

use super::storage::{KeyValueStore, PERMISSIONS_STORAGE_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Ready,
}

pub struct PermissionSession<S: KeyValueStore> {
    store: S,
    storage_key: String,
    state: SessionState,
    current: Option<UserPermissions>,
}

impl<S: KeyValueStore> PermissionSession<S> {
    pub fn new(store: S) -> Self {
        Self::with_storage_key(store, PERMISSIONS_STORAGE_KEY)
    }

    pub fn with_storage_key(store: S, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            storage_key: storage_key.into(),
            state: SessionState::Uninitialized,
            current: None,
        }
    }

    /// Move to `Ready`, adopting `initial` or the previously stored value
    pub fn start(&mut self, initial: Option<UserPermissions>) {
        if self.state == SessionState::Ready {
            return;
        }

        match initial {
            Some(permissions) => {
                log::debug!("Permissions supplied for user {}", permissions.user_id);
                self.persist(Some(&permissions));
                self.current = Some(permissions);
            }
            None => self.current = self.load(),
        }

        self.state = SessionState::Ready;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state != SessionState::Ready
    }

    pub fn permissions(&self) -> Option<&UserPermissions> {
        self.current.as_ref()
    }

    /// Replace the current snapshot and persist it (`None` removes the entry)
    pub fn set_permissions(&mut self, permissions: Option<UserPermissions>) {
        self.persist(permissions.as_ref());
        self.current = permissions;
    }

    /// Sign-out
    pub fn clear(&mut self) {
        self.set_permissions(None);
    }

    pub fn has_permission(
        &self,
        resource: ResourceType,
        action: ActionType,
        conditions: Option<&Conditions>,
    ) -> bool {
        has_permission(self.permissions(), resource, action, conditions)
    }

    pub fn accessible_resources(&self, action: ActionType) -> Vec<ResourceType> {
        get_accessible_resources(self.permissions(), action)
    }

    pub fn available_actions(&self, resource: ResourceType) -> Vec<ActionType> {
        get_available_actions(self.permissions(), resource)
    }

    fn load(&self) -> Option<UserPermissions> {
        let raw = match self.store.get_item(&self.storage_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("No stored permissions under '{}'", self.storage_key);
                return None;
            }
            Err(e) => {
                log::warn!("Failed to read stored permissions: {}", e);
                return None;
            }
        };

        match decode_permissions(&raw) {
            Ok(permissions) => {
                log::info!("Restored permissions for user {}", permissions.user_id);
                Some(permissions)
            }
            Err(e) => {
                log::error!("Ignoring stored permissions: {}", e);
                None
            }
        }
    }

    fn persist(&self, permissions: Option<&UserPermissions>) {
        let result = match permissions {
            Some(permissions) => match encode_permissions(permissions) {
                Ok(raw) => self.store.set_item(&self.storage_key, &raw),
                Err(e) => {
                    log::error!("Failed to encode permissions: {}", e);
                    return;
                }
            },
            None => self.store.remove_item(&self.storage_key),
        };

        if let Err(e) = result {
            log::warn!("Failed to persist permissions: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::permissions::storage::{MemoryStore, StoreError};
    use contracts::system::permissions::{Permission, Role};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Operation("quota exceeded".to_string()))
        }

        fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    fn viewer_with_delete() -> UserPermissions {
        UserPermissions::new("u1", Role::Viewer)
            .with_grant(Permission::new(ResourceType::Products, ActionType::Delete))
    }

    #[test]
    fn test_start_with_empty_store() {
        let store = MemoryStore::new();
        let mut session = PermissionSession::new(&store);
        assert!(session.is_loading());

        session.start(None);
        assert_eq!(session.state(), SessionState::Ready);
        assert!(session.permissions().is_none());
        assert!(!session.has_permission(ResourceType::Dashboard, ActionType::View, None));
        assert!(session.accessible_resources(ActionType::View).is_empty());
    }

    #[test]
    fn test_initial_value_is_adopted_and_persisted() {
        let store = MemoryStore::new();
        let mut session = PermissionSession::new(&store);
        session.start(Some(viewer_with_delete()));

        assert!(!session.is_loading());
        assert!(session.has_permission(ResourceType::Products, ActionType::Delete, None));
        assert!(store.get_item(PERMISSIONS_STORAGE_KEY).unwrap().is_some());
    }

    #[test]
    fn test_restores_previous_session() {
        let store = MemoryStore::new();
        {
            let mut first = PermissionSession::new(&store);
            first.start(None);
            first.set_permissions(Some(viewer_with_delete()));
        }

        let mut second = PermissionSession::new(&store);
        second.start(None);
        assert_eq!(second.permissions(), Some(&viewer_with_delete()));
        assert_eq!(
            second.available_actions(ResourceType::Products),
            vec![ActionType::Delete, ActionType::View]
        );
    }

    #[test]
    fn test_corrupt_record_yields_no_permissions() {
        let store = MemoryStore::with_item(PERMISSIONS_STORAGE_KEY, "{\"userId\":");
        let mut session = PermissionSession::new(&store);
        session.start(None);

        assert_eq!(session.state(), SessionState::Ready);
        assert!(session.permissions().is_none());
    }

    #[test]
    fn test_newer_record_version_yields_no_permissions() {
        let store = MemoryStore::with_item(
            PERMISSIONS_STORAGE_KEY,
            r#"{"version":9,"userId":"u1","role":"admin","permissions":[]}"#,
        );
        let mut session = PermissionSession::new(&store);
        session.start(None);
        assert!(session.permissions().is_none());
    }

    #[test]
    fn test_clear_removes_stored_entry() {
        let store = MemoryStore::new();
        let mut session = PermissionSession::new(&store);
        session.start(Some(UserPermissions::new("u2", Role::Manager)));
        assert_eq!(store.len(), 1);

        session.clear();
        assert!(session.permissions().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_custom_storage_key() {
        let store = MemoryStore::new();
        let mut session = PermissionSession::with_storage_key(&store, "venue_permissions");
        session.start(Some(UserPermissions::new("u3", Role::Guest)));

        assert!(store.get_item("venue_permissions").unwrap().is_some());
        assert!(store.get_item(PERMISSIONS_STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_broken_store_fails_closed() {
        let mut session = PermissionSession::new(BrokenStore);
        session.start(None);
        assert_eq!(session.state(), SessionState::Ready);
        assert!(session.permissions().is_none());

        // writes fail silently, the in-memory snapshot still changes
        session.set_permissions(Some(UserPermissions::new("u4", Role::Staff)));
        assert!(session.has_permission(ResourceType::Reports, ActionType::Export, None));

        session.clear();
        assert!(!session.has_permission(ResourceType::Reports, ActionType::View, None));
    }

    #[test]
    fn test_start_twice_keeps_first_value() {
        let store = MemoryStore::new();
        let mut session = PermissionSession::new(&store);
        session.start(Some(UserPermissions::new("u5", Role::Admin)));
        session.start(Some(UserPermissions::new("u6", Role::Guest)));

        assert_eq!(session.permissions().map(|p| p.user_id.as_str()), Some("u5"));
    }
}
