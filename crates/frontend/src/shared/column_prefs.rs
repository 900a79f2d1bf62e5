//! Column-preference store
//!
//! One contract, three backends. The per-user settings record on the API is
//! canonical; device-local storage serves tables opened without a session;
//! the in-memory store backs tests.

use async_trait::async_trait;
use contracts::shared::columns::ColumnPreference;
use contracts::shared::metadata::ModelDescriptor;
use contracts::shared::user_settings::{
    UserSettingsRecord, CREATE_USER_SETTINGS_MUTATION, RESET_USER_SETTINGS_MUTATION,
    UPDATE_USER_SETTINGS_MUTATION, USER_SETTINGS_QUERY,
};
use contracts::shared::graphql::GraphQlRequest;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::graphql::{fetch_field, ApiError, GraphQlTransport};

#[async_trait(?Send)]
pub trait ColumnPreferenceStore {
    /// Storage key of `descriptor`'s table shown on `page_path`
    fn table_key(&self, descriptor: &ModelDescriptor, page_path: &str) -> String;

    /// `Ok(None)` on a miss; the caller derives defaults from the descriptor.
    async fn load(&self, key: &str) -> Result<Option<ColumnPreference>, ApiError>;

    /// Persist on explicit confirm only. Last writer wins.
    async fn save(&self, key: &str, preference: &ColumnPreference) -> Result<(), ApiError>;
}

/// Decode a stored preference; unreadable payloads count as a miss.
pub fn decode_preference(raw: &str) -> Option<ColumnPreference> {
    match serde_json::from_str(raw) {
        Ok(pref) => Some(pref),
        Err(e) => {
            log::warn!("ignoring unreadable column preference: {}", e);
            None
        }
    }
}

// ============================================================================
// Remote per-user settings
// ============================================================================

#[derive(Deserialize)]
struct SettingsPage {
    #[serde(default)]
    results: Vec<UserSettingsRecord>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SettingsInput<'a> {
    code: &'a str,
    value_json: &'a Value,
}

/// Settings records stored by the API under `${resolverName}${pagePath}`
#[derive(Clone)]
pub struct RemoteSettingsStore {
    transport: Rc<dyn GraphQlTransport>,
}

impl RemoteSettingsStore {
    pub fn new(transport: Rc<dyn GraphQlTransport>) -> Self {
        Self { transport }
    }

    pub async fn load_record(&self, code: &str) -> Result<Option<UserSettingsRecord>, ApiError> {
        let page: SettingsPage = fetch_field(
            self.transport.as_ref(),
            USER_SETTINGS_QUERY,
            json!({ "code": code }),
            "warehouseWorkerSettings",
        )
        .await?;
        Ok(page.results.into_iter().find(|r| r.code == code))
    }

    /// Typed value of a settings record; an unreadable value counts as missing.
    pub async fn load_value<T: DeserializeOwned>(&self, code: &str) -> Result<Option<T>, ApiError> {
        let Some(record) = self.load_record(code).await? else {
            return Ok(None);
        };
        match record.parse_value() {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("settings record '{}' is unreadable: {}", code, e);
                Ok(None)
            }
        }
    }

    /// Create or update the record `code`.
    pub async fn save_value<T: Serialize>(&self, code: &str, value: &T) -> Result<(), ApiError> {
        let value_json =
            serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
        let input = SettingsInput {
            code,
            value_json: &value_json,
        };

        let request = match self.load_record(code).await?.and_then(|r| r.id) {
            Some(id) => GraphQlRequest::new(
                UPDATE_USER_SETTINGS_MUTATION,
                json!({ "id": id, "input": input }),
            ),
            None => GraphQlRequest::new(CREATE_USER_SETTINGS_MUTATION, json!({ "input": input })),
        };
        self.transport.execute(request).await?;
        log::debug!("saved settings record '{}'", code);
        Ok(())
    }

    /// Delete every settings record of the current user.
    pub async fn reset_all_settings(&self) -> Result<(), ApiError> {
        self.transport
            .execute(GraphQlRequest::new(RESET_USER_SETTINGS_MUTATION, Value::Null))
            .await?;
        log::info!("user settings reset");
        Ok(())
    }
}

#[async_trait(?Send)]
impl ColumnPreferenceStore for RemoteSettingsStore {
    fn table_key(&self, descriptor: &ModelDescriptor, page_path: &str) -> String {
        descriptor.settings_code(page_path)
    }

    async fn load(&self, key: &str) -> Result<Option<ColumnPreference>, ApiError> {
        self.load_value(key).await
    }

    async fn save(&self, key: &str, preference: &ColumnPreference) -> Result<(), ApiError> {
        self.save_value(key, preference).await
    }
}

// ============================================================================
// Device-local storage
// ============================================================================

/// `window.localStorage` under `${entityType}-filter-table`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, ApiError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| ApiError::Storage("localStorage is not available".to_string()))
    }
}

#[async_trait(?Send)]
impl ColumnPreferenceStore for LocalStorageStore {
    fn table_key(&self, descriptor: &ModelDescriptor, _page_path: &str) -> String {
        descriptor.local_table_key()
    }

    async fn load(&self, key: &str) -> Result<Option<ColumnPreference>, ApiError> {
        let raw = Self::storage()?
            .get_item(key)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))?;
        Ok(raw.as_deref().and_then(decode_preference))
    }

    async fn save(&self, key: &str, preference: &ColumnPreference) -> Result<(), ApiError> {
        let raw = serde_json::to_string(preference).map_err(|e| ApiError::Decode(e.to_string()))?;
        Self::storage()?
            .set_item(key, &raw)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }
}

// ============================================================================
// In-memory
// ============================================================================

#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, ColumnPreference>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn get(&self, key: &str) -> Option<ColumnPreference> {
        self.entries.borrow().get(key).cloned()
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

#[async_trait(?Send)]
impl ColumnPreferenceStore for MemoryStore {
    fn table_key(&self, descriptor: &ModelDescriptor, _page_path: &str) -> String {
        descriptor.local_table_key()
    }

    async fn load(&self, key: &str) -> Result<Option<ColumnPreference>, ApiError> {
        Ok(self.get(key))
    }

    async fn save(&self, key: &str, preference: &ColumnPreference) -> Result<(), ApiError> {
        self.saves.set(self.saves.get() + 1);
        self.entries
            .borrow_mut()
            .insert(key.to_string(), preference.clone());
        Ok(())
    }
}

/// Remote store when a session exists, device-local otherwise
pub fn store_for_session(transport: Option<Rc<dyn GraphQlTransport>>) -> Rc<dyn ColumnPreferenceStore> {
    match transport {
        Some(transport) => Rc::new(RemoteSettingsStore::new(transport)),
        None => Rc::new(LocalStorageStore),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::columns::materialize;
    use crate::shared::graphql::testing::ScriptedTransport;
    use contracts::domain::a003_carrier;
    use futures::executor::block_on;

    fn remote() -> (Rc<ScriptedTransport>, RemoteSettingsStore) {
        let transport = Rc::new(ScriptedTransport::default());
        let store = RemoteSettingsStore::new(transport.clone());
        (transport, store)
    }

    #[test]
    fn test_remote_key_and_miss() {
        let (transport, store) = remote();
        let key = store.table_key(&a003_carrier::DESCRIPTOR, "/carriers");
        assert_eq!(key, "carriers/carriers");
        assert_eq!(a003_carrier::DESCRIPTOR.page_path, "/carriers");

        transport.reply(Ok(json!({ "warehouseWorkerSettings": { "results": [] } })));
        assert_eq!(block_on(store.load(&key)).unwrap(), None);
        assert_eq!(transport.requests.borrow()[0].variables, json!({ "code": key }));
    }

    #[test]
    fn test_remote_save_creates_then_updates() {
        let (transport, store) = remote();
        let pref = materialize(&a003_carrier::DESCRIPTOR, None).unwrap().to_preference();

        transport
            .reply(Ok(json!({ "warehouseWorkerSettings": { "results": [] } })))
            .reply(Ok(json!({ "createWarehouseWorkerSetting": { "id": "s1" } })));
        block_on(store.save("carriers/carriers", &pref)).unwrap();
        {
            let requests = transport.requests.borrow();
            assert_eq!(requests[1].query, CREATE_USER_SETTINGS_MUTATION);
            assert_eq!(requests[1].variables["input"]["code"], json!("carriers/carriers"));
            assert_eq!(
                requests[1].variables["input"]["valueJson"],
                serde_json::to_value(&pref).unwrap()
            );
        }

        let stored = serde_json::to_value(&pref).unwrap();
        transport
            .reply(Ok(json!({ "warehouseWorkerSettings": { "results": [
                { "id": "s1", "code": "carriers/carriers", "valueJson": stored }
            ] } })))
            .reply(Ok(json!({ "updateWarehouseWorkerSetting": { "id": "s1" } })));
        block_on(store.save("carriers/carriers", &pref)).unwrap();
        let requests = transport.requests.borrow();
        assert_eq!(requests[3].query, UPDATE_USER_SETTINGS_MUTATION);
        assert_eq!(requests[3].variables["id"], json!("s1"));
    }

    #[test]
    fn test_remote_load_unreadable_value_is_a_miss() {
        let (transport, store) = remote();
        transport.reply(Ok(json!({ "warehouseWorkerSettings": { "results": [
            { "id": "s1", "code": "k", "valueJson": "not a preference" }
        ] } })));
        assert_eq!(block_on(store.load("k")).unwrap(), None);
    }

    #[test]
    fn test_remote_errors_propagate() {
        let (transport, store) = remote();
        transport.reply(Err(ApiError::SessionExpired));
        assert_eq!(block_on(store.load("k")), Err(ApiError::SessionExpired));
    }

    #[test]
    fn test_reset_all_settings() {
        let (transport, store) = remote();
        transport.reply(Ok(json!({ "resetWarehouseWorkerSettings": true })));
        block_on(store.reset_all_settings()).unwrap();
        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, RESET_USER_SETTINGS_MUTATION);
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        let key = store.table_key(&a003_carrier::DESCRIPTOR, "/carriers");
        assert_eq!(key, "carrier-filter-table");
        assert_eq!(block_on(store.load(&key)).unwrap(), None);

        let pref = materialize(&a003_carrier::DESCRIPTOR, None).unwrap().to_preference();
        block_on(store.save(&key, &pref)).unwrap();
        assert_eq!(block_on(store.load(&key)).unwrap(), Some(pref));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_decode_preference() {
        assert_eq!(decode_preference("{"), None);
        let pref = decode_preference(
            r#"{"visibleColumnKeys":["name"],"fixedColumns":[],"filteredColumns":[],"tableColumns":[]}"#,
        )
        .unwrap();
        assert_eq!(pref.visible_column_keys, vec!["name"]);
    }
}
