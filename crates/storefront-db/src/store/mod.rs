//! # Key/Value Store
//!
//! The storage contract every storefront record goes through, plus typed
//! JSON helpers on top of it.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  read(key)          → Ok(Some(raw)) | Ok(None) when absent | Err(..)   │
//! │  write(key, raw)    → replaces the whole value                         │
//! │  remove(key)        → absent afterwards; removing nothing is Ok        │
//! │                                                                         │
//! │  get_item::<T>(key) → read + serde_json decode                         │
//! │                       undecodable value ⇒ DbError::CorruptRecord       │
//! │  set_item(key, &T)  → serde_json encode + write                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use mockall::automock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{DbError, DbResult};

/// String key to string value storage.
///
/// Implementations must be shareable across tasks; the cart store holds one
/// behind an `Arc`.
#[automock]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the raw value under `key`. `Ok(None)` means absent.
    async fn read(&self, key: &str) -> DbResult<Option<String>>;

    /// Replaces the value under `key`.
    async fn write(&self, key: &str, value: &str) -> DbResult<()>;

    /// Deletes `key`. Deleting an absent key succeeds.
    async fn remove(&self, key: &str) -> DbResult<()>;
}

/// Reads and decodes the JSON record under `key`.
///
/// ## Returns
/// * `Ok(Some(T))` - Record present and decodable
/// * `Ok(None)` - No record under `key`
/// * `Err(DbError::CorruptRecord)` - Record present but not a valid `T`
/// * `Err(_)` - The store itself failed
pub async fn get_item<T, S>(store: &S, key: &str) -> DbResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.read(key).await? else {
        debug!(key = %key, "No record stored");
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| DbError::corrupt(key, e.to_string()))
}

/// Encodes `value` as JSON and stores it under `key`.
pub async fn set_item<T, S>(store: &S, key: &str, value: &T) -> DbResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|e| DbError::Serialization {
        key: key.to_string(),
        reason: e.to_string(),
    })?;

    debug!(key = %key, bytes = raw.len(), "Writing record");
    store.write(key, &raw).await
}

/// Deletes the record under `key`.
pub async fn remove_item<S>(store: &S, key: &str) -> DbResult<()>
where
    S: KeyValueStore + ?Sized,
{
    store.remove(key).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryKvStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Preference {
        theme: String,
        page_size: u32,
    }

    #[tokio::test]
    async fn test_typed_item_round_trip() {
        let store = MemoryKvStore::new();
        let pref = Preference {
            theme: "dark".to_string(),
            page_size: 30,
        };

        set_item(&store, "prefs", &pref).await.unwrap();

        let raw = store.read("prefs").await.unwrap().unwrap();
        assert_eq!(raw, r#"{"theme":"dark","pageSize":30}"#);

        let loaded: Option<Preference> = get_item(&store, "prefs").await.unwrap();
        assert_eq!(loaded, Some(pref));
    }

    #[tokio::test]
    async fn test_get_item_absent() {
        let store = MemoryKvStore::new();
        let loaded: Option<Preference> = get_item(&store, "missing").await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_get_item_corrupt_record() {
        let store = MemoryKvStore::new();
        store.write("prefs", "{not json").await.unwrap();

        let err = get_item::<Preference, _>(&store, "prefs").await.unwrap_err();
        assert!(err.is_corrupt_record());

        // Wrong shape is corrupt too.
        store.write("prefs", r#"{"theme":1}"#).await.unwrap();
        let err = get_item::<Preference, _>(&store, "prefs").await.unwrap_err();
        assert!(matches!(err, DbError::CorruptRecord { ref key, .. } if key == "prefs"));
    }

    #[tokio::test]
    async fn test_get_item_propagates_read_failure() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_read()
            .returning(|_| Err(DbError::QueryFailed("disk I/O error".to_string())));

        let err = get_item::<Preference, _>(&store, "prefs").await.unwrap_err();
        assert!(matches!(err, DbError::QueryFailed(_)));
    }

    #[tokio::test]
    async fn test_helpers_through_trait_object() {
        let store: Box<dyn KeyValueStore> = Box::new(MemoryKvStore::new());

        set_item(store.as_ref(), "count", &3u32).await.unwrap();
        assert_eq!(get_item::<u32, _>(store.as_ref(), "count").await.unwrap(), Some(3));

        remove_item(store.as_ref(), "count").await.unwrap();
        assert_eq!(get_item::<u32, _>(store.as_ref(), "count").await.unwrap(), None);
    }
}
