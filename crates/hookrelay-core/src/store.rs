//! Key-value store abstraction for user records and payloads.
//!
//! Provides a trait-based abstraction over the store operations the HTTP
//! handlers need, so tests can substitute lightweight doubles. Production
//! runs the in-memory implementation, created once at startup and shared
//! across requests. Each map sits behind a single lock, which makes
//! per-key read-modify-write and reads linearizable; no cross-key ordering
//! is promised.

use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};

use serde_json::json;
use tokio::sync::RwLock;

use crate::models::{UserData, UserId, UserRecord};

/// Store operations required by the relay handlers.
///
/// Records and payloads are keyed independently by user id. A `put`
/// replaces any previous value under the same id.
pub trait RelayStore: Send + Sync + 'static {
    /// Stores a user record keyed by its id.
    fn put_user(&self, user: UserRecord) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;

    /// Looks up a user record by id.
    fn get_user(
        &self,
        id: UserId,
    ) -> Pin<Box<dyn Future<Output = Option<UserRecord>> + Send + '_>>;

    /// Associates a data payload with a user id.
    fn put_data(
        &self,
        id: UserId,
        data: UserData,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;

    /// Looks up the data payload associated with a user id.
    fn get_data(&self, id: UserId)
        -> Pin<Box<dyn Future<Output = Option<UserData>> + Send + '_>>;
}

/// In-memory store shared across requests.
///
/// Cloning is cheap; clones share the same underlying maps, so data written
/// through one handle is visible through every other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    users: Arc<RwLock<HashMap<UserId, UserRecord>>>,
    data: Arc<RwLock<HashMap<UserId, UserData>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preseeded with the demo payload under id `"0"`.
    ///
    /// Keeps `GET /user/0/data` answering out of the box; every other id
    /// misses until populated through the submit operation.
    pub fn with_demo_user() -> Self {
        let demo = json!({
            "id": "0",
            "name": "Dummy Data",
            "email": "9K5g8@example.com",
        });

        let mut data = HashMap::new();
        data.insert(UserId::new("0"), demo);

        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            data: Arc::new(RwLock::new(data)),
        }
    }
}

impl RelayStore for MemoryStore {
    fn put_user(&self, user: UserRecord) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        let users = self.users.clone();
        Box::pin(async move {
            users.write().await.insert(user.id.clone(), user);
        })
    }

    fn get_user(
        &self,
        id: UserId,
    ) -> Pin<Box<dyn Future<Output = Option<UserRecord>> + Send + '_>> {
        let users = self.users.clone();
        Box::pin(async move { users.read().await.get(&id).cloned() })
    }

    fn put_data(
        &self,
        id: UserId,
        data: UserData,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        let map = self.data.clone();
        Box::pin(async move {
            map.write().await.insert(id, data);
        })
    }

    fn get_data(
        &self,
        id: UserId,
    ) -> Pin<Box<dyn Future<Output = Option<UserData>> + Send + '_>> {
        let map = self.data.clone();
        Box::pin(async move { map.read().await.get(&id).cloned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_misses() {
        let store = MemoryStore::new();

        assert!(store.get_data(UserId::new("7")).await.is_none());
        assert!(store.get_user(UserId::new("7")).await.is_none());
    }

    #[tokio::test]
    async fn demo_user_is_preseeded() {
        let store = MemoryStore::with_demo_user();

        let data = store.get_data(UserId::new("0")).await.expect("demo payload");
        assert_eq!(data["name"], "Dummy Data");
        assert_eq!(data["email"], "9K5g8@example.com");

        // Only id "0" is seeded.
        assert!(store.get_data(UserId::new("1")).await.is_none());
    }

    #[tokio::test]
    async fn put_data_replaces_previous_payload() {
        let store = MemoryStore::new();
        let id = UserId::new("7");

        store.put_data(id.clone(), json!({"note": "hi"})).await;
        store.put_data(id.clone(), json!({"note": "bye"})).await;

        let data = store.get_data(id).await.expect("payload");
        assert_eq!(data, json!({"note": "bye"}));
    }

    #[tokio::test]
    async fn user_record_roundtrip() {
        let store = MemoryStore::new();
        let record = UserRecord {
            id: UserId::new("7"),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        store.put_user(record.clone()).await;

        let found = store.get_user(UserId::new("7")).await.expect("record");
        assert_eq!(found, record);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.put_data(UserId::new("7"), json!({"note": "hi"})).await;

        let data = handle.get_data(UserId::new("7")).await.expect("payload via clone");
        assert_eq!(data, json!({"note": "hi"}));
    }
}
