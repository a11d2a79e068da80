//! Session persistence: a small key-value seam with Redis behind it in
//! production and an in-memory map in tests, plus the profile session store
//! layered on top. No transactions; last write wins.

pub mod memory;
pub mod redis;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::PersistedProfile;

/// Minimal key-value contract. Implement this to swap storage backends
/// without touching the engine or handlers.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn set(&self, key: &str, value: String) -> Result<(), AppError>;
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

/// Session id minting behind a seam so tests can pin ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> Uuid;
}

pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Reuses the client-supplied session id when present; otherwise mints one.
/// The id is stable for the lifetime of a browsing session — repeat analyses
/// reuse it rather than regenerating.
pub fn get_or_create_session_id(provided: Option<Uuid>, ids: &dyn IdGenerator) -> Uuid {
    provided.unwrap_or_else(|| ids.generate())
}

/// Keys are namespaced per session so multiple sessions on one device never
/// collide.
const KEY_PREFIX: &str = "zodiac:profile:";

#[derive(Clone)]
pub struct ProfileSessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl ProfileSessionStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    fn key(session_id: Uuid) -> String {
        format!("{KEY_PREFIX}{session_id}")
    }

    /// Upserts the persisted record for this session. Last write wins.
    pub async fn save(
        &self,
        session_id: Uuid,
        record: &PersistedProfile,
    ) -> Result<(), AppError> {
        let payload = serde_json::to_string(record)
            .map_err(|e| AppError::Storage(format!("serialize profile: {e}")))?;
        self.kv.set(&Self::key(session_id), payload).await
    }

    pub async fn load(&self, session_id: Uuid) -> Result<Option<PersistedProfile>, AppError> {
        match self.kv.get(&Self::key(session_id)).await? {
            Some(payload) => serde_json::from_str(&payload)
                .map(Some)
                .map_err(|e| AppError::Storage(format!("deserialize profile: {e}"))),
            None => Ok(None),
        }
    }

    pub async fn clear(&self, session_id: Uuid) -> Result<(), AppError> {
        self.kv.delete(&Self::key(session_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::catalog::signs::{Element, Quality, SignId};
    use crate::models::profile::{NumberReading, Numerology, SignSnapshot};
    use chrono::{NaiveDate, Utc};

    fn sample_record() -> PersistedProfile {
        PersistedProfile {
            name: "Rina".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2001, 5, 17).unwrap(),
            sign_id: SignId::Taurus,
            sign_snapshot: SignSnapshot {
                name: "Taurus".to_string(),
                element: Element::Earth,
                quality: Quality::Fixed,
            },
            numerology: Numerology {
                life_path: NumberReading {
                    number: 6,
                    title: "The Guardian".to_string(),
                    description: "Caring and responsible.".to_string(),
                },
                destiny: NumberReading {
                    number: 7,
                    title: "The Seeker".to_string(),
                    description: "Reflective and analytical.".to_string(),
                },
            },
            last_updated: Utc::now(),
        }
    }

    fn store() -> ProfileSessionStore {
        ProfileSessionStore::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = store();
        let session = Uuid::new_v4();
        let record = sample_record();

        store.save(session, &record).await.unwrap();
        let loaded = store.load(session).await.unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[tokio::test]
    async fn test_load_missing_session_is_none() {
        let store = store();
        assert!(store.load(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_second_save_overwrites_first() {
        let store = store();
        let session = Uuid::new_v4();

        let first = sample_record();
        store.save(session, &first).await.unwrap();

        let mut second = sample_record();
        second.name = "Budi".to_string();
        store.save(session, &second).await.unwrap();

        let loaded = store.load(session).await.unwrap().unwrap();
        assert_eq!(loaded.name, "Budi");
    }

    #[tokio::test]
    async fn test_clear_deletes_the_record() {
        let store = store();
        let session = Uuid::new_v4();
        store.save(session, &sample_record()).await.unwrap();
        store.clear(session).await.unwrap();
        assert!(store.load(session).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sessions_do_not_collide() {
        let store = store();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        store.save(a, &sample_record()).await.unwrap();
        assert!(store.load(b).await.unwrap().is_none());
    }

    #[test]
    fn test_session_id_reused_when_provided() {
        let pinned = Uuid::new_v4();
        assert_eq!(
            get_or_create_session_id(Some(pinned), &UuidIdGenerator),
            pinned
        );
    }

    #[test]
    fn test_session_id_minted_when_absent() {
        let a = get_or_create_session_id(None, &UuidIdGenerator);
        let b = get_or_create_session_id(None, &UuidIdGenerator);
        assert_ne!(a, b);
    }
}
