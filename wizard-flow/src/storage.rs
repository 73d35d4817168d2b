use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::{context::Context, error::Result};

/// One user's pass through a wizard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub graph_id: String,
    pub current_step_id: String,
    /// Steps already passed, most recent last
    pub history: Vec<String>,
    pub status_message: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub context: Context,
}

impl Session {
    pub fn new_from_step(sid: String, graph_id: &str, step_id: &str) -> Self {
        Self {
            id: sid,
            graph_id: graph_id.to_string(),
            current_step_id: step_id.to_string(),
            history: Vec::new(),
            status_message: None,
            completed: false,
            created_at: Utc::now(),
            context: Context::new(),
        }
    }
}

/// Trait for storing and retrieving sessions
#[async_trait]
pub trait SessionStorage: Send + Sync {
    async fn save(&self, session: Session) -> Result<()>;
    async fn get(&self, id: &str) -> Result<Option<Session>>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// In-memory implementation of SessionStorage.
///
/// With a maximum age set, sessions older than that are invisible to `get` and are swept
/// out whenever a new session is stored.
pub struct InMemorySessionStorage {
    sessions: Arc<DashMap<String, Session>>,
    max_age: Option<Duration>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            max_age: None,
        }
    }

    pub fn with_max_age(max_age: Duration) -> Self {
        Self {
            max_age: Some(max_age),
            ..Self::new()
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drops every session older than the maximum age. Returns how many were removed.
    pub fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| !self.is_expired(session, now));
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            debug!(removed, remaining = self.sessions.len(), "expired sessions purged");
        }
        removed
    }

    fn is_expired(&self, session: &Session, now: DateTime<Utc>) -> bool {
        let Some(max_age) = self.max_age else {
            return false;
        };
        (now - session.created_at)
            .to_std()
            .map(|age| age > max_age)
            .unwrap_or(false)
    }
}

impl Default for InMemorySessionStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStorage for InMemorySessionStorage {
    async fn save(&self, session: Session) -> Result<()> {
        if !self.sessions.contains_key(&session.id) {
            self.purge_expired(Utc::now());
        }
        self.sessions.insert(session.id.clone(), session);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Session>> {
        let session = self.sessions.get(id).map(|entry| entry.clone());
        match session {
            Some(session) if self.is_expired(&session, Utc::now()) => {
                self.sessions.remove(id);
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.sessions.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn aged(id: &str, hours: i64) -> Session {
        let mut session = Session::new_from_step(id.to_string(), "test", "first");
        session.created_at = Utc::now() - TimeDelta::hours(hours);
        session
    }

    #[tokio::test]
    async fn old_sessions_expire() {
        let storage = InMemorySessionStorage::with_max_age(Duration::from_secs(60 * 60));
        storage.save(aged("stale", 3)).await.unwrap();
        storage.save(aged("recent", 0)).await.unwrap();

        assert!(storage.get("stale").await.unwrap().is_none());
        assert!(storage.get("recent").await.unwrap().is_some());
        assert_eq!(storage.len(), 1);
    }

    #[tokio::test]
    async fn new_session_sweeps_abandoned_ones() {
        let storage = InMemorySessionStorage::with_max_age(Duration::from_secs(60 * 60));
        for i in 0..100 {
            storage.save(aged(&format!("old-{}", i), 2)).await.unwrap();
        }
        storage.save(aged("fresh", 0)).await.unwrap();
        assert_eq!(storage.len(), 1);

        assert_eq!(storage.purge_expired(Utc::now() + TimeDelta::hours(2)), 1);
        assert!(storage.is_empty());
    }

    #[tokio::test]
    async fn without_max_age_nothing_expires() {
        let storage = InMemorySessionStorage::new();
        storage.save(aged("ancient", 24 * 365)).await.unwrap();
        assert!(storage.get("ancient").await.unwrap().is_some());
        assert_eq!(storage.purge_expired(Utc::now()), 0);
    }
}
