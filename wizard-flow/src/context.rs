use dashmap::DashMap;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{FlowError, Result};

/// Answers and intermediate state shared between the steps of one session
#[derive(Clone, Debug)]
pub struct Context {
    data: Arc<DashMap<String, Value>>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            data: Arc::new(DashMap::new()),
        }
    }

    pub async fn set(&self, key: impl Into<String>, value: impl Serialize) -> Result<()> {
        self.set_sync(key, value)
    }

    pub fn set_sync(&self, key: impl Into<String>, value: impl Serialize) -> Result<()> {
        let key = key.into();
        let value = serde_json::to_value(value)
            .map_err(|e| FlowError::ContextError(format!("cannot store '{}': {}", key, e)))?;
        self.data.insert(key, value);
        Ok(())
    }

    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_sync(key)
    }

    /// Returns `None` when the key is missing or holds a value of another shape.
    pub fn get_sync<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.data
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Raw JSON value, for callers that validate the shape themselves.
    pub fn get_value(&self, key: &str) -> Option<Value> {
        self.data.get(key).map(|v| v.clone())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub async fn remove(&self, key: &str) -> Option<Value> {
        self.data.remove(key).map(|(_, v)| v)
    }

    pub async fn clear(&self) {
        self.data.clear();
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn typed_round_trip_and_shape_mismatch() {
        let context = Context::new();
        context.set("count", 3u32).await.unwrap();

        assert_eq!(context.get::<u32>("count").await, Some(3));
        assert_eq!(context.get::<String>("count").await, None);
        assert!(context.contains("count"));

        context.remove("count").await;
        assert!(!context.contains("count"));
    }

    #[tokio::test]
    async fn clones_share_state() {
        let context = Context::new();
        let other = context.clone();
        other.set("name", "basics").await.unwrap();

        assert_eq!(context.get_sync::<String>("name").as_deref(), Some("basics"));
    }
}
