//! Model caching utilities for sharing weights across multiple pipelines.
//!
//! Loading a model is expensive, so pipelines built from the same cache share
//! one instance per (type, options, device). The cache is an ordinary value
//! owned by the application; nothing here is process-global.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{Result, SentimentError};

/// Trait implemented by model option types to generate a stable cache key.
pub trait ModelOptions {
    fn cache_key(&self) -> String;
}

type CacheStorage = HashMap<(TypeId, String), Arc<dyn Any + Send + Sync>>;

/// A thread-safe cache for loaded models.
#[derive(Clone, Default)]
pub struct ModelCache {
    cache: Arc<Mutex<CacheStorage>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a model from the cache.
    ///
    /// If a model with the given key already exists, the shared handle is returned.
    /// Otherwise `loader` is called and its result stored.
    ///
    /// The lock is not held while `loader` runs, so two threads racing on the
    /// same key may both load; the last one stored wins.
    pub fn get_or_create<M, F>(&self, key: &str, loader: F) -> Result<Arc<M>>
    where
        M: Send + Sync + 'static,
        F: FnOnce() -> Result<M>,
    {
        let cache_key = (TypeId::of::<M>(), key.to_string());

        {
            let cache = self.lock()?;
            if let Some(cached) = cache.get(&cache_key) {
                if let Ok(model) = Arc::clone(cached).downcast::<M>() {
                    tracing::debug!(key, "model cache hit");
                    return Ok(model);
                }
            }
        }

        tracing::info!(key, "loading model");
        let model = Arc::new(loader()?);

        self.lock()?.insert(
            cache_key,
            Arc::clone(&model) as Arc<dyn Any + Send + Sync>,
        );

        Ok(model)
    }

    /// Clear all cached models.
    pub fn clear(&self) -> Result<()> {
        self.lock()?.clear();
        Ok(())
    }

    /// Get the number of cached models.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, CacheStorage>> {
        self.cache
            .lock()
            .map_err(|e| SentimentError::Cache(e.to_string()))
    }
}
