//! @module "Cache"
//! @summary "Memoization of parse results per type"
//! @layer service
//!
//! A cache stores at most three entries for one type: [`CLASS_KEY`],
//! [`METHODS_KEY`] and [`PROPERTIES_KEY`]. Mutations are in memory; a cache
//! with a backing store only writes it on an explicit [`flush`].
//!
//! [`flush`]: AnnotationCache::flush

pub mod file;
pub mod types;

pub use file::FileCache;
pub use types::{
    members_to_json, CacheEntry, MemberAnnotations, CLASS_KEY, METHODS_KEY, PROPERTIES_KEY,
};

use std::collections::HashMap;

use crate::error::Result;

pub trait AnnotationCache {
    fn has(&self, key: &str) -> bool;

    fn get(&self, key: &str) -> Option<&CacheEntry>;

    fn set(&mut self, key: &str, entry: CacheEntry) -> &mut dyn AnnotationCache;

    fn delete(&mut self, key: &str) -> &mut dyn AnnotationCache;

    fn clear(&mut self) -> &mut dyn AnnotationCache;

    /// Write pending changes to the backing store, if there is one
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Process-local cache without a backing store
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    values: HashMap<String, CacheEntry>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl AnnotationCache for MemoryCache {
    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, entry: CacheEntry) -> &mut dyn AnnotationCache {
        self.values.insert(key.to_string(), entry);
        self
    }

    fn delete(&mut self, key: &str) -> &mut dyn AnnotationCache {
        self.values.remove(key);
        self
    }

    fn clear(&mut self) -> &mut dyn AnnotationCache {
        self.values.clear();
        self
    }
}
