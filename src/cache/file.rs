//! @module "File Cache"
//! @summary "JSON file backed annotation cache with explicit persistence"
//! @layer service
//!
//! The file is read once on [`FileCache::open`] and only written by
//! [`persist`](FileCache::persist), [`close`](FileCache::close) or
//! [`flush`](AnnotationCache::flush). Dropping a `FileCache` discards
//! unsaved changes; [`FileCache::scoped`] saves on every exit path.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{AnnotationCache, CacheEntry};
use crate::error::Result;
use crate::ordered::OrderedMap;

#[derive(Debug)]
pub struct FileCache {
    path: PathBuf,
    values: OrderedMap<CacheEntry>,
}

impl FileCache {
    /// Open a cache file, creating an empty one (and its directory) if needed
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            File::create(&path)?;
            tracing::debug!("Created cache file {}", path.display());
            return Ok(Self {
                path,
                values: OrderedMap::new(),
            });
        }

        let content = std::fs::read_to_string(&path)?;
        let values = if content.trim().is_empty() {
            OrderedMap::new()
        } else {
            serde_json::from_str(&content)?
        };
        tracing::debug!("Loaded cache file {} ({} entries)", path.display(), values.len());

        Ok(Self { path, values })
    }

    /// Open `path`, run `f`, then persist whether or not `f` succeeded.
    ///
    /// An error from `f` takes precedence over a persistence error.
    pub fn scoped<P, T, F>(path: P, f: F) -> Result<T>
    where
        P: AsRef<Path>,
        F: FnOnce(&mut FileCache) -> Result<T>,
    {
        let mut cache = Self::open(path)?;
        let result = f(&mut cache);
        let persisted = cache.persist();
        let value = result?;
        persisted?;
        Ok(value)
    }

    /// Write all entries to the cache file
    ///
    /// Writes a sibling temp file and renames it over the cache file, so a
    /// failed write leaves the previous contents intact.
    pub fn persist(&self) -> Result<()> {
        let tmp_path = self.temp_path();
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut writer, &self.values)?;
            writer.flush()?;
        }
        std::fs::rename(&tmp_path, &self.path)?;
        tracing::debug!("Persisted {} cache entries to {}", self.values.len(), self.path.display());
        Ok(())
    }

    /// Persist and release the cache
    pub fn close(self) -> Result<()> {
        self.persist()
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys()
    }
}

impl AnnotationCache for FileCache {
    fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    fn get(&self, key: &str) -> Option<&CacheEntry> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, entry: CacheEntry) -> &mut dyn AnnotationCache {
        self.values.insert(key, entry);
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

    fn flush(&mut self) -> Result<()> {
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CLASS_KEY, METHODS_KEY};
    use crate::error::AnnotationError;
    use crate::parsed::ParsedAnnotation;
    use crate::value::AnnotationValue;
    use tempfile::TempDir;

    fn class_entry(tag: &str, value: AnnotationValue) -> CacheEntry {
        let mut parsed = ParsedAnnotation::new();
        parsed.set(tag, value);
        CacheEntry::Class(parsed)
    }

    #[test]
    fn test_open_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("annotated_class.cache");

        let cache = FileCache::open(&path).unwrap();
        assert!(path.exists());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_persist_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file_cache_test.cache");

        let mut cache = FileCache::open(&path).unwrap();
        cache
            .set(CLASS_KEY, class_entry("name", "John Doe".into()))
            .set("list", class_entry("list", AnnotationValue::List(vec!["1".into(), "2".into()])));
        cache.persist().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(json.get(CLASS_KEY).is_some());

        let reloaded = FileCache::open(&path).unwrap();
        assert_eq!(reloaded.get(CLASS_KEY), cache.get(CLASS_KEY));
        assert_eq!(reloaded.get("list"), cache.get("list"));
    }

    #[test]
    fn test_persist_replaces_file_and_leaves_no_temp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = FileCache::open(&path).unwrap();
        cache.set(CLASS_KEY, class_entry("first", 1i64.into()));
        cache.persist().unwrap();
        cache.set(CLASS_KEY, class_entry("second", 2i64.into()));
        cache.persist().unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);

        let reloaded = FileCache::open(&path).unwrap();
        let class = reloaded.get(CLASS_KEY).and_then(CacheEntry::as_class).unwrap();
        assert!(class.has("second"));
        assert!(!class.has("first"));
    }

    #[test]
    fn test_delete_and_clear_are_persisted() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = FileCache::open(&path).unwrap();
        cache
            .set("foo", class_entry("foo", "bar".into()))
            .set("name", class_entry("name", "John Doe".into()));
        cache.persist().unwrap();

        cache.delete("foo");
        cache.persist().unwrap();
        let reloaded = FileCache::open(&path).unwrap();
        assert!(!reloaded.has("foo"));
        assert!(reloaded.has("name"));

        cache.clear();
        cache.close().unwrap();
        assert!(FileCache::open(&path).unwrap().is_empty());
    }

    #[test]
    fn test_drop_without_persist_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");

        {
            let mut cache = FileCache::open(&path).unwrap();
            cache.set(METHODS_KEY, class_entry("x", true.into()));
        }

        assert!(FileCache::open(&path).unwrap().is_empty());
    }

    #[test]
    fn test_scoped_persists_on_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");

        let result: Result<()> = FileCache::scoped(&path, |cache| {
            cache.set(CLASS_KEY, class_entry("kept", true.into()));
            Err(AnnotationError::MissingKey("boom".to_string()))
        });
        assert!(matches!(result, Err(AnnotationError::MissingKey(_))));

        let reloaded = FileCache::open(&path).unwrap();
        assert!(reloaded.has(CLASS_KEY));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(FileCache::open(&path), Err(AnnotationError::Json(_))));
    }
}
