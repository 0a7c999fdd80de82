//! @module "Annotation Accessor"
//! @summary "Class, method and property annotations of one type, optionally cached"
//! @layer api
//!
//! ```rust,no_run
//! use simple_annotation::{Annotations, FileCache, TypeRegistry};
//!
//! fn main() -> simple_annotation::Result<()> {
//!     let registry = TypeRegistry::load("types.yaml")?;
//!     let mut annotations = Annotations::from_registry(&registry, "AnnotatedClass")?
//!         .with_cache(Box::new(FileCache::open(".annotation-cache/AnnotatedClass.json")?));
//!
//!     let class = annotations.class_annotations()?;
//!     let method = annotations.method_annotations("methodOne")?;
//!     println!("{} / {}", class.to_json(), method.to_json());
//!
//!     annotations.flush_cache()?;
//!     Ok(())
//! }
//! ```

use crate::cache::{AnnotationCache, CacheEntry, MemberAnnotations, CLASS_KEY, METHODS_KEY, PROPERTIES_KEY};
use crate::error::{AnnotationError, Result};
use crate::parse::{AnnotationParser, DocParser};
use crate::parsed::ParsedAnnotation;
use crate::reflect::{MemberLister, TypeDescriptor, TypeRegistry};

/// Which member list an operation works on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberKind {
    Property,
    Method,
}

impl MemberKind {
    fn cache_key(self) -> &'static str {
        match self {
            MemberKind::Property => PROPERTIES_KEY,
            MemberKind::Method => METHODS_KEY,
        }
    }
}

/// Annotation lookups for one declared type
pub struct Annotations<L> {
    lister: L,
    parser: Box<dyn DocParser>,
    cache: Option<Box<dyn AnnotationCache>>,
}

impl<'r> Annotations<&'r TypeDescriptor> {
    /// Look a type up by name in a registry
    pub fn from_registry(registry: &'r TypeRegistry, name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(AnnotationError::EmptyClass);
        }
        Self::new(registry.get(name)?)
    }
}

impl<L: MemberLister> Annotations<L> {
    /// Fails with `EmptyClass` when the lister has no type name
    pub fn new(lister: L) -> Result<Self> {
        if lister.type_name().trim().is_empty() {
            return Err(AnnotationError::EmptyClass);
        }

        Ok(Self {
            lister,
            parser: Box::new(AnnotationParser::new()),
            cache: None,
        })
    }

    pub fn with_parser(mut self, parser: Box<dyn DocParser>) -> Self {
        self.parser = parser;
        self
    }

    pub fn set_parser(&mut self, parser: Box<dyn DocParser>) -> &mut Self {
        self.parser = parser;
        self
    }

    pub fn with_cache(mut self, cache: Box<dyn AnnotationCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Attach (or with `None`, detach) a cache, returning the previous one
    pub fn set_cache(&mut self, cache: Option<Box<dyn AnnotationCache>>) -> Option<Box<dyn AnnotationCache>> {
        std::mem::replace(&mut self.cache, cache)
    }

    pub fn take_cache(&mut self) -> Option<Box<dyn AnnotationCache>> {
        self.cache.take()
    }

    /// Write the attached cache to its backing store
    pub fn flush_cache(&mut self) -> Result<()> {
        match self.cache.as_mut() {
            Some(cache) => cache.flush(),
            None => Ok(()),
        }
    }

    pub fn lister(&self) -> &L {
        &self.lister
    }

    pub fn type_name(&self) -> &str {
        self.lister.type_name()
    }

    /// Annotations of the type's own doc comment
    pub fn class_annotations(&mut self) -> Result<ParsedAnnotation> {
        if let Some(parsed) = self.cached(CLASS_KEY).and_then(CacheEntry::as_class) {
            tracing::debug!("Cache hit: {} class annotations", self.lister.type_name());
            return Ok(parsed.clone());
        }

        let parsed = self.parser.parse(self.lister.class_doc());
        if let Some(cache) = self.cache.as_mut() {
            cache.set(CLASS_KEY, CacheEntry::Class(parsed.clone()));
        }
        Ok(parsed)
    }

    /// Annotations of every property, keyed by property name
    pub fn properties_annotations(&mut self) -> Result<MemberAnnotations> {
        self.members_annotations(MemberKind::Property)
    }

    /// Annotations of a single property
    pub fn property_annotations(&mut self, name: &str) -> Result<ParsedAnnotation> {
        self.member_annotations(MemberKind::Property, name)
    }

    /// Annotations of every method, keyed by method name
    pub fn methods_annotations(&mut self) -> Result<MemberAnnotations> {
        self.members_annotations(MemberKind::Method)
    }

    /// Annotations of a single method
    pub fn method_annotations(&mut self, name: &str) -> Result<ParsedAnnotation> {
        self.member_annotations(MemberKind::Method, name)
    }

    fn cached(&self, key: &str) -> Option<&CacheEntry> {
        self.cache.as_ref().and_then(|cache| cache.get(key))
    }

    fn member_names(&self, kind: MemberKind) -> Vec<&str> {
        match kind {
            MemberKind::Property => self.lister.property_names(),
            MemberKind::Method => self.lister.method_names(),
        }
    }

    fn member_doc(&self, kind: MemberKind, name: &str) -> Result<&str> {
        match kind {
            MemberKind::Property => self.lister.property_doc(name),
            MemberKind::Method => self.lister.method_doc(name),
        }
    }

    fn not_found(&self, kind: MemberKind, name: &str) -> AnnotationError {
        let class = self.lister.type_name().to_string();
        let name = name.to_string();
        match kind {
            MemberKind::Property => AnnotationError::PropertyNotFound { class, name },
            MemberKind::Method => AnnotationError::MethodNotFound { class, name },
        }
    }

    fn members_annotations(&mut self, kind: MemberKind) -> Result<MemberAnnotations> {
        let key = kind.cache_key();
        if let Some(members) = self.cached(key).and_then(CacheEntry::as_members) {
            tracing::debug!("Cache hit: {} {}", self.lister.type_name(), key);
            return Ok(members.clone());
        }

        let mut members = MemberAnnotations::new();
        for name in self.member_names(kind) {
            let doc = self.member_doc(kind, name)?;
            members.insert(name, self.parser.parse(doc));
        }

        if let Some(cache) = self.cache.as_mut() {
            cache.set(key, CacheEntry::Members(members.clone()));
        }
        Ok(members)
    }

    fn member_annotations(&mut self, kind: MemberKind, name: &str) -> Result<ParsedAnnotation> {
        if self.cache.is_none() {
            let doc = self.member_doc(kind, name)?;
            return Ok(self.parser.parse(doc));
        }

        // Populates the cache entry on a miss
        let mut members = self.members_annotations(kind)?;
        members
            .remove(name)
            .ok_or_else(|| self.not_found(kind, name))
    }
}
