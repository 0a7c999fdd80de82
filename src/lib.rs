#![forbid(unsafe_code)]

//! @module "Simple Annotation Library"
//! @summary "Typed key/value extraction from docblock annotations"
//! @layer api
//!
//! # Simple Annotation
//!
//! Reads `@tag value` lines out of documentation comments and turns each
//! value into a typed [`AnnotationValue`]:
//!
//! | Text after the tag        | Value                    |
//! |---------------------------|--------------------------|
//! | *(nothing)*               | `Bool(true)`             |
//! | `[a, 'b', "c"]`           | `List(["a", "b", "c"])`  |
//! | `{"age": 34}`             | `Json(..)`               |
//! | `34` / `-3.14`            | `Int` / `Float`          |
//! | `true` / `FALSE` / `null` | `Bool` / `Null`          |
//! | `"quoted"` / anything     | `String`                 |
//!
//! A tag repeated in one block collects every value in order.
//!
//! ## Example
//!
//! ```rust
//! use simple_annotation::{AnnotationParser, AnnotationValue, DocParser};
//!
//! let parsed = AnnotationParser::new().parse(
//!     "/**\n * @param int $a\n * @param bool $b\n * @deprecated\n */",
//! );
//!
//! assert_eq!(parsed.get("deprecated").unwrap(), &AnnotationValue::Bool(true));
//! assert_eq!(parsed.get("param").unwrap().as_repeated().unwrap().len(), 2);
//! ```
//!
//! Per-type lookups with optional caching go through [`Annotations`].

pub mod annotation;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod ordered;
pub mod parse;
pub mod parsed;
pub mod reflect;
pub mod value;

// Re-exports
pub use annotation::Annotations;
pub use cache::{AnnotationCache, CacheEntry, FileCache, MemberAnnotations, MemoryCache};
pub use config::Config;
pub use error::{AnnotationError, Result};
pub use ordered::OrderedMap;
pub use parse::{parse_value, scan_tags, AnnotationParser, DocParser, TagOccurrence};
pub use parsed::ParsedAnnotation;
pub use reflect::{MemberDescriptor, MemberLister, TypeDescriptor, TypeRegistry};
pub use value::AnnotationValue;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
