//! @module "Cache Types"
//! @summary "Entries stored in an annotation cache"
//! @layer model
//!
//! These types serialize directly to/from the cache file.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ordered::OrderedMap;
use crate::parsed::ParsedAnnotation;

/// Key of the type-level annotations
pub const CLASS_KEY: &str = "class";
/// Key of the method name → annotations map
pub const METHODS_KEY: &str = "methods";
/// Key of the property name → annotations map
pub const PROPERTIES_KEY: &str = "properties";

/// Annotations of one member, keyed by member name, in declaration order
pub type MemberAnnotations = OrderedMap<ParsedAnnotation>;

/// A cached parse result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "annotations", rename_all = "lowercase")]
pub enum CacheEntry {
    /// Annotations of the type itself
    Class(ParsedAnnotation),
    /// Annotations of every method or every property
    Members(MemberAnnotations),
}

impl CacheEntry {
    pub fn as_class(&self) -> Option<&ParsedAnnotation> {
        match self {
            CacheEntry::Class(parsed) => Some(parsed),
            CacheEntry::Members(_) => None,
        }
    }

    pub fn as_members(&self) -> Option<&MemberAnnotations> {
        match self {
            CacheEntry::Members(members) => Some(members),
            CacheEntry::Class(_) => None,
        }
    }

    /// Plain JSON rendering of the entry's annotations
    pub fn to_json(&self) -> Value {
        match self {
            CacheEntry::Class(parsed) => parsed.to_json(),
            CacheEntry::Members(members) => members_to_json(members),
        }
    }
}

/// `{ "<member>": { "<tag>": <value>, ... }, ... }`
pub fn members_to_json(members: &MemberAnnotations) -> Value {
    Value::Object(
        members
            .iter()
            .map(|(name, parsed)| (name.to_string(), parsed.to_json()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AnnotationValue;
    use serde_json::json;

    #[test]
    fn test_cache_entry_roundtrip() {
        let mut method = ParsedAnnotation::new();
        method
            .set("param", "int $paramOne".into())
            .set("param", "float $paramTwo".into());

        let mut members = MemberAnnotations::new();
        members.insert("methodOne", method);
        members.insert("methodTwo", ParsedAnnotation::new());
        let entry = CacheEntry::Members(members);

        let json = serde_json::to_string_pretty(&entry).unwrap();
        let parsed: CacheEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);

        let members = parsed.as_members().unwrap();
        let names: Vec<&str> = members.keys().collect();
        assert_eq!(names, vec!["methodOne", "methodTwo"]);
        assert!(parsed.as_class().is_none());
        assert_eq!(
            parsed.to_json(),
            json!({"methodOne": {"param": ["int $paramOne", "float $paramTwo"]}, "methodTwo": {}})
        );
    }

    #[test]
    fn test_class_entry_shape() {
        let mut class = ParsedAnnotation::new();
        class.set("anotherValue", AnnotationValue::Null);

        let json = serde_json::to_value(CacheEntry::Class(class)).unwrap();
        assert_eq!(
            json,
            json!({"kind": "class", "annotations": {"anotherValue": {"type": "null"}}})
        );
    }
}
