//! @module "Parsed Annotation"
//! @summary "Tag name to value bag produced by one parse"
//! @layer model

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AnnotationError, Result};
use crate::ordered::OrderedMap;
use crate::value::AnnotationValue;

/// The annotations found in a single comment block.
///
/// Setting a tag that is already present does not overwrite it: the second
/// occurrence turns the slot into [`AnnotationValue::Repeated`] holding both
/// values, and every further occurrence is appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParsedAnnotation {
    values: OrderedMap<AnnotationValue>,
}

impl ParsedAnnotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: AnnotationValue) -> &mut Self {
        let name = name.into();
        match self.values.get_mut(&name) {
            None => {
                self.values.insert(name, value);
            }
            Some(AnnotationValue::Repeated(seen)) => seen.push(value),
            Some(slot) => {
                let first = std::mem::replace(slot, AnnotationValue::Null);
                *slot = AnnotationValue::Repeated(vec![first, value]);
            }
        }
        self
    }

    /// Value of a tag. Asking for a tag that was never set is a caller bug.
    pub fn get(&self, name: &str) -> Result<&AnnotationValue> {
        self.values
            .get(name)
            .ok_or_else(|| AnnotationError::MissingKey(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnnotationValue)> {
        self.values.iter()
    }

    /// Every association as a plain JSON object, in tag order.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.values
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_json()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_bag_is_empty() {
        let bag = ParsedAnnotation::new();
        assert!(bag.is_empty());
        assert_eq!(bag.len(), 0);
    }

    #[test]
    fn test_first_set_stores_bare_value() {
        let mut bag = ParsedAnnotation::new();
        bag.set("age", AnnotationValue::Int(34));

        assert!(!bag.is_empty());
        assert!(bag.has("age"));
        assert_eq!(bag.get("age").unwrap(), &AnnotationValue::Int(34));
    }

    #[test]
    fn test_repeated_set_accumulates() {
        let mut bag = ParsedAnnotation::new();
        bag.set("x", 1i64.into());
        bag.set("x", 2i64.into());
        assert_eq!(
            bag.get("x").unwrap(),
            &AnnotationValue::Repeated(vec![1i64.into(), 2i64.into()])
        );

        bag.set("x", 3i64.into());
        assert_eq!(
            bag.get("x").unwrap(),
            &AnnotationValue::Repeated(vec![1i64.into(), 2i64.into(), 3i64.into()])
        );
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_list_value_is_not_extended_by_repeat() {
        let mut bag = ParsedAnnotation::new();
        bag.set("tags", AnnotationValue::List(vec!["a".into(), "b".into()]));
        bag.set("tags", "c".into());

        let repeated = bag.get("tags").unwrap().as_repeated().unwrap();
        assert_eq!(repeated.len(), 2);
        assert_eq!(repeated[0].as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_get_unset_key_is_an_error() {
        let bag = ParsedAnnotation::new();
        let err = bag.get("missing").unwrap_err();
        assert!(matches!(err, AnnotationError::MissingKey(ref k) if k == "missing"));
    }

    #[test]
    fn test_to_json_export() {
        let mut bag = ParsedAnnotation::new();
        bag.set("package", "Examples".into())
            .set("list", AnnotationValue::List(vec!["a".into()]))
            .set("flag", true.into());

        assert_eq!(
            bag.to_json(),
            json!({"package": "Examples", "list": ["a"], "flag": true})
        );
        let names: Vec<&str> = bag.names().collect();
        assert_eq!(names, vec!["package", "list", "flag"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut bag = ParsedAnnotation::new();
        bag.set("param", "int $a".into())
            .set("param", "float $b".into())
            .set("meta", json!({"PI": 3.14, "age": 34}).into())
            .set("nothing", AnnotationValue::Null);

        let text = serde_json::to_string(&bag).unwrap();
        let back: ParsedAnnotation = serde_json::from_str(&text).unwrap();
        assert_eq!(back, bag);
    }
}
