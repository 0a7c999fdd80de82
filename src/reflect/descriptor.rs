//! @module "Type Descriptors"
//! @summary "Declarative type/member/doc-comment listings loaded from JSON or YAML"
//! @layer model
//!
//! A descriptor file holds either one type, a list of types, or an object
//! with a `types` list:
//!
//! ```yaml
//! types:
//!   - name: AnnotatedClass
//!     doc: |
//!       /**
//!        * @package Tests
//!        */
//!     properties:
//!       - name: propertyOne
//!         doc: "/** @var string */"
//!     methods:
//!       - name: methodTwo
//!         doc: "/** @return string */"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::MemberLister;
use crate::error::{AnnotationError, Result};
use crate::ordered::OrderedMap;

/// A property or method and its doc comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDescriptor {
    pub name: String,
    /// Raw doc comment, empty when the member is undocumented
    #[serde(default)]
    pub doc: String,
}

/// A declared type with its own doc comment and those of its members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub doc: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<MemberDescriptor>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<MemberDescriptor>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: String::new(),
            properties: vec![],
            methods: vec![],
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = doc.into();
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, doc: impl Into<String>) -> Self {
        self.properties.push(MemberDescriptor {
            name: name.into(),
            doc: doc.into(),
        });
        self
    }

    pub fn with_method(mut self, name: impl Into<String>, doc: impl Into<String>) -> Self {
        self.methods.push(MemberDescriptor {
            name: name.into(),
            doc: doc.into(),
        });
        self
    }
}

fn find_member<'a>(members: &'a [MemberDescriptor], name: &str) -> Option<&'a MemberDescriptor> {
    members.iter().find(|m| m.name == name)
}

impl MemberLister for TypeDescriptor {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn class_doc(&self) -> &str {
        &self.doc
    }

    fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    fn method_names(&self) -> Vec<&str> {
        self.methods.iter().map(|m| m.name.as_str()).collect()
    }

    fn property_doc(&self, name: &str) -> Result<&str> {
        find_member(&self.properties, name)
            .map(|p| p.doc.as_str())
            .ok_or_else(|| AnnotationError::PropertyNotFound {
                class: self.name.clone(),
                name: name.to_string(),
            })
    }

    fn method_doc(&self, name: &str) -> Result<&str> {
        find_member(&self.methods, name)
            .map(|m| m.doc.as_str())
            .ok_or_else(|| AnnotationError::MethodNotFound {
                class: self.name.clone(),
                name: name.to_string(),
            })
    }
}

/// Accepted shapes of a descriptor file
#[derive(Deserialize)]
#[serde(untagged)]
enum DescriptorFile {
    Many { types: Vec<TypeDescriptor> },
    List(Vec<TypeDescriptor>),
    One(TypeDescriptor),
}

impl DescriptorFile {
    fn into_types(self) -> Vec<TypeDescriptor> {
        match self {
            DescriptorFile::Many { types } => types,
            DescriptorFile::List(types) => types,
            DescriptorFile::One(ty) => vec![ty],
        }
    }
}

/// Named type descriptors, in declaration order
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: OrderedMap<TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.json`, `.yaml` or `.yml` descriptor file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let registry = match ext.as_str() {
            "json" => Self::from_json_str(&content)?,
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            _ => return Err(AnnotationError::UnsupportedDescriptor(path.display().to_string())),
        };
        tracing::debug!("Loaded {} type(s) from {}", registry.len(), path.display());
        Ok(registry)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: DescriptorFile = serde_json::from_str(content)?;
        Ok(file.into_types().into_iter().collect())
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let file: DescriptorFile = serde_yaml::from_str(content)?;
        Ok(file.into_types().into_iter().collect())
    }

    /// Add a type; a later type with the same name replaces the earlier one
    pub fn insert(&mut self, ty: TypeDescriptor) -> &mut Self {
        if self.types.contains_key(&ty.name) {
            tracing::warn!("Duplicate type descriptor: {}", ty.name);
        }
        self.types.insert(ty.name.clone(), ty);
        self
    }

    pub fn get(&self, name: &str) -> Result<&TypeDescriptor> {
        self.types
            .get(name)
            .ok_or_else(|| AnnotationError::ClassNotFound(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.types.keys()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDescriptor> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        let mut registry = Self::new();
        for ty in iter {
            registry.insert(ty);
        }
        registry
    }
}
