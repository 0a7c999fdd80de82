//! @module "Errors"
//! @summary "Error taxonomy for annotation extraction"
//! @layer model
//!
//! Parsing itself never fails. Everything here is either a programmer error
//! (empty type, missing member, unset key) or an I/O failure coming from a
//! descriptor file or the cache.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, AnnotationError>;

#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("The given class must not be empty. It must be a declared type or its full qualified name.")]
    EmptyClass,

    #[error("Class {0} does not exist")]
    ClassNotFound(String),

    #[error("Property {name} does not exist on {class}")]
    PropertyNotFound { class: String, name: String },

    #[error("Method {name} does not exist on {class}")]
    MethodNotFound { class: String, name: String },

    /// Lookup of a tag that was never set on a parsed annotation
    #[error("Undefined annotation key: {0}")]
    MissingKey(String),

    #[error("Unsupported descriptor format: {0}")]
    UnsupportedDescriptor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
