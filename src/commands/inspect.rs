//! @module "Inspect Command"
//! @summary "Print class, property and method annotations of a described type"
//! @layer handler

use std::path::PathBuf;

use anyhow::Result;
use serde_json::{json, Value};

use super::render_json;
use crate::annotation::Annotations;
use crate::cache::{members_to_json, FileCache};
use crate::config::Config;
use crate::reflect::{MemberLister, TypeRegistry};

/// What part of the type to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InspectTarget {
    /// Class, properties and methods
    All,
    Class,
    Property(String),
    Method(String),
}

/// Options for the inspect command
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// Descriptor file (JSON or YAML)
    pub descriptor: PathBuf,
    /// Type to inspect
    pub type_name: String,
    pub target: InspectTarget,
    /// Skip the cache even when enabled in config
    pub no_cache: bool,
}

/// Execute the inspect command
pub fn execute_inspect(options: InspectOptions, config: &Config) -> Result<()> {
    let registry = TypeRegistry::load(&options.descriptor)?;
    let mut annotations = Annotations::from_registry(&registry, &options.type_name)?;

    if config.cache.enabled && !options.no_cache {
        let path = config.cache_path_for(annotations.type_name());
        tracing::debug!("Using cache file {}", path.display());
        annotations = annotations.with_cache(Box::new(FileCache::open(&path)?));
    }

    // The cache is written even when a lookup fails
    let result = inspect(&mut annotations, &options.target);
    let flushed = annotations.flush_cache();
    let value = result?;
    flushed?;

    println!("{}", render_json(&value, config.output.pretty)?);
    Ok(())
}

fn inspect<L: MemberLister>(annotations: &mut Annotations<L>, target: &InspectTarget) -> Result<Value> {
    let value = match target {
        InspectTarget::All => json!({
            "type": annotations.type_name(),
            "class": annotations.class_annotations()?.to_json(),
            "properties": members_to_json(&annotations.properties_annotations()?),
            "methods": members_to_json(&annotations.methods_annotations()?),
        }),
        InspectTarget::Class => annotations.class_annotations()?.to_json(),
        InspectTarget::Property(name) => annotations.property_annotations(name)?.to_json(),
        InspectTarget::Method(name) => annotations.method_annotations(name)?.to_json(),
    };
    Ok(value)
}
