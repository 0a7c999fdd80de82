//! @module "Cache Command"
//! @summary "Inspect and clear cached parse results"
//! @layer handler

use anyhow::Result;
use console::style;
use serde_json::{Map, Value};

use super::render_json;
use crate::cache::{AnnotationCache, FileCache};
use crate::config::Config;

/// Cache subcommands
#[derive(Debug, Clone)]
pub enum CacheSubcommand {
    /// Print the cached annotations of a type
    Show { type_name: String },
    /// Remove one type's cache file, or the whole cache directory
    Clear { type_name: Option<String> },
}

/// Execute a cache subcommand
pub fn execute_cache(subcommand: CacheSubcommand, config: &Config) -> Result<()> {
    match subcommand {
        CacheSubcommand::Show { type_name } => show(&type_name, config),
        CacheSubcommand::Clear { type_name } => clear(type_name.as_deref(), config),
    }
}

fn show(type_name: &str, config: &Config) -> Result<()> {
    let path = config.cache_path_for(type_name);
    if !path.exists() {
        eprintln!("{} No cache for {}", style("!").yellow(), type_name);
        return Ok(());
    }

    let cache = FileCache::open(&path)?;
    let entries: Map<String, Value> = cache
        .keys()
        .filter_map(|key| cache.get(key).map(|entry| (key.to_string(), entry.to_json())))
        .collect();

    println!("{}", render_json(&Value::Object(entries), config.output.pretty)?);
    Ok(())
}

fn clear(type_name: Option<&str>, config: &Config) -> Result<()> {
    match type_name {
        Some(name) => {
            let path = config.cache_path_for(name);
            if path.exists() {
                std::fs::remove_file(&path)?;
                println!("{} Removed {}", style("✓").green(), path.display());
            } else {
                println!("{} No cache for {}", style("!").yellow(), name);
            }
        }
        None => {
            let dir = &config.cache.directory;
            if dir.exists() {
                std::fs::remove_dir_all(dir)?;
                println!("{} Removed {}", style("✓").green(), dir.display());
            } else {
                println!("{} Cache directory {} does not exist", style("!").yellow(), dir.display());
            }
        }
    }
    Ok(())
}
