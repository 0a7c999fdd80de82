//! @module "Commands"
//! @summary "CLI command implementations"
//! @layer handler
//!
//! Each command is in its own submodule and takes an options struct built by
//! the binary from its arguments.

pub mod cache;
pub mod inspect;
pub mod parse;

pub use cache::{execute_cache, CacheSubcommand};
pub use inspect::{execute_inspect, InspectOptions, InspectTarget};
pub use parse::{execute_parse, ParseOptions};

/// Serialize command output, pretty or compact
pub(crate) fn render_json(value: &serde_json::Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
