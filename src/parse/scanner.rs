//! @module "Tag Scanner"
//! @summary "Split a comment block into (tag, raw text) occurrences"
//! @layer service

use std::sync::LazyLock;

use regex::Regex;

/// First `@name` on a line, the rest of the line is the raw value.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([A-Za-z][A-Za-z0-9_]*)(.*)$").unwrap()
});

/// One `@tag` found in a comment block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOccurrence {
    /// Tag name with its original casing
    pub name: String,
    /// Trimmed text following the tag on the same line, may be empty
    pub raw: String,
}

impl TagOccurrence {
    pub fn new(name: impl Into<String>, raw: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw: raw.into(),
        }
    }
}

/// Scan a comment block line by line, in source order.
///
/// A `*/` closing the comment on the tag's own line is not part of the value,
/// so `/** @var string */` yields `("var", "string")`.
pub fn scan_tags(doc: &str) -> Vec<TagOccurrence> {
    doc.lines()
        .filter_map(|line| {
            let cap = TAG_PATTERN.captures(line)?;
            let rest = cap[2].trim_end();
            let rest = rest.strip_suffix("*/").unwrap_or(rest);
            Some(TagOccurrence::new(&cap[1], rest.trim()))
        })
        .collect()
}
