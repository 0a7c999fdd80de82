//! @module "Parser"
//! @summary "Docblock annotation parsing"
//! @layer service
//!
//! Turns a documentation comment into a [`ParsedAnnotation`]: the
//! [scanner](scanner) finds the `@tag` lines, the [value parser](value)
//! classifies what follows each tag, and the bag merges repeated tags.

pub mod scanner;
pub mod value;

pub use scanner::{scan_tags, TagOccurrence};
pub use value::parse_value;

use crate::parsed::ParsedAnnotation;

/// Anything able to turn a comment block into parsed annotations
pub trait DocParser {
    fn parse(&self, doc: &str) -> ParsedAnnotation;
}

/// Default docblock parser.
///
/// Holds no state between calls: every [`parse`](DocParser::parse) builds a
/// new bag, so one instance can be reused across comment blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationParser;

impl AnnotationParser {
    pub fn new() -> Self {
        Self
    }
}

impl DocParser for AnnotationParser {
    fn parse(&self, doc: &str) -> ParsedAnnotation {
        let mut parsed = ParsedAnnotation::new();

        for tag in scan_tags(doc) {
            let value = parse_value(&tag.raw);
            tracing::trace!("@{} -> {}", tag.name, value.type_name());
            parsed.set(tag.name, value);
        }

        tracing::debug!("Parsed {} annotation(s)", parsed.len());
        parsed
    }
}
