//! @module "Parse Command"
//! @summary "Parse a single comment block and print its annotations"
//! @layer handler

use std::path::PathBuf;

use anyhow::Result;

use super::render_json;
use crate::parse::{AnnotationParser, DocParser};

/// Options for the parse command
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// File holding the comment block (reads from stdin if None)
    pub input: Option<PathBuf>,
    /// Pretty-print the JSON output
    pub pretty: bool,
}

/// Execute the parse command
pub fn execute_parse(options: ParseOptions) -> Result<()> {
    let doc = match &options.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let parsed = AnnotationParser::new().parse(&doc);
    println!("{}", render_json(&parsed.to_json(), options.pretty)?);

    Ok(())
}
