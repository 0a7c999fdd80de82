//! @module "Value Parser"
//! @summary "Classify the raw text after a tag into a typed value"
//! @layer service
//!
//! Classification order, first match wins:
//!
//! 1. empty text is a bare flag: `true`
//! 2. `[...]` is a one-dimensional string list
//! 3. `{...}` is decoded as JSON
//! 4. `-?[0-9]+(.[0-9]+)?` is an int or a float
//! 5. `true`, `false`, `null` in any case
//! 6. anything else is a string, minus one surrounding quote on each side

use std::sync::LazyLock;

use regex::Regex;

use crate::value::AnnotationValue;

static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap()
});

const QUOTES: [char; 2] = ['\'', '"'];

/// Turn the trimmed text following a tag into a value. Never fails.
pub fn parse_value(raw: &str) -> AnnotationValue {
    if raw.is_empty() {
        return AnnotationValue::Bool(true);
    }

    if raw.starts_with('[') && raw.ends_with(']') && raw.len() >= 2 {
        return parse_list(&raw[1..raw.len() - 1]);
    }

    if raw.starts_with('{') && raw.ends_with('}') {
        return parse_json(raw);
    }

    if NUMBER_PATTERN.is_match(raw) {
        return parse_number(raw);
    }

    if raw.eq_ignore_ascii_case("true") {
        AnnotationValue::Bool(true)
    } else if raw.eq_ignore_ascii_case("false") {
        AnnotationValue::Bool(false)
    } else if raw.eq_ignore_ascii_case("null") {
        AnnotationValue::Null
    } else {
        AnnotationValue::String(strip_quotes(raw).to_string())
    }
}

/// Naive comma split: quoted commas and nested brackets are not understood.
fn parse_list(inner: &str) -> AnnotationValue {
    AnnotationValue::List(
        inner
            .split(',')
            .map(|item| strip_quotes(item.trim()).to_string())
            .collect(),
    )
}

fn parse_json(raw: &str) -> AnnotationValue {
    match serde_json::from_str(raw) {
        Ok(value) => AnnotationValue::Json(value),
        Err(e) => {
            tracing::debug!("Malformed JSON annotation value {:?}: {}", raw, e);
            AnnotationValue::Null
        }
    }
}

fn parse_number(raw: &str) -> AnnotationValue {
    if raw.contains('.') {
        return parse_finite_float(raw);
    }

    match raw.parse() {
        Ok(i) => AnnotationValue::Int(i),
        // Out of i64 range: keep the magnitude as a float
        Err(_) => parse_finite_float(raw),
    }
}

/// Values beyond f64 range stay as text; infinity has no JSON form.
fn parse_finite_float(raw: &str) -> AnnotationValue {
    raw.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(AnnotationValue::Float)
        .unwrap_or_else(|| AnnotationValue::String(raw.to_string()))
}

/// Drop one leading and one trailing quote, independently of each other.
/// A lone quote character is only removed once.
fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix(QUOTES).unwrap_or(text);
    text.strip_suffix(QUOTES).unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_is_true() {
        assert_eq!(parse_value(""), AnnotationValue::Bool(true));
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse_value("34"), AnnotationValue::Int(34));
        assert_eq!(parse_value("-7"), AnnotationValue::Int(-7));
        assert_eq!(parse_value("007"), AnnotationValue::Int(7));
    }

    #[test]
    fn test_floats() {
        assert_eq!(parse_value("3.14"), AnnotationValue::Float(3.14));
        assert_eq!(parse_value("-0.5"), AnnotationValue::Float(-0.5));
        assert_eq!(parse_value("2.0"), AnnotationValue::Float(2.0));
    }

    #[test]
    fn test_integer_overflow_becomes_float() {
        assert_eq!(
            parse_value("99999999999999999999"),
            AnnotationValue::Float(99999999999999999999.0)
        );
    }

    #[test]
    fn test_numbers_beyond_f64_range_stay_text() {
        let huge_int = format!("1{}", "0".repeat(400));
        assert_eq!(parse_value(&huge_int), AnnotationValue::String(huge_int.clone()));

        let huge_float = format!("-{}.5", "9".repeat(400));
        assert_eq!(parse_value(&huge_float), AnnotationValue::String(huge_float.clone()));
    }

    #[test]
    fn test_number_lookalikes_are_strings() {
        assert_eq!(parse_value("+5"), AnnotationValue::from("+5"));
        assert_eq!(parse_value("1e10"), AnnotationValue::from("1e10"));
        assert_eq!(parse_value("1,000"), AnnotationValue::from("1,000"));
        assert_eq!(parse_value("3."), AnnotationValue::from("3."));
        assert_eq!(parse_value("5-"), AnnotationValue::from("5-"));
    }

    #[test]
    fn test_keywords_any_case() {
        for raw in ["true", "TRUE", "True"] {
            assert_eq!(parse_value(raw), AnnotationValue::Bool(true), "{raw}");
        }
        for raw in ["false", "False", "FALSE"] {
            assert_eq!(parse_value(raw), AnnotationValue::Bool(false), "{raw}");
        }
        for raw in ["null", "NULL", "Null"] {
            assert_eq!(parse_value(raw), AnnotationValue::Null, "{raw}");
        }
    }

    #[test]
    fn test_list() {
        let value = parse_value(r#"['item 1', 'item 2', "item 3"]"#);
        let items = value.as_list().expect("list");
        assert_eq!(items, ["item 1", "item 2", "item 3"]);
    }

    #[test]
    fn test_empty_list_has_one_empty_item() {
        assert_eq!(parse_value("[]"), AnnotationValue::List(vec![String::new()]));
    }

    #[test]
    fn test_list_tolerates_unbalanced_quotes() {
        let value = parse_value(r#"['a, b", c']"#);
        assert_eq!(
            value,
            AnnotationValue::List(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn test_list_splits_naively() {
        let value = parse_value(r#"["a,b", c]"#);
        assert_eq!(
            value,
            AnnotationValue::List(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn test_json_object() {
        let value = parse_value(r#"{"PI": 3.14, "name": "The name", "genre": ["f","m"], "age": 34}"#);
        let json = value.as_json().expect("json");

        assert_eq!(json["PI"].as_f64(), Some(3.14));
        assert!(json["PI"].is_f64());
        assert_eq!(json["age"].as_i64(), Some(34));
        assert_eq!(json["genre"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["name"], json!("The name"));
    }

    #[test]
    fn test_malformed_json_is_null() {
        assert_eq!(parse_value("{not json}"), AnnotationValue::Null);
        assert_eq!(parse_value("{"), AnnotationValue::from("{"));
    }

    #[test]
    fn test_strings_lose_one_quote_per_side() {
        assert_eq!(parse_value(r#""my string""#), AnnotationValue::from("my string"));
        assert_eq!(parse_value("'single'"), AnnotationValue::from("single"));
        assert_eq!(parse_value(r#"'mixed""#), AnnotationValue::from("mixed"));
        assert_eq!(parse_value(r#""open"#), AnnotationValue::from("open"));
        assert_eq!(parse_value(r#"""double"""#), AnnotationValue::from(r#""double""#));
        assert_eq!(parse_value("Tests\\TestSources"), AnnotationValue::from("Tests\\TestSources"));
    }

    #[test]
    fn test_single_characters_do_not_panic() {
        assert_eq!(parse_value("\""), AnnotationValue::from(""));
        assert_eq!(parse_value("'"), AnnotationValue::from(""));
        assert_eq!(parse_value("["), AnnotationValue::from("["));
        assert_eq!(parse_value("]"), AnnotationValue::from("]"));
        assert_eq!(parse_value("x"), AnnotationValue::from("x"));
        assert_eq!(parse_value("7"), AnnotationValue::Int(7));
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(parse_value("'héllo wörld'"), AnnotationValue::from("héllo wörld"));
        assert_eq!(parse_value("[é, 'ü']"), AnnotationValue::List(vec!["é".into(), "ü".into()]));
    }
}
