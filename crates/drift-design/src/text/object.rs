//! Object-literal entry parser for JS config files and variant tables.
//!
//! Parses the *body* of an object literal (text between the braces) one
//! level at a time; nested objects are returned as sub-bodies the caller
//! can parse again.

use super::balanced::{split_top_level, top_level_positions};
use super::literal::string_literals;

/// Value side of an object entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectValue<'a> {
    /// A single string or template literal, quotes removed
    Str(&'a str),
    /// Nested object body and its byte offset within the parsed text
    Object { body: &'a str, offset: usize },
    /// Array literal body
    Array(&'a str),
    /// Anything else: identifiers, numbers, calls, functions
    Expr(&'a str),
}

impl<'a> ObjectValue<'a> {
    /// String elements of an array value (or the value itself if it is a string).
    pub fn strings(&self) -> Vec<&'a str> {
        match self {
            ObjectValue::Str(s) => vec![s],
            ObjectValue::Array(body) => split_top_level(body, b',')
                .into_iter()
                .filter_map(|(_, item)| single_literal(item.trim()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One `key: value` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectEntry<'a> {
    pub key: String,
    pub value: ObjectValue<'a>,
    /// Byte offset of the key within the parsed text
    pub offset: usize,
}

/// Parse the entries of an object body. Spreads and methods are skipped.
pub fn parse_object(body: &str) -> Vec<ObjectEntry<'_>> {
    let mut entries = Vec::new();
    for (seg_offset, segment) in split_top_level(body, b',') {
        let leading = segment.len() - segment.trim_start().len();
        let trimmed = segment.trim();
        if trimmed.is_empty() || trimmed.starts_with("...") {
            continue;
        }
        let Some(&colon) = top_level_positions(trimmed, b':').first() else {
            continue;
        };
        let raw_key = trimmed[..colon].trim();
        let key = raw_key
            .trim_matches(|c| c == '"' || c == '\'' || c == '`')
            .to_string();
        if key.is_empty() || key.contains('(') {
            continue;
        }

        let after_colon = &trimmed[colon + 1..];
        let value_lead = after_colon.len() - after_colon.trim_start().len();
        let value_text = after_colon.trim();
        let value_offset = seg_offset + leading + colon + 1 + value_lead;

        let value = if value_text.starts_with('{') && value_text.ends_with('}') {
            ObjectValue::Object {
                body: &value_text[1..value_text.len() - 1],
                offset: value_offset + 1,
            }
        } else if value_text.starts_with('[') && value_text.ends_with(']') {
            ObjectValue::Array(&value_text[1..value_text.len() - 1])
        } else if let Some(s) = single_literal(value_text) {
            ObjectValue::Str(s)
        } else {
            ObjectValue::Expr(value_text)
        };

        entries.push(ObjectEntry {
            key,
            value,
            offset: seg_offset + leading,
        });
    }
    entries
}

/// Content of `text` if it is exactly one string literal.
pub fn single_literal(text: &str) -> Option<&str> {
    let first = text.chars().next()?;
    if !matches!(first, '"' | '\'' | '`') {
        return None;
    }
    let lits = string_literals(text);
    let lit = lits.first()?;
    (lit.offset == 1 && lit.offset + lit.content.len() + 1 == text.len()).then_some(lit.content)
}
