use memchr::memchr2_iter;
use serde_json::Value;
use smol_str::SmolStr;

use crate::constants::{is_name_byte, ATTRIBUTE_MARKER, INDENT_UNIT};
use crate::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    pub indent: usize,
    pub is_attribute: bool,
    pub name: SmolStr,
    pub value: Option<Value>,
    pub line: usize,
}

pub fn scan_lines(input: &str) -> Result<Vec<LineRecord>> {
    let bytes = input.as_bytes();
    let mut records = Vec::new();
    let mut start = 0;
    let mut line_no = 1;
    for idx in memchr2_iter(b'\n', b'\r', bytes) {
        if idx < start {
            // second byte of a \r\n pair, already consumed
            continue;
        }
        if let Some(record) = scan_line(&input[start..idx], line_no)? {
            records.push(record);
        }
        start = idx + 1;
        if bytes[idx] == b'\r' && bytes.get(start) == Some(&b'\n') {
            start += 1;
        }
        line_no += 1;
    }
    if let Some(record) = scan_line(&input[start..], line_no)? {
        records.push(record);
    }
    Ok(records)
}

fn scan_line(raw: &str, line: usize) -> Result<Option<LineRecord>> {
    let indent = raw
        .as_bytes()
        .iter()
        .take_while(|&&byte| byte == INDENT_UNIT)
        .count();
    let rest = &raw[indent..];
    if rest.trim().is_empty() {
        return Ok(None);
    }
    let (is_attribute, name, candidate) = split_declaration(rest);
    Ok(Some(LineRecord {
        indent,
        is_attribute,
        name,
        value: parse_literal(candidate),
        line,
    }))
}

// Field declaration: an optional `+` marker (optionally followed by one
// space) directly before a word-character name, a colon, and an optional
// single space. Anything else falls through to the bare-value arm.
fn split_declaration(rest: &str) -> (bool, SmolStr, &str) {
    let bytes = rest.as_bytes();
    let mut pos = 0;
    let mut is_attribute = false;
    if bytes.first() == Some(&ATTRIBUTE_MARKER) {
        is_attribute = true;
        pos = 1;
        if bytes.get(pos) == Some(&b' ') {
            pos += 1;
        }
    }
    let name_start = pos;
    while pos < bytes.len() && is_name_byte(bytes[pos]) {
        pos += 1;
    }
    if pos > name_start && bytes.get(pos) == Some(&b':') {
        let name = SmolStr::new(&rest[name_start..pos]);
        let mut value_start = pos + 1;
        if bytes.get(value_start) == Some(&b' ') {
            value_start += 1;
        }
        return (is_attribute, name, &rest[value_start..]);
    }
    (false, SmolStr::default(), rest)
}

// A candidate that scans as a JSON literal keeps its parsed form; anything
// else stays as the trimmed text. Empty text means "no value", which is not
// the same as an explicit null.
fn parse_literal(candidate: &str) -> Option<Value> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str(trimmed) {
        Ok(value) => Some(value),
        Err(_) => Some(Value::String(trimmed.to_string())),
    }
}
