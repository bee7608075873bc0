//! Response body decoding
//!
//! The API answers with standard JSON for most endpoints and with
//! newline-delimited JSON for the report endpoints. [`decode_body`] turns both
//! into a single [`Value`]: NDJSON bodies become an array of their records.

use crate::constants::{CHUNK_TERMINATOR_LINE, NDJSON_MARKER};
use crate::error::AppError;
use serde_json::Value;
use tracing::trace;

/// Checks whether a `Content-Type` header value announces NDJSON
///
/// Matches `application/x-ndjson`, `application/ndjson` and any other value
/// containing `ndjson`. The comparison is case-sensitive.
#[must_use]
pub fn is_ndjson(content_type: &str) -> bool {
    content_type.contains(NDJSON_MARKER)
}

/// Decodes a raw response body according to its declared content type
///
/// # Arguments
/// * `raw` - Response body bytes
/// * `content_type` - Value of the `Content-Type` header, empty when absent
///
/// # Returns
/// * `Ok(Value::Array)` - NDJSON records in input order, possibly empty
/// * `Ok(Value)` - The parsed object or array of a standard JSON body
/// * `Err(AppError::ResponseFormat)` - A standard JSON body that does not parse to an object or array
pub fn decode_body(raw: &[u8], content_type: &str) -> Result<Value, AppError> {
    if is_ndjson(content_type) {
        return Ok(Value::Array(decode_ndjson(raw)));
    }
    decode_json(raw)
}

/// Parses NDJSON lines, keeping objects and arrays and dropping everything else
///
/// Lines are trimmed of whitespace, NUL and vertical tab. Blank lines and
/// lone `0` lines (a chunked-transfer leftover) are skipped.
/// Lines that fail to parse or hold a scalar are dropped without error.
#[must_use]
pub fn decode_ndjson(raw: &[u8]) -> Vec<Value> {
    raw.split(|b| *b == b'\n')
        .map(trim_line)
        .filter(|line| !line.is_empty() && *line != CHUNK_TERMINATOR_LINE)
        .filter_map(|line| match serde_json::from_slice::<Value>(line) {
            Ok(value) if is_container(&value) => Some(value),
            Ok(value) => {
                trace!("Dropping scalar NDJSON line: {}", value);
                None
            }
            Err(e) => {
                trace!("Dropping unparsable NDJSON line: {}", e);
                None
            }
        })
        .collect()
}

/// Parses a single JSON document that must be an object or array
pub fn decode_json(raw: &[u8]) -> Result<Value, AppError> {
    let value = serde_json::from_slice::<Value>(raw).map_err(|e| AppError::ResponseFormat {
        message: "response body is not valid JSON".to_string(),
        source: Some(e),
    })?;

    if !is_container(&value) {
        return Err(AppError::response_format(format!(
            "expected a JSON object or array, got {}",
            kind(&value)
        )));
    }
    Ok(value)
}

/// Strips ASCII whitespace, NUL and vertical tab from both ends of a line
fn trim_line(line: &[u8]) -> &[u8] {
    let is_padding = |b: &u8| b.is_ascii_whitespace() || *b == 0 || *b == 0x0b;
    let start = line.iter().position(|b| !is_padding(b)).unwrap_or(line.len());
    let end = line.iter().rposition(|b| !is_padding(b)).map_or(start, |i| i + 1);
    &line[start..end]
}

fn is_container(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
