//! JSON document loading shared by the palette and theme inputs.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Result, TokenError};

/// Path used in error messages for documents parsed from strings.
pub(crate) const INLINE_SOURCE: &str = "<inline>";

/// Reads a file and parses it as a JSON object.
pub(crate) fn read_object(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|source| TokenError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_object(&content, path)
}

/// Parses JSON content whose top level must be an object.
pub(crate) fn parse_object(content: &str, path: &Path) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(content).map_err(|source| TokenError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(TokenError::InvalidDocument {
            path: path.to_path_buf(),
            message: format!(
                "expected a JSON object at the top level, found {}",
                kind_name(&other)
            ),
        }),
    }
}

/// Human-readable name of a JSON value's type.
pub(crate) fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
