//! Field coercion helpers shared by the resource normalizers.
//!
//! Upstream payloads drift: fields go missing, arrive as `null`, or change
//! type. Each helper maps any JSON value to a fixed Rust type with a safe
//! default so views never see a surprise.

use serde_json::Value;

use crate::types::ResourceId;

/// Falsy values and containers become `""`; strings pass through; other
/// scalars are stringified. Whole floats print without a fraction.
pub(crate) fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

/// Like [`text`], but a blank result falls back to `default`.
pub(crate) fn text_or(value: Option<&Value>, default: &str) -> String {
    let s = text(value);
    if s.is_empty() {
        default.to_string()
    } else {
        s
    }
}

/// Dates and timestamps are kept verbatim when present.
pub(crate) fn optional_text(value: Option<&Value>) -> Option<String> {
    Some(text(value)).filter(|s| !s.is_empty())
}

pub(crate) fn id(value: Option<&Value>) -> Option<ResourceId> {
    match value? {
        Value::Number(n) => Some(ResourceId::Number(n.clone())),
        Value::String(s) => Some(ResourceId::Text(s.clone())),
        _ => None,
    }
}

/// Numbers pass through, numeric strings are parsed, anything else is `0`.
pub(crate) fn number(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Non-empty paragraphs only, each coerced with [`text`].
pub(crate) fn paragraphs(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| text(Some(item)))
            .filter(|p| !p.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Unwrap a list response: a bare array or a `{"results": [...]}` envelope.
///
/// Returns `None` for any other shape; callers turn that into an empty list.
pub(crate) fn list_items(payload: &Value) -> Option<&[Value]> {
    match payload {
        Value::Array(items) => Some(items),
        Value::Object(map) => match map.get("results") {
            Some(Value::Array(items)) => Some(items),
            _ => None,
        },
        _ => None,
    }
}
