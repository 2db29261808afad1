//! Wire serialization for DTO graphs.
//!
//! API responses must render with a stable key order (the DTO's field
//! declaration order), explicit `null` for absent values, human-readable
//! indentation, and literal UTF-8 (no `\u` escaping of non-ASCII, no
//! escaped forward slashes). Consumers treat responses positionally, so
//! key order is part of the contract.
//!
//! [`WireValue::Object`] keeps fields in insertion order and serializes
//! them through `serialize_map`, which emits entries in iteration order;
//! the character-level guarantees come from `serde_json` itself.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors produced while rendering a wire value to JSON.
///
/// The value tree is built by mappers, never directly from client input,
/// so any failure here is a programming defect and surfaces as a
/// 500-class response.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// A float JSON cannot represent (NaN or infinity) reached the
    /// serializer.
    #[error("Non-finite number at {path}")]
    NonFiniteNumber { path: String },

    /// The underlying JSON encoder failed.
    #[error("JSON encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Wire values
// ---------------------------------------------------------------------------

/// A JSON-shaped value whose object keys keep their insertion order.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// A sequence, rendered in source order.
    List(Vec<WireValue>),
    /// Ordered field-name -> value pairs, rendered verbatim.
    Object(Vec<(&'static str, WireValue)>),
}

impl WireValue {
    /// Wrap an optional scalar, mapping `None` to `Null`.
    pub fn opt<T: Into<WireValue>>(value: Option<T>) -> WireValue {
        value.map(Into::into).unwrap_or(WireValue::Null)
    }

    /// Serialize a sequence of DTOs, preserving order.
    pub fn list<'a, D, I>(items: I) -> WireValue
    where
        D: Dto + 'a,
        I: IntoIterator<Item = &'a D>,
    {
        WireValue::List(items.into_iter().map(DtoSerializer::serialize).collect())
    }

    /// Serialize an optional nested DTO, mapping `None` to `Null`.
    pub fn nested<D: Dto>(dto: Option<&D>) -> WireValue {
        dto.map(DtoSerializer::serialize).unwrap_or(WireValue::Null)
    }
}

impl From<bool> for WireValue {
    fn from(value: bool) -> Self {
        WireValue::Bool(value)
    }
}

impl From<i32> for WireValue {
    fn from(value: i32) -> Self {
        WireValue::Int(i64::from(value))
    }
}

impl From<i64> for WireValue {
    fn from(value: i64) -> Self {
        WireValue::Int(value)
    }
}

impl From<f64> for WireValue {
    fn from(value: f64) -> Self {
        WireValue::Float(value)
    }
}

impl From<&str> for WireValue {
    fn from(value: &str) -> Self {
        WireValue::Text(value.to_string())
    }
}

impl From<String> for WireValue {
    fn from(value: String) -> Self {
        WireValue::Text(value)
    }
}

impl Serialize for WireValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            WireValue::Null => serializer.serialize_unit(),
            WireValue::Bool(value) => serializer.serialize_bool(*value),
            WireValue::Int(value) => serializer.serialize_i64(*value),
            WireValue::Float(value) => serializer.serialize_f64(*value),
            WireValue::Text(value) => serializer.serialize_str(value),
            WireValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            WireValue::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Dto trait & serializer
// ---------------------------------------------------------------------------

/// A transfer object that can be reduced to an ordered wire mapping.
///
/// Implementations must list fields in declaration order and include
/// computed fields (such as a recipe's `option` summary) verbatim, never
/// re-deriving them at serialization time.
pub trait Dto {
    fn wire_fields(&self) -> Vec<(&'static str, WireValue)>;
}

/// Reduces DTO graphs to wire values and renders them as JSON.
///
/// Pure and deterministic: identical input yields identical output, and
/// serializing never mutates its input. Nesting is handled by natural
/// recursion with no depth bookkeeping.
pub struct DtoSerializer;

impl DtoSerializer {
    /// Reduce a DTO to its ordered wire mapping.
    pub fn serialize<D: Dto + ?Sized>(dto: &D) -> WireValue {
        WireValue::Object(dto.wire_fields())
    }

    /// Render a wire value as pretty-printed JSON.
    ///
    /// Rejects non-finite floats anywhere in the tree instead of letting
    /// the encoder silently degrade them to `null`.
    pub fn to_json(value: &WireValue) -> Result<String, SerializationError> {
        check_finite(value, "$")?;
        Ok(serde_json::to_string_pretty(value)?)
    }
}

fn check_finite(value: &WireValue, path: &str) -> Result<(), SerializationError> {
    match value {
        WireValue::Float(f) if !f.is_finite() => Err(SerializationError::NonFiniteNumber {
            path: path.to_string(),
        }),
        WireValue::List(items) => {
            for (i, item) in items.iter().enumerate() {
                check_finite(item, &format!("{path}[{i}]"))?;
            }
            Ok(())
        }
        WireValue::Object(fields) => {
            for (name, field) in fields {
                check_finite(field, &format!("{path}.{name}"))?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
