//! Untyped input values as returned by the catalog service.
//!
//! A [`RawValue`] is the loosely-typed JSON-like value every normalization
//! entry point consumes: a scalar, a sequence, or a key/value mapping of
//! unknown shape. Mappings preserve insertion order, which both diff output
//! and mapping-shaped parameter extraction depend on. Numbers are `f64` so
//! the non-finite values the diff equality rule handles are representable;
//! they serialize as JSON `null`, like the upstream serializer.

use indexmap::IndexMap;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// Largest f64 magnitude whose integral values are all exactly representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A raw JSON-like value of unvalidated shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RawValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Sequence(Vec<RawValue>),
    Mapping(IndexMap<String, RawValue>),
}

impl RawValue {
    /// Look up a field by exact key. Returns `None` for non-mapping values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        match self {
            Self::Mapping(entries) => entries.get(key),
            _ => None,
        }
    }

    /// Borrow the string content, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow the elements, if this is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[RawValue]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the entries, if this is a mapping.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&IndexMap<String, RawValue>> {
        match self {
            Self::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this value is a sequence or a mapping.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Mapping(_))
    }

    /// Short shape name for log and error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }

    /// Render this value as display text.
    ///
    /// Strings are rendered bare (no quotes), scalars in their conventional
    /// text form (`null`, `true`, `NaN`, integral numbers without a decimal
    /// point), composites as their serialized JSON.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(flag) => flag.to_string(),
            Self::Number(number) => number_text(*number),
            Self::String(text) => text.clone(),
            Self::Sequence(_) | Self::Mapping(_) => serde_json::to_string(self)
                .unwrap_or_else(|_| "<unserializable>".to_string()),
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

fn number_text(number: f64) -> String {
    if number.is_nan() {
        "NaN".to_string()
    } else if number.is_infinite() {
        if number.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if number == 0.0 {
        // Folds -0.0 into "0"
        "0".to_string()
    } else if number.fract() == 0.0 && number.abs() < MAX_SAFE_INTEGER {
        format!("{}", number as i64)
    } else {
        format!("{number}")
    }
}

// ============================================================================
// Serde and conversions
// ============================================================================

impl Serialize for RawValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => {
                if number.fract() == 0.0 && number.abs() < MAX_SAFE_INTEGER {
                    serializer.serialize_i64(*number as i64)
                } else {
                    // serde_json writes non-finite values as null
                    serializer.serialize_f64(*number)
                }
            }
            Self::String(text) => serializer.serialize_str(text),
            Self::Sequence(items) => items.serialize(serializer),
            Self::Mapping(entries) => entries.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawValueVisitor;

        impl<'de> Visitor<'de> for RawValueVisitor {
            type Value = RawValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any JSON-like value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(RawValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(RawValue::Number(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(RawValue::Number(value as f64))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(RawValue::Number(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(RawValue::String(value.to_owned()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(RawValue::String(value))
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(RawValue::Null)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(RawValue::Null)
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(RawValue::Sequence(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry()? {
                    entries.insert(key, value);
                }
                Ok(RawValue::Mapping(entries))
            }
        }

        deserializer.deserialize_any(RawValueVisitor)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => {
                Self::Number(number.as_f64().unwrap_or(f64::NAN))
            }
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(entries) => Self::Mapping(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<f64> for RawValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<bool> for RawValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}
