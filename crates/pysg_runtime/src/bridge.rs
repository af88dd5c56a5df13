//! Conversions between host values and [`Dynamic`].
//!
//! Encoding is total. Decoding is lenient: a foreign value that is the
//! absent marker, or that does not already have the requested type, decodes
//! to `None` instead of failing. Numbers and booleans convert exactly and
//! nothing is stringified implicitly.

use std::collections::HashMap;

use crate::value::{BridgeError, Dynamic, Handle};

pub trait IntoDynamic {
    fn into_dynamic(self) -> Dynamic;
}

pub trait FromDynamic: Sized {
    fn from_dynamic(value: &Dynamic) -> Option<Self>;
}

pub fn to_foreign<T: IntoDynamic>(value: T) -> Dynamic {
    value.into_dynamic()
}

pub fn from_foreign<T: FromDynamic>(value: &Dynamic) -> Option<T> {
    T::from_dynamic(value)
}

/// Decodes an attribute that exists for the whole lifetime of its object.
///
/// An absent or mistyped value means the foreign object is broken, so it is
/// reported as [`BridgeError::ContractViolation`] rather than defaulted.
pub fn decode_required<T: FromDynamic>(value: &Dynamic, attribute: &str) -> Result<T, BridgeError> {
    T::from_dynamic(value).ok_or_else(|| {
        tracing::debug!(attribute, got = value.type_name(), "required attribute failed to decode");
        BridgeError::ContractViolation {
            attribute: attribute.to_string(),
        }
    })
}

impl IntoDynamic for Dynamic {
    fn into_dynamic(self) -> Dynamic {
        self
    }
}

impl IntoDynamic for Handle {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Object(self)
    }
}

impl IntoDynamic for bool {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Bool(self)
    }
}

impl IntoDynamic for i64 {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Int(self)
    }
}

impl IntoDynamic for i32 {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Int(self as i64)
    }
}

impl IntoDynamic for String {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Str(self)
    }
}

impl IntoDynamic for &str {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Str(self.to_string())
    }
}

impl IntoDynamic for &String {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::Str(self.clone())
    }
}

impl<T: IntoDynamic> IntoDynamic for Option<T> {
    fn into_dynamic(self) -> Dynamic {
        match self {
            Some(value) => value.into_dynamic(),
            None => Dynamic::None,
        }
    }
}

impl<A: IntoDynamic, B: IntoDynamic> IntoDynamic for (A, B) {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::pair(self.0.into_dynamic(), self.1.into_dynamic())
    }
}

impl<T: IntoDynamic> IntoDynamic for Vec<T> {
    fn into_dynamic(self) -> Dynamic {
        Dynamic::List(self.into_iter().map(IntoDynamic::into_dynamic).collect())
    }
}

impl FromDynamic for Dynamic {
    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromDynamic for Handle {
    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        value.as_handle()
    }
}

impl FromDynamic for bool {
    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        match value {
            Dynamic::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromDynamic for i64 {
    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        match value {
            Dynamic::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromDynamic for i32 {
    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        match value {
            Dynamic::Int(i) => i32::try_from(*i).ok(),
            _ => None,
        }
    }
}

impl FromDynamic for String {
    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        match value {
            Dynamic::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl<A: FromDynamic, B: FromDynamic> FromDynamic for (A, B) {
    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        let (first, second) = value.as_pair()?;
        Some((A::from_dynamic(first)?, B::from_dynamic(second)?))
    }
}

/// All-or-nothing: one non-string key or value rejects the whole mapping.
impl FromDynamic for HashMap<String, String> {
    fn from_dynamic(value: &Dynamic) -> Option<Self> {
        match value {
            Dynamic::Dict(entries) => entries
                .iter()
                .map(|(k, v)| Some((String::from_dynamic(k)?, String::from_dynamic(v)?)))
                .collect(),
            _ => None,
        }
    }
}
