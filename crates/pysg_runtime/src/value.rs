use std::fmt;

/// Opaque reference to a live object inside the foreign toolkit.
///
/// A handle carries no state of its own. Attribute reads and writes on the
/// object it names always go through a [`crate::Backend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(pub u64);

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<object #{}>", self.0)
    }
}

/// The universal foreign value.
#[derive(Debug, Clone, PartialEq)]
pub enum Dynamic {
    /// The toolkit's "no value" marker.
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<Dynamic>),
    List(Vec<Dynamic>),
    /// Insertion-ordered mapping. Keys are arbitrary foreign values.
    Dict(Vec<(Dynamic, Dynamic)>),
    Object(Handle),
}

impl Dynamic {
    pub fn is_none(&self) -> bool {
        matches!(self, Dynamic::None)
    }

    pub fn pair(first: Dynamic, second: Dynamic) -> Self {
        Dynamic::Tuple(vec![first, second])
    }

    /// Splits a two-element tuple or list. Any other shape yields `None`.
    pub fn as_pair(&self) -> Option<(&Dynamic, &Dynamic)> {
        match self {
            Dynamic::Tuple(items) | Dynamic::List(items) if items.len() == 2 => {
                Some((&items[0], &items[1]))
            }
            _ => None,
        }
    }

    pub fn as_handle(&self) -> Option<Handle> {
        match self {
            Dynamic::Object(handle) => Some(*handle),
            _ => None,
        }
    }

    /// Looks up `key` in a dict by string key.
    pub fn get_item(&self, key: &str) -> Option<&Dynamic> {
        match self {
            Dynamic::Dict(entries) => entries.iter().find_map(|(k, v)| match k {
                Dynamic::Str(s) if s == key => Some(v),
                _ => None,
            }),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Dynamic::None => "NoneType",
            Dynamic::Bool(_) => "bool",
            Dynamic::Int(_) => "int",
            Dynamic::Float(_) => "float",
            Dynamic::Str(_) => "str",
            Dynamic::Tuple(_) => "tuple",
            Dynamic::List(_) => "list",
            Dynamic::Dict(_) => "dict",
            Dynamic::Object(_) => "object",
        }
    }
}

impl fmt::Display for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Dynamic::None => write!(f, "None"),
            Dynamic::Bool(b) => write!(f, "{}", if *b { "True" } else { "False" }),
            Dynamic::Int(i) => write!(f, "{}", i),
            Dynamic::Float(d) => write!(f, "{:?}", d),
            Dynamic::Str(s) => write!(f, "{:?}", s),
            Dynamic::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                // A one-element tuple keeps its trailing comma
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Dynamic::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Dynamic::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Dynamic::Object(handle) => write!(f, "{}", handle),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BridgeError {
    #[error("Type error: expected {expected}, got {got}")]
    TypeError { expected: String, got: String },

    #[error("Attribute '{attribute}' is absent but must always be present")]
    ContractViolation { attribute: String },

    #[error("Object {0} has no attribute '{1}'")]
    NoSuchAttribute(Handle, String),

    #[error("Object {0} does not exist or was released")]
    NoSuchObject(Handle),

    #[error("Unknown toolkit class: {0}")]
    UnknownClass(String),

    #[error("Object {0} has no method '{1}'")]
    NoSuchMethod(Handle, String),

    #[error("Toolkit module has not been imported")]
    NotImported,

    #[error("Toolkit module '{0}' is not available")]
    ModuleNotFound(String),

    #[error("{0}")]
    Custom(String),
}

impl BridgeError {
    pub fn type_error(expected: impl Into<String>, got: &Dynamic) -> Self {
        BridgeError::TypeError {
            expected: expected.into(),
            got: got.type_name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_foreign_repr() {
        let padding = Dynamic::pair(
            Dynamic::pair(Dynamic::Int(1), Dynamic::None),
            Dynamic::pair(Dynamic::Int(3), Dynamic::Int(4)),
        );
        assert_eq!(padding.to_string(), "((1, None), (3, 4))");
        assert_eq!(Dynamic::Tuple(vec![Dynamic::Bool(true)]).to_string(), "(True,)");
    }

    #[test]
    fn as_pair_rejects_other_arity() {
        assert!(Dynamic::Tuple(vec![Dynamic::Int(1)]).as_pair().is_none());
        assert!(Dynamic::Int(1).as_pair().is_none());
        let list = Dynamic::List(vec![Dynamic::Int(1), Dynamic::Int(2)]);
        assert_eq!(list.as_pair(), Some((&Dynamic::Int(1), &Dynamic::Int(2))));
    }

    #[test]
    fn get_item_only_matches_string_keys() {
        let dict = Dynamic::Dict(vec![
            (Dynamic::Int(0), Dynamic::Str("zero".into())),
            (Dynamic::Str("name".into()), Dynamic::Str("Alice".into())),
        ]);
        assert_eq!(dict.get_item("name"), Some(&Dynamic::Str("Alice".into())));
        assert_eq!(dict.get_item("0"), None);
    }
}
