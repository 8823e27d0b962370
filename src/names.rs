//! GraphQL name validation.
//!
//! Names in GraphQL (operation names, field names, aliases and argument keys)
//! must match `/[_A-Za-z][_0-9A-Za-z]*/` over the whole string. See
//! <http://facebook.github.io/graphql/October2016/#sec-Names>.

use crate::error::InvalidNameError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Returns `true` if `name` matches the GraphQL name grammar.
///
/// # Example
///
/// ```rust
/// use graphql_builder::names::is_valid_name;
///
/// assert!(is_valid_name("_1x1_1x1_"));
/// assert!(!is_valid_name("x-x"));
/// assert!(!is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    match bytes.next() {
        Some(first) if first == b'_' || first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    bytes.all(|b| b == b'_' || b.is_ascii_alphanumeric())
}

/// Validates `name` against the GraphQL name grammar.
///
/// # Errors
///
/// Returns [`InvalidNameError`] carrying the offending string if it is empty,
/// starts with a digit, or contains anything besides ASCII letters, digits
/// and underscores.
pub fn validate_name(name: &str) -> Result<(), InvalidNameError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(InvalidNameError {
            name: name.to_string(),
        })
    }
}

/// A name already checked against the GraphQL name grammar.
///
/// Option-based constructors check every name through this type. A `Name`
/// converts into `String`, so it can be passed anywhere a builder takes a
/// name, including [`of_name`](crate::options::of_name) and
/// [`make_field`](crate::make_field).
///
/// # Example
///
/// ```rust
/// use graphql_builder::names::Name;
/// use graphql_builder::make_field;
///
/// let name = Name::new("created_at").unwrap();
/// assert_eq!(name.as_ref(), "created_at");
/// assert_eq!(make_field(name).name, "created_at");
///
/// assert!(Name::new("created-at").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Creates a new validated name.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidNameError`] if the name does not match the grammar.
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidNameError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self(name))
    }

    /// Consumes the name, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}
