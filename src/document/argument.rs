//! Field arguments.
//!
//! An [`Argument`] is a key and a typed value rendered inside a field's
//! parentheses, e.g. `uid:123` or `blocked_nds:["nd013","nd014"]`.
//!
//! Constructors never fail. Keys are checked against the name grammar when
//! the owning field is rendered, or straight away when the argument is passed
//! through [`of_arguments`](crate::options::of_arguments).

use std::fmt::{self, Write as _};

use crate::error::InvalidNameError;
use crate::names::validate_name;

/// The value half of an [`Argument`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentValue {
    /// Rendered as base-10 digits, unquoted.
    Int(i64),
    /// Rendered as `true` or `false`.
    Bool(bool),
    /// Rendered double-quoted with JSON string escaping.
    String(String),
    /// Rendered as `[1,2,3]`.
    IntList(Vec<i64>),
    /// Rendered as `[true,false]`.
    BoolList(Vec<bool>),
    /// Rendered as `["a","b"]`.
    StringList(Vec<String>),
    /// An input object, rendered as `{key:value,key:value}`.
    Object(Vec<Argument>),
    /// A list of input objects, rendered as `[{..},{..}]`.
    ObjectList(Vec<Vec<Argument>>),
}

impl ArgumentValue {
    fn check_keys(&self) -> Result<(), InvalidNameError> {
        match self {
            Self::Object(fields) => fields.iter().try_for_each(Argument::check_keys),
            Self::ObjectList(objects) => objects
                .iter()
                .flatten()
                .try_for_each(Argument::check_keys),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ArgumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::String(value) => write_quoted(f, value),
            Self::IntList(values) => write_list(f, values, |f, v| write!(f, "{v}")),
            Self::BoolList(values) => write_list(f, values, |f, v| write!(f, "{v}")),
            Self::StringList(values) => write_list(f, values, |f, v| write_quoted(f, v)),
            Self::Object(fields) => write_object(f, fields),
            Self::ObjectList(objects) => write_list(f, objects, |f, v| write_object(f, v)),
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    write!(f, "{}", serde_json::Value::from(value))
}

fn write_list<T>(
    f: &mut fmt::Formatter<'_>,
    values: &[T],
    mut write_item: impl FnMut(&mut fmt::Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    f.write_char('[')?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write_item(f, value)?;
    }
    f.write_char(']')
}

fn write_object(f: &mut fmt::Formatter<'_>, fields: &[Argument]) -> fmt::Result {
    f.write_char('{')?;
    write_arguments(f, fields)?;
    f.write_char('}')
}

/// Writes `key:value` pairs separated by commas.
fn write_arguments(f: &mut fmt::Formatter<'_>, arguments: &[Argument]) -> fmt::Result {
    for (i, argument) in arguments.iter().enumerate() {
        if i > 0 {
            f.write_char(',')?;
        }
        write!(f, "{argument}")?;
    }
    Ok(())
}

/// A key/value pair attached to a [`Field`](crate::Field).
///
/// Arguments are immutable once built; use one of the typed constructors.
///
/// # Example
///
/// ```rust
/// use graphql_builder::Argument;
///
/// assert_eq!(Argument::int("uid", 123).to_string(), "uid:123");
/// assert_eq!(
///     Argument::string_list("blocked_nds", ["nd013", "nd014"]).to_string(),
///     r#"blocked_nds:["nd013","nd014"]"#
/// );
/// assert_eq!(
///     Argument::string("title", r#"say "hi""#).to_string(),
///     r#"title:"say \"hi\"""#
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    key: String,
    value: ArgumentValue,
}

impl Argument {
    /// Creates an argument from a key and an already-built value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: ArgumentValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Creates an integer argument.
    #[must_use]
    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, ArgumentValue::Int(value))
    }

    /// Creates a boolean argument.
    #[must_use]
    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, ArgumentValue::Bool(value))
    }

    /// Creates a string argument.
    #[must_use]
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, ArgumentValue::String(value.into()))
    }

    /// Creates an integer list argument.
    #[must_use]
    pub fn int_list(key: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        Self::new(key, ArgumentValue::IntList(values.into_iter().collect()))
    }

    /// Creates a boolean list argument.
    #[must_use]
    pub fn bool_list(key: impl Into<String>, values: impl IntoIterator<Item = bool>) -> Self {
        Self::new(key, ArgumentValue::BoolList(values.into_iter().collect()))
    }

    /// Creates a string list argument. Order is preserved.
    #[must_use]
    pub fn string_list<I, S>(key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            key,
            ArgumentValue::StringList(values.into_iter().map(Into::into).collect()),
        )
    }

    /// Creates an input object argument from nested key/value pairs.
    ///
    /// ```rust
    /// use graphql_builder::Argument;
    ///
    /// let filter = Argument::object(
    ///     "filter",
    ///     [Argument::string("status", "open"), Argument::int("limit", 10)],
    /// );
    /// assert_eq!(filter.to_string(), r#"filter:{status:"open",limit:10}"#);
    /// ```
    #[must_use]
    pub fn object(key: impl Into<String>, fields: impl IntoIterator<Item = Self>) -> Self {
        Self::new(key, ArgumentValue::Object(fields.into_iter().collect()))
    }

    /// Creates a list-of-input-objects argument.
    #[must_use]
    pub fn object_list<I, O>(key: impl Into<String>, objects: I) -> Self
    where
        I: IntoIterator<Item = O>,
        O: IntoIterator<Item = Self>,
    {
        Self::new(
            key,
            ArgumentValue::ObjectList(
                objects
                    .into_iter()
                    .map(|object| object.into_iter().collect())
                    .collect(),
            ),
        )
    }

    /// Returns the argument key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the argument value.
    #[must_use]
    pub const fn value(&self) -> &ArgumentValue {
        &self.value
    }

    /// Checks this key, and every key nested inside object values.
    pub(crate) fn check_keys(&self) -> Result<(), InvalidNameError> {
        validate_name(&self.key)?;
        self.value.check_keys()
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_renders_unquoted() {
        assert_eq!(Argument::int("uid", 123).to_string(), "uid:123");
        assert_eq!(Argument::int("offset", -5).to_string(), "offset:-5");
    }

    #[test]
    fn test_bool_renders_keyword() {
        assert_eq!(Argument::bool("blocked", true).to_string(), "blocked:true");
        assert_eq!(Argument::bool("blocked", false).to_string(), "blocked:false");
    }

    #[test]
    fn test_string_is_json_escaped() {
        let argument = Argument::string("path", "C:\\tmp \"x\"\n");
        assert_eq!(argument.to_string(), r#"path:"C:\\tmp \"x\"\n""#);
    }

    #[test]
    fn test_string_keeps_non_ascii() {
        assert_eq!(Argument::string("q", "看").to_string(), "q:\"看\"");
    }

    #[test]
    fn test_lists_preserve_order() {
        assert_eq!(
            Argument::string_list("blocked_nds", ["nd013", "nd014"]).to_string(),
            r#"blocked_nds:["nd013","nd014"]"#
        );
        assert_eq!(Argument::int_list("ids", [3, 1, 2]).to_string(), "ids:[3,1,2]");
        assert_eq!(
            Argument::bool_list("flags", [true, false]).to_string(),
            "flags:[true,false]"
        );
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(
            Argument::string_list("tags", Vec::<String>::new()).to_string(),
            "tags:[]"
        );
    }

    #[test]
    fn test_object_and_object_list() {
        let object = Argument::object("where", [Argument::int("id", 1)]);
        assert_eq!(object.to_string(), "where:{id:1}");

        let list = Argument::object_list(
            "items",
            [
                vec![Argument::string("sku", "a"), Argument::int("qty", 2)],
                vec![Argument::string("sku", "b")],
            ],
        );
        assert_eq!(list.to_string(), r#"items:[{sku:"a",qty:2},{sku:"b"}]"#);
    }

    #[test]
    fn test_check_keys_reaches_nested_objects() {
        assert!(Argument::int("ok", 1).check_keys().is_ok());
        assert!(Argument::int("not-ok", 1).check_keys().is_err());

        let nested = Argument::object("where", [Argument::int("bad key", 1)]);
        let err = nested.check_keys().unwrap_err();
        assert_eq!(err.name, "bad key");

        let nested_list = Argument::object_list("items", [[Argument::int("9lives", 1)]]);
        assert_eq!(nested_list.check_keys().unwrap_err().name, "9lives");
    }

    #[test]
    fn test_accessors() {
        let argument = Argument::string("title", "A Good Title");
        assert_eq!(argument.key(), "title");
        assert_eq!(
            argument.value(),
            &ArgumentValue::String("A Good Title".to_string())
        );
    }
}
