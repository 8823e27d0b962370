//! Option-based construction with eager name validation.
//!
//! [`Query::new`] and [`Field::new`] take a list of options and check every
//! name they are given straight away, failing with
//! [`BuildError::InvalidName`] (`'<name>' is not a valid name.`). This is
//! unlike literal and chained construction, where names are only checked at
//! render time.
//!
//! [`of_field`] and [`of_fields`] work at both levels: their return type is
//! inferred from the list they are placed in.
//!
//! # Example
//!
//! ```rust
//! use graphql_builder::options::{of_arguments, of_field, of_fields, of_name};
//! use graphql_builder::{Argument, OperationType, Query};
//!
//! let query = Query::new(
//!     OperationType::Query,
//!     vec![
//!         of_name("another_test"),
//!         of_field(
//!             "users",
//!             vec![
//!                 of_fields(["id", "username"]),
//!                 of_field(
//!                     "threads",
//!                     vec![
//!                         of_arguments([Argument::string("title", "A Good Title")]),
//!                         of_fields(["title", "created_at"]),
//!                     ],
//!                 ),
//!             ],
//!         ),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     query.render_to_string().unwrap(),
//!     r#"query another_test{users{id,username,threads(title:"A Good Title"){title,created_at,},},}"#
//! );
//! ```

use crate::document::{make_field, make_query, Argument, Field, OperationType, Query};
use crate::error::BuildError;
use crate::names::Name;

/// A field described by name and options, built when the enclosing
/// constructor runs.
#[derive(Clone, Debug)]
pub struct FieldTemplate {
    name: String,
    options: Vec<FieldOption>,
}

impl FieldTemplate {
    fn build(self) -> Result<Field, BuildError> {
        Field::new(self.name, self.options)
    }
}

/// An option accepted by [`Query::new`].
#[derive(Clone, Debug)]
pub enum QueryOption {
    /// Sets the operation name.
    Name(String),
    /// Appends top-level fields.
    Fields(Vec<FieldTemplate>),
}

/// An option accepted by [`Field::new`] and [`of_field`].
#[derive(Clone, Debug)]
pub enum FieldOption {
    /// Sets the alias.
    Alias(String),
    /// Appends arguments.
    Arguments(Vec<Argument>),
    /// Appends child fields.
    Fields(Vec<FieldTemplate>),
}

impl From<Vec<FieldTemplate>> for QueryOption {
    fn from(templates: Vec<FieldTemplate>) -> Self {
        Self::Fields(templates)
    }
}

impl From<Vec<FieldTemplate>> for FieldOption {
    fn from(templates: Vec<FieldTemplate>) -> Self {
        Self::Fields(templates)
    }
}

/// Sets the operation name of a query.
#[must_use]
pub fn of_name(name: impl Into<String>) -> QueryOption {
    QueryOption::Name(name.into())
}

/// Sets the alias of a field.
#[must_use]
pub fn of_alias(alias: impl Into<String>) -> FieldOption {
    FieldOption::Alias(alias.into())
}

/// Appends arguments to a field.
#[must_use]
pub fn of_arguments(arguments: impl IntoIterator<Item = Argument>) -> FieldOption {
    FieldOption::Arguments(arguments.into_iter().collect())
}

/// Adds one field, configured by its own options.
#[must_use]
pub fn of_field<O>(name: impl Into<String>, options: Vec<FieldOption>) -> O
where
    O: From<Vec<FieldTemplate>>,
{
    O::from(vec![FieldTemplate {
        name: name.into(),
        options,
    }])
}

/// Adds one leaf field per name.
#[must_use]
pub fn of_fields<O, I, S>(names: I) -> O
where
    O: From<Vec<FieldTemplate>>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    O::from(
        names
            .into_iter()
            .map(|name| FieldTemplate {
                name: name.into(),
                options: Vec::new(),
            })
            .collect::<Vec<_>>(),
    )
}

fn ensure_name(name: String) -> Result<Name, BuildError> {
    Name::new(name).map_err(|err| BuildError::InvalidName { name: err.name })
}

impl Query {
    /// Builds a query from options, validating every name as it goes.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidName`] for the first operation name,
    /// field name, alias or argument key that is not a valid GraphQL name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphql_builder::options::of_name;
    /// use graphql_builder::{OperationType, Query};
    ///
    /// let err = Query::new(OperationType::Query, vec![of_name("我")]).unwrap_err();
    /// assert_eq!(err.to_string(), "'我' is not a valid name.");
    ///
    /// assert!(Query::new(OperationType::Subscription, vec![of_name("_1x1_1x1_")]).is_ok());
    /// ```
    pub fn new(operation_type: OperationType, options: Vec<QueryOption>) -> Result<Self, BuildError> {
        let mut query = make_query(operation_type);
        for option in options {
            match option {
                QueryOption::Name(name) => {
                    query.operation_name = ensure_name(name)?.into_inner();
                }
                QueryOption::Fields(templates) => {
                    for template in templates {
                        query.fields.push(Some(template.build()?.into_ref()));
                    }
                }
            }
        }
        Ok(query)
    }
}

impl Field {
    /// Builds a field from a name and options, validating every name as it
    /// goes.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidName`] for the first name, alias or
    /// argument key that is not a valid GraphQL name, including those of
    /// nested fields.
    pub fn new(name: impl Into<String>, options: Vec<FieldOption>) -> Result<Self, BuildError> {
        let mut field = make_field(ensure_name(name.into())?);
        for option in options {
            match option {
                FieldOption::Alias(alias) => {
                    field.alias = ensure_name(alias)?.into_inner();
                }
                FieldOption::Arguments(arguments) => {
                    for argument in arguments {
                        argument
                            .check_keys()
                            .map_err(|err| BuildError::InvalidName { name: err.name })?;
                        field.arguments.push(argument);
                    }
                }
                FieldOption::Fields(templates) => {
                    for template in templates {
                        field.fields.push(Some(template.build()?.into_ref()));
                    }
                }
            }
        }
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid(err: BuildError) -> String {
        let BuildError::InvalidName { name } = err;
        name
    }

    #[test]
    fn test_invalid_operation_names() {
        for name in ["我", "_我", "x-x", "x x", ""] {
            let err = Query::new(OperationType::Query, vec![of_name(name)]).unwrap_err();
            assert_eq!(err.to_string(), format!("'{name}' is not a valid name."));
        }
    }

    #[test]
    fn test_valid_operation_name() {
        let query = Query::new(OperationType::Subscription, vec![of_name("_1x1_1x1_")]).unwrap();
        assert_eq!(query.operation_type, "subscription");
        assert_eq!(query.operation_name, "_1x1_1x1_");
    }

    #[test]
    fn test_field_name_is_checked_eagerly() {
        let err = Query::new(OperationType::Query, vec![of_fields(["ok", "not ok"])]).unwrap_err();
        assert_eq!(invalid(err), "not ok");
    }

    #[test]
    fn test_nested_alias_is_checked_eagerly() {
        let err = Query::new(
            OperationType::Query,
            vec![of_field(
                "users",
                vec![of_field("threads", vec![of_alias("t-1")])],
            )],
        )
        .unwrap_err();
        assert_eq!(invalid(err), "t-1");
    }

    #[test]
    fn test_argument_keys_are_checked_eagerly() {
        let err = Field::new(
            "users",
            vec![of_arguments([Argument::object(
                "where",
                [Argument::int("bad-key", 1)],
            )])],
        )
        .unwrap_err();
        assert_eq!(invalid(err), "bad-key");
    }

    #[test]
    fn test_field_new_applies_options_in_order() {
        let field = Field::new(
            "threads",
            vec![
                of_alias("recent"),
                of_arguments([Argument::int("first", 5)]),
                of_fields(["title"]),
                of_arguments([Argument::bool("pinned", true)]),
            ],
        )
        .unwrap();

        assert_eq!(
            field.render_to_string().unwrap(),
            "recent:threads(first:5,pinned:true){title,}"
        );
    }

    #[test]
    fn test_options_accept_checked_names() {
        let name = Name::new("viewer").unwrap();
        let field = Name::new("me").unwrap();
        let query = Query::new(
            OperationType::Query,
            vec![of_name(name), of_field(field, vec![of_alias(Name::new("self_").unwrap())])],
        )
        .unwrap();
        assert_eq!(query.render_to_string().unwrap(), "query viewer{self_:me,}");
    }

    #[test]
    fn test_options_can_be_repeated() {
        let query = Query::new(
            OperationType::Query,
            vec![of_name("first"), of_fields(["a"]), of_name("second"), of_fields(["b"])],
        )
        .unwrap();
        assert_eq!(query.render_to_string().unwrap(), "query second{a,b,}");
    }
}
