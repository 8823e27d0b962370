//! Field nodes.
//!
//! A [`Field`] is the recursive unit of a GraphQL selection: a name, an
//! optional alias, arguments and child fields. Children are held through
//! [`FieldRef`] handles so that a node can be shared between parents and
//! still be modified after it has been attached. Nothing stops such a graph
//! from becoming cyclic; the renderer rejects cycles before it emits anything.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::document::argument::Argument;
use crate::error::{CycleError, RenderError};
use crate::render::{self, Fragments};

/// Shared, mutable handle to a [`Field`].
pub type FieldRef = Rc<RefCell<Field>>;

/// A GraphQL field.
///
/// Fields can be written as struct literals, assembled with the chaining
/// methods below, or built with [`Field::new`] and the functions in
/// [`options`](crate::options). Literal and chained construction never
/// validate anything; names are checked when the field is rendered.
///
/// A `None` entry in [`fields`](Self::fields) is an absent child and fails
/// rendering with [`NilFieldError`](crate::NilFieldError).
///
/// # Example
///
/// ```rust
/// use graphql_builder::{fields, Argument, Field};
///
/// let field = Field {
///     name: "courses".to_string(),
///     alias: "Alias".to_string(),
///     arguments: vec![
///         Argument::int("uid", 123),
///         Argument::string_list("blocked_nds", ["nd013", "nd014"]),
///     ],
///     fields: fields(["key", "id"]),
/// };
///
/// assert_eq!(
///     field.render_to_string().unwrap(),
///     r#"Alias:courses(uid:123,blocked_nds:["nd013","nd014"]){key,id,}"#
/// );
/// ```
#[derive(Clone, Default)]
pub struct Field {
    /// The field name.
    pub name: String,
    /// Alias under which the result is returned; empty for none.
    pub alias: String,
    /// Arguments, in render order.
    pub arguments: Vec<Argument>,
    /// Child fields, in render order.
    pub fields: Vec<Option<FieldRef>>,
}

/// Starts a field for method chaining.
///
/// Nothing is validated until the field is rendered.
///
/// ```rust
/// use graphql_builder::make_field;
///
/// let field = make_field("user")
///     .add_argument_string("uid", "123")
///     .add_fields(["id", "email"]);
/// assert_eq!(field.render_to_string().unwrap(), r#"user(uid:"123"){id,email,}"#);
/// ```
#[must_use]
pub fn make_field(name: impl Into<String>) -> Field {
    Field {
        name: name.into(),
        ..Field::default()
    }
}

/// Builds a list of leaf children, one per name.
#[must_use]
pub fn fields<I, S>(names: I) -> Vec<Option<FieldRef>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(|name| Some(make_field(name).into_ref()))
        .collect()
}

impl Field {
    /// Wraps the field in a shareable handle.
    #[must_use]
    pub fn into_ref(self) -> FieldRef {
        Rc::new(RefCell::new(self))
    }

    /// Sets the alias. An empty string removes it.
    #[must_use]
    pub fn set_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Replaces all arguments.
    #[must_use]
    pub fn set_arguments(mut self, arguments: impl IntoIterator<Item = Argument>) -> Self {
        self.arguments = arguments.into_iter().collect();
        self
    }

    /// Appends one argument.
    #[must_use]
    pub fn add_argument(mut self, argument: Argument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Appends an integer argument.
    #[must_use]
    pub fn add_argument_int(self, key: impl Into<String>, value: i64) -> Self {
        self.add_argument(Argument::int(key, value))
    }

    /// Appends a boolean argument.
    #[must_use]
    pub fn add_argument_bool(self, key: impl Into<String>, value: bool) -> Self {
        self.add_argument(Argument::bool(key, value))
    }

    /// Appends a string argument.
    #[must_use]
    pub fn add_argument_string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_argument(Argument::string(key, value))
    }

    /// Appends an integer list argument.
    #[must_use]
    pub fn add_argument_int_list(
        self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = i64>,
    ) -> Self {
        self.add_argument(Argument::int_list(key, values))
    }

    /// Appends a boolean list argument.
    #[must_use]
    pub fn add_argument_bool_list(
        self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = bool>,
    ) -> Self {
        self.add_argument(Argument::bool_list(key, values))
    }

    /// Appends a string list argument.
    #[must_use]
    pub fn add_argument_string_list<I, S>(self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_argument(Argument::string_list(key, values))
    }

    /// Appends an input object argument.
    #[must_use]
    pub fn add_argument_object(
        self,
        key: impl Into<String>,
        fields: impl IntoIterator<Item = Argument>,
    ) -> Self {
        self.add_argument(Argument::object(key, fields))
    }

    /// Replaces all children.
    #[must_use]
    pub fn set_fields(mut self, fields: impl IntoIterator<Item = Self>) -> Self {
        self.fields = fields.into_iter().map(|f| Some(f.into_ref())).collect();
        self
    }

    /// Appends one child.
    #[must_use]
    pub fn add_field(mut self, field: Self) -> Self {
        self.fields.push(Some(field.into_ref()));
        self
    }

    /// Appends a child that may also be referenced elsewhere.
    #[must_use]
    pub fn add_field_ref(mut self, field: FieldRef) -> Self {
        self.fields.push(Some(field));
        self
    }

    /// Appends one leaf child per name.
    #[must_use]
    pub fn add_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields(names));
        self
    }

    /// Checks that no field is reachable from itself and that no child slot
    /// is empty.
    ///
    /// # Errors
    ///
    /// Returns [`CycleError::Cyclic`] or [`CycleError::Nil`].
    pub fn check_cycle(&self) -> Result<(), CycleError> {
        render::check_cycle(self)
    }

    /// Validates the field and returns a lazy stream of its text fragments.
    ///
    /// The whole subtree is checked before the stream is returned, so an
    /// error means no fragment was produced. The field's own trailing comma
    /// belongs to the enclosing list and is not emitted here.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Cycle`] if the subtree is cyclic or holds an
    /// empty child slot, and [`RenderError::InvalidName`] if an alias, name or
    /// argument key is not a valid GraphQL name.
    pub fn render(&self) -> Result<Fragments, RenderError> {
        render::render_field(self)
    }

    /// Renders the field to a single string.
    ///
    /// # Errors
    ///
    /// See [`Field::render`].
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        Ok(self.render()?.into_string())
    }
}

impl fmt::Debug for Field {
    // Children are listed by name only; a cyclic graph would never finish printing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let children: Vec<String> = self
            .fields
            .iter()
            .map(|slot| {
                slot.as_ref().map_or_else(
                    || "<nil>".to_string(),
                    |child| {
                        child
                            .try_borrow()
                            .map_or_else(|_| "<borrowed>".to_string(), |c| c.name.clone())
                    },
                )
            })
            .collect();

        f.debug_struct("Field")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("arguments", &self.arguments)
            .field("fields", &children)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_field_starts_empty() {
        let field = make_field("users");
        assert_eq!(field.name, "users");
        assert!(field.alias.is_empty());
        assert!(field.arguments.is_empty());
        assert!(field.fields.is_empty());
    }

    #[test]
    fn test_fields_helper_creates_leaves() {
        let children = fields(["key", "id"]);
        assert_eq!(children.len(), 2);
        let names: Vec<String> = children
            .iter()
            .map(|c| c.as_ref().unwrap().borrow().name.clone())
            .collect();
        assert_eq!(names, ["key", "id"]);
    }

    #[test]
    fn test_chaining_accumulates() {
        let field = make_field("threads")
            .set_alias("t")
            .add_argument_int("first", 10)
            .add_argument_bool("archived", false)
            .add_argument_string_list("tags", ["a", "b"])
            .add_fields(["title"])
            .add_field(make_field("author").add_fields(["name"]));

        assert_eq!(field.alias, "t");
        assert_eq!(field.arguments.len(), 3);
        assert_eq!(field.fields.len(), 2);
        assert_eq!(
            field.render_to_string().unwrap(),
            r#"t:threads(first:10,archived:false,tags:["a","b"]){title,author{name,},}"#
        );
    }

    #[test]
    fn test_set_arguments_and_set_fields_replace() {
        let field = make_field("f")
            .add_argument_int("a", 1)
            .set_arguments([Argument::int("b", 2)])
            .add_fields(["x"])
            .set_fields([make_field("y")]);

        assert_eq!(field.render_to_string().unwrap(), "f(b:2){y,}");
    }

    #[test]
    fn test_shared_child_renders_twice() {
        let shared = make_field("id").into_ref();
        let field = make_field("pair")
            .add_field_ref(Rc::clone(&shared))
            .add_field_ref(shared);

        assert_eq!(field.render_to_string().unwrap(), "pair{id,id,}");
    }

    #[test]
    fn test_debug_does_not_recurse_into_cycles() {
        let a = make_field("a").into_ref();
        let b = make_field("b").add_field_ref(Rc::clone(&a)).into_ref();
        a.borrow_mut().fields.push(Some(Rc::clone(&b)));
        a.borrow_mut().fields.push(None);

        let debug = format!("{:?}", a.borrow());
        assert!(debug.contains(r#"fields: ["b", "<nil>"]"#));

        a.borrow_mut().fields.clear();
    }
}
