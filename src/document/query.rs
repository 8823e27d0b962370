//! Operation-level query documents.

use std::rc::Rc;

use crate::document::field::{fields, Field, FieldRef};
use crate::document::operation::OperationType;
use crate::error::RenderError;
use crate::render::{self, Fragments};

/// A GraphQL operation: its type, an optional name and the top-level fields.
///
/// `operation_type` is kept as a string so any literal can be stored; it must
/// be `query`, `mutation` or `subscription` (case-sensitive) by the time the
/// query is rendered.
///
/// # Example
///
/// ```rust
/// use graphql_builder::{fields, Argument, Field, Query};
///
/// let query = Query {
///     operation_type: "query".to_string(),
///     operation_name: String::new(),
///     fields: vec![Some(
///         Field {
///             name: "courses".to_string(),
///             alias: "Alias".to_string(),
///             arguments: vec![
///                 Argument::int("uid", 123),
///                 Argument::string_list("blocked_nds", ["nd013", "nd014"]),
///             ],
///             fields: fields(["key", "id"]),
///         }
///         .into_ref(),
///     )],
/// };
///
/// assert_eq!(
///     query.render_to_string().unwrap(),
///     r#"query{Alias:courses(uid:123,blocked_nds:["nd013","nd014"]){key,id,},}"#
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Query {
    /// One of `query`, `mutation` or `subscription`.
    pub operation_type: String,
    /// Operation name; empty for an anonymous operation.
    pub operation_name: String,
    /// Top-level fields, in render order.
    pub fields: Vec<Option<FieldRef>>,
}

impl Default for Query {
    fn default() -> Self {
        make_query(OperationType::default())
    }
}

/// Starts a query for method chaining.
///
/// Like literal construction, chaining defers all name checks to render time.
///
/// ```rust
/// use graphql_builder::{make_field, make_query, OperationType};
///
/// let query = make_query(OperationType::Mutation)
///     .set_operation_name("block")
///     .set_fields([make_field("block_user").add_argument_int("uid", 7)]);
///
/// assert_eq!(
///     query.render_to_string().unwrap(),
///     "mutation block{block_user(uid:7),}"
/// );
/// ```
#[must_use]
pub fn make_query(operation_type: OperationType) -> Query {
    Query {
        operation_type: operation_type.into(),
        operation_name: String::new(),
        fields: Vec::new(),
    }
}

impl Query {
    /// Sets the operation name. An empty string makes the operation anonymous.
    #[must_use]
    pub fn set_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = name.into();
        self
    }

    /// Replaces all top-level fields.
    #[must_use]
    pub fn set_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields = fields.into_iter().map(|f| Some(f.into_ref())).collect();
        self
    }

    /// Appends one top-level field.
    #[must_use]
    pub fn add_field(mut self, field: Field) -> Self {
        self.fields.push(Some(field.into_ref()));
        self
    }

    /// Appends a top-level field that may also be referenced elsewhere.
    #[must_use]
    pub fn add_field_ref(mut self, field: FieldRef) -> Self {
        self.fields.push(Some(field));
        self
    }

    /// Appends one leaf field per name.
    #[must_use]
    pub fn add_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields(names));
        self
    }

    /// Returns the first top-level field named `name`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<FieldRef> {
        self.fields
            .iter()
            .flatten()
            .find(|f| f.borrow().name == name)
            .map(Rc::clone)
    }

    /// Validates the query and returns a lazy stream of its text fragments.
    ///
    /// Validation runs to completion before the stream is returned: the
    /// operation type, the operation name, every top-level slot, a cycle
    /// check per top-level field, and finally every alias, name and argument
    /// key in the tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`RenderError`] found, in the order listed above.
    pub fn render(&self) -> Result<Fragments, RenderError> {
        render::render_query(self)
    }

    /// Renders the query to a single string.
    ///
    /// # Errors
    ///
    /// See [`Query::render`].
    pub fn render_to_string(&self) -> Result<String, RenderError> {
        Ok(self.render()?.into_string())
    }

    /// Renders the query and wraps it in a JSON request body,
    /// `{"query":"<text>"}`.
    ///
    /// # Errors
    ///
    /// See [`Query::render`]; additionally [`RenderError::Json`] if encoding
    /// fails.
    pub fn to_json_body(&self) -> Result<String, RenderError> {
        let text = self.render_to_string()?;
        render::json_body(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::field::make_field;

    #[test]
    fn test_make_query_stores_keyword() {
        let query = make_query(OperationType::Subscription);
        assert_eq!(query.operation_type, "subscription");
        assert!(query.operation_name.is_empty());
        assert!(query.fields.is_empty());
    }

    #[test]
    fn test_default_is_anonymous_query() {
        let query = Query::default();
        assert_eq!(query.render_to_string().unwrap(), "query{}");
    }

    #[test]
    fn test_field_lookup_skips_nil_slots() {
        let mut query = make_query(OperationType::Query).add_fields(["a", "b"]);
        query.fields.insert(0, None);

        let b = query.field("b").unwrap();
        assert_eq!(b.borrow().name, "b");
        assert!(query.field("c").is_none());
    }

    #[test]
    fn test_chained_fields_render_in_order() {
        let query = make_query(OperationType::Query)
            .set_operation_name("q")
            .add_field(make_field("first"))
            .add_fields(["second", "third"]);

        assert_eq!(
            query.render_to_string().unwrap(),
            "query q{first,second,third,}"
        );
    }

    #[test]
    fn test_json_body_wraps_rendered_text() {
        let query = make_query(OperationType::Query)
            .add_field(make_field("user").add_argument_string("uid", "123"));

        assert_eq!(
            query.to_json_body().unwrap(),
            r#"{"query":"query{user(uid:\"123\"),}"}"#
        );
    }
}
