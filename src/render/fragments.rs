//! Lazy fragment stream over a validated field tree.

use std::borrow::Cow;
use std::iter::FusedIterator;

use crate::document::{Field, OperationType};
use crate::error::{NilFieldError, RenderError};
use crate::names::validate_name;

/// A field that passed validation, captured with its head already rendered.
///
/// The stream owns these, so changes made to the caller's [`FieldRef`]s
/// after `render()` returns do not reach a stream that is already out.
///
/// [`FieldRef`]: crate::FieldRef
#[derive(Debug)]
pub(crate) struct Selection {
    head: String,
    children: Vec<Selection>,
}

impl Selection {
    /// Validates `field` and its descendants, depth first, alias before name
    /// before argument keys. The graph must already be known to be acyclic.
    pub(crate) fn capture(field: &Field) -> Result<Self, RenderError> {
        if !field.alias.is_empty() {
            validate_name(&field.alias)?;
        }
        validate_name(&field.name)?;
        for argument in &field.arguments {
            argument.check_keys()?;
        }

        let mut head = String::new();
        if !field.alias.is_empty() {
            head.push_str(&field.alias);
            head.push(':');
        }
        head.push_str(&field.name);
        if !field.arguments.is_empty() {
            let arguments: Vec<String> = field.arguments.iter().map(ToString::to_string).collect();
            head.push('(');
            head.push_str(&arguments.join(","));
            head.push(')');
        }

        let children = field
            .fields
            .iter()
            .map(|slot| -> Result<Self, RenderError> {
                let child = slot.as_ref().ok_or(NilFieldError)?;
                Self::capture(&child.borrow())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { head, children })
    }
}

#[derive(Debug)]
enum Piece {
    Text(&'static str),
    Owned(String),
    Field(Selection),
}

/// The text of a rendered query or field, produced piece by piece.
///
/// Fragments arrive in left-to-right document order. Concatenating all of
/// them gives the same string as `render_to_string`.
///
/// Each field's head (alias, name and arguments) is rendered while the tree
/// is validated, before the stream is returned. The stream itself only lays
/// those heads out with the surrounding braces and commas.
///
/// # Example
///
/// ```rust
/// use graphql_builder::{make_field, make_query, OperationType};
///
/// let query = make_query(OperationType::Query).add_field(make_field("me").add_fields(["id"]));
/// let fragments: Vec<_> = query.render().unwrap().collect();
///
/// assert_eq!(fragments, ["query", "{", "me", "{", "id", ",", "}", ",", "}"]);
/// ```
#[derive(Debug)]
pub struct Fragments {
    // Pending pieces, next one last.
    stack: Vec<Piece>,
}

impl Fragments {
    pub(crate) fn field(selection: Selection) -> Self {
        Self {
            stack: vec![Piece::Field(selection)],
        }
    }

    pub(crate) fn query(
        operation_type: OperationType,
        operation_name: &str,
        fields: Vec<Selection>,
    ) -> Self {
        let mut stream = Self {
            stack: Vec::with_capacity(2 * fields.len() + 4),
        };
        stream.push_block(fields);
        if stream.stack.is_empty() {
            stream.stack.push(Piece::Text("{}"));
        }
        if !operation_name.is_empty() {
            stream.stack.push(Piece::Owned(format!(" {operation_name}")));
        }
        stream.stack.push(Piece::Text(operation_type.as_str()));
        stream
    }

    /// Queues `{child,child,...,}`; nothing for an empty list.
    fn push_block(&mut self, children: Vec<Selection>) {
        if children.is_empty() {
            return;
        }
        self.stack.push(Piece::Text("}"));
        for child in children.into_iter().rev() {
            self.stack.push(Piece::Text(","));
            self.stack.push(Piece::Field(child));
        }
        self.stack.push(Piece::Text("{"));
    }

    /// Drains the stream into one string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.fold(String::new(), |mut out, piece| {
            out.push_str(&piece);
            out
        })
    }
}

impl Iterator for Fragments {
    type Item = Cow<'static, str>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            Piece::Text(text) => Some(Cow::Borrowed(text)),
            Piece::Owned(text) => Some(Cow::Owned(text)),
            Piece::Field(selection) => {
                self.push_block(selection.children);
                Some(Cow::Owned(selection.head))
            }
        }
    }
}

impl FusedIterator for Fragments {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{make_field, Argument};

    #[test]
    fn test_leaf_field_is_one_fragment() {
        let selection = Selection::capture(&make_field("id")).unwrap();
        let fragments: Vec<_> = Fragments::field(selection).collect();
        assert_eq!(fragments, ["id"]);
    }

    #[test]
    fn test_head_includes_alias_and_arguments() {
        let field = make_field("courses")
            .set_alias("Alias")
            .add_argument(Argument::int("uid", 123));
        let selection = Selection::capture(&field).unwrap();
        assert_eq!(selection.head, "Alias:courses(uid:123)");
    }

    #[test]
    fn test_head_joins_arguments_with_commas() {
        let field = make_field("search")
            .add_argument_string("term", "say \"hi\"")
            .add_argument_int_list("ids", [1, 2]);
        let selection = Selection::capture(&field).unwrap();
        assert_eq!(selection.head, r#"search(term:"say \"hi\"",ids:[1,2])"#);
    }

    #[test]
    fn test_nested_order() {
        let field = make_field("a")
            .add_field(make_field("b").add_fields(["c"]))
            .add_fields(["d"]);
        let fragments: Vec<_> = Fragments::field(Selection::capture(&field).unwrap()).collect();
        assert_eq!(
            fragments,
            ["a", "{", "b", "{", "c", ",", "}", ",", "d", ",", "}"]
        );
    }

    #[test]
    fn test_query_wrapper() {
        let fields = vec![Selection::capture(&make_field("x")).unwrap()];
        let text = Fragments::query(OperationType::Mutation, "named", fields).into_string();
        assert_eq!(text, "mutation named{x,}");
    }

    #[test]
    fn test_query_without_fields() {
        let text = Fragments::query(OperationType::Subscription, "", Vec::new()).into_string();
        assert_eq!(text, "subscription{}");
    }

    #[test]
    fn test_stream_is_fused() {
        let mut stream = Fragments::field(Selection::capture(&make_field("x")).unwrap());
        assert!(stream.next().is_some());
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_capture_rejects_bad_alias_before_name() {
        let field = make_field("bad name").set_alias("bad-alias");
        let err = Selection::capture(&field).unwrap_err();
        assert!(matches!(err, RenderError::InvalidName(e) if e.name == "bad-alias"));
    }

    #[test]
    fn test_capture_rejects_bad_argument_key() {
        let field = make_field("f").add_argument_int("1st", 1);
        let err = Selection::capture(&field).unwrap_err();
        assert!(matches!(err, RenderError::InvalidName(e) if e.name == "1st"));
    }
}
