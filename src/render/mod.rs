//! Rendering of queries and fields to GraphQL text.
//!
//! Output is whitespace-free. Every field inside a list is followed by a
//! comma, including the last one, while arguments are only separated by
//! commas:
//!
//! ```text
//! [Alias:]Name[(Arg1:Val1,Arg2:Val2)][{Child1,Child2,}]
//! OperationType[ OperationName]{Field1,Field2,}
//! ```
//!
//! Rendering is split in two phases. Validation walks the whole tree first:
//! operation type and name, empty slots, cycles, then names. Only a tree that
//! passes is turned into a [`Fragments`] stream, so a caller either gets an
//! error and no output, or a stream that cannot fail.

mod cycle;
mod fragments;

pub use cycle::check_cycle;
pub use fragments::Fragments;

use serde::Serialize;

use crate::document::{Field, OperationType, Query};
use crate::error::{NilFieldError, RenderError};
use crate::names::validate_name;
use fragments::Selection;

/// JSON request body sent to a GraphQL endpoint.
#[derive(Serialize)]
struct RequestBody<'a> {
    query: &'a str,
}

/// Wraps rendered query text in `{"query":"..."}`.
pub(crate) fn json_body(query: &str) -> Result<String, RenderError> {
    Ok(serde_json::to_string(&RequestBody { query })?)
}

pub(crate) fn render_field(field: &Field) -> Result<Fragments, RenderError> {
    let selection = validate_field(field).map_err(|err| {
        tracing::debug!(field = %field.name, error = %err, "rejected GraphQL field");
        err
    })?;
    Ok(Fragments::field(selection))
}

pub(crate) fn render_query(query: &Query) -> Result<Fragments, RenderError> {
    let (operation_type, selections) = validate_query(query).map_err(|err| {
        tracing::debug!(
            operation_type = %query.operation_type,
            operation_name = %query.operation_name,
            error = %err,
            "rejected GraphQL query"
        );
        err
    })?;

    tracing::trace!(
        operation_type = %operation_type,
        fields = selections.len(),
        "rendering GraphQL query"
    );
    Ok(Fragments::query(
        operation_type,
        &query.operation_name,
        selections,
    ))
}

fn validate_query(query: &Query) -> Result<(OperationType, Vec<Selection>), RenderError> {
    let operation_type: OperationType = query.operation_type.parse()?;
    if !query.operation_name.is_empty() {
        validate_name(&query.operation_name)?;
    }

    let mut selections = Vec::with_capacity(query.fields.len());
    for slot in &query.fields {
        let field = slot.as_ref().ok_or(NilFieldError)?;
        selections.push(validate_field(&field.borrow())?);
    }
    Ok((operation_type, selections))
}

/// Runs the cycle check, then captures the validated subtree.
///
/// The cycle check has to come first: name validation recurses without a
/// visited set.
fn validate_field(field: &Field) -> Result<Selection, RenderError> {
    check_cycle(field).map_err(|source| RenderError::Cycle {
        field: field.name.clone(),
        source,
    })?;
    Selection::capture(field)
}
