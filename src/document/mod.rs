//! The GraphQL document model.
//!
//! - [`Query`]: an operation with its top-level fields
//! - [`Field`] / [`FieldRef`]: recursively nested selections
//! - [`Argument`] / [`ArgumentValue`]: typed key/value pairs on a field
//! - [`OperationType`]: `query`, `mutation` or `subscription`

mod argument;
mod field;
mod operation;
mod query;

pub use argument::{Argument, ArgumentValue};
pub use field::{fields, make_field, Field, FieldRef};
pub use operation::OperationType;
pub use query::{make_query, Query};

