//! Error types for building and rendering GraphQL documents.
//!
//! Trees are allowed to hold invalid names, absent children and even cycles
//! while they are being assembled. Those problems surface as values of the
//! types below once rendering is attempted, or immediately when a name is
//! handed to one of the option constructors in [`crate::options`].
//!
//! # Error Handling
//!
//! - [`RenderError`]: returned by every render entry point
//! - [`CycleError`]: returned by the cycle detector, wrapped by [`RenderError::Cycle`]
//! - [`BuildError`]: returned by [`Query::new`](crate::Query::new) and
//!   [`Field::new`](crate::Field::new)
//!
//! # Example
//!
//! ```rust
//! use graphql_builder::{Query, RenderError};
//!
//! let query = Query {
//!     operation_type: "muTatio".to_string(),
//!     ..Query::default()
//! };
//!
//! let err = query.render_to_string().unwrap_err();
//! assert!(matches!(err, RenderError::InvalidOperationType(_)));
//! ```

use thiserror::Error;

/// A name, alias, or argument key that does not match the GraphQL name grammar.
///
/// This is the error raised on the render path. The option constructors use
/// the shorter [`BuildError::InvalidName`] message instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{name}' is an invalid name identifier in GraphQL. A valid name matches /[_A-Za-z][_0-9A-Za-z]*/, see: http://facebook.github.io/graphql/October2016/#sec-Names")]
pub struct InvalidNameError {
    /// The rejected identifier.
    pub name: String,
}

/// An operation type other than `query`, `mutation` or `subscription`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("'{operation_type}' is an invalid operation type in GraphQL. A valid type is one of 'query', 'mutation', 'subscription'")]
pub struct InvalidOperationTypeError {
    /// The rejected operation type token.
    pub operation_type: String,
}

/// An absent slot in a list of fields.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("nil Field is not allowed. Please initialize a correct Field with NewField(...) function or Field{{...}} literal")]
pub struct NilFieldError;

/// A field that is reachable from itself through its children.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cyclic reference detected at Field '{field}'. A Field cannot be its own descendant")]
pub struct CyclicFieldError {
    /// Name of the field that was revisited.
    pub field: String,
}

/// Failure reported by the cycle detector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CycleError {
    /// A child slot held no field.
    #[error(transparent)]
    Nil(#[from] NilFieldError),

    /// A field was found on its own ancestor path.
    #[error(transparent)]
    Cyclic(#[from] CyclicFieldError),
}

/// Errors returned when rendering a [`Query`](crate::Query) or [`Field`](crate::Field).
///
/// Every variant is terminal for the render call that produced it; no output
/// stream is handed out alongside an error.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An operation name, alias, field name or argument key is not a valid identifier.
    #[error(transparent)]
    InvalidName(#[from] InvalidNameError),

    /// The query's operation type is not one of the three GraphQL operation types.
    #[error(transparent)]
    InvalidOperationType(#[from] InvalidOperationTypeError),

    /// A top-level field slot of a query is empty.
    #[error(transparent)]
    NilField(#[from] NilFieldError),

    /// The cycle check of a top-level field failed.
    ///
    /// The underlying [`CycleError`] is kept as the error source so callers
    /// can tell a cycle apart from a nested nil slot.
    #[error("field '{field}' failed the cycle check: {source}")]
    Cycle {
        /// Name of the field the check started from.
        field: String,
        /// What the detector found.
        #[source]
        source: CycleError,
    },

    /// The JSON request body could not be encoded.
    #[error("failed to encode the request body: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenderError {
    /// Returns the cycle detector's finding, if this error came from it.
    #[must_use]
    pub const fn cycle_cause(&self) -> Option<&CycleError> {
        match self {
            Self::Cycle { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Returns `true` if the root cause is a [`CyclicFieldError`].
    #[must_use]
    pub const fn is_cyclic(&self) -> bool {
        matches!(self.cycle_cause(), Some(CycleError::Cyclic(_)))
    }

    /// Returns `true` if the root cause is a [`NilFieldError`], whether it was
    /// found at the top level or deep inside the tree.
    #[must_use]
    pub const fn is_nil_field(&self) -> bool {
        matches!(
            self,
            Self::NilField(_)
                | Self::Cycle {
                    source: CycleError::Nil(_),
                    ..
                }
        )
    }
}

/// Errors returned by the option constructors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A name passed through an option is not a valid identifier.
    #[error("'{name}' is not a valid name.")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}
