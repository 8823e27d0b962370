//! # GraphQL Builder
//!
//! Build GraphQL queries, mutations and subscriptions as trees of fields and
//! render them to the GraphQL query language, or to a JSON request body.
//!
//! ## Overview
//!
//! This crate provides:
//! - A document model: [`Query`], [`Field`] / [`FieldRef`], [`Argument`]
//! - Three ways to assemble it: struct literals, method chaining
//!   ([`make_query`], [`make_field`]) and option lists ([`Query::new`],
//!   [`options`])
//! - Identifier validation against the GraphQL name grammar ([`names`])
//! - Cycle detection on field graphs ([`check_cycle`])
//! - A lazy fragment stream ([`Fragments`]) and string/JSON rendering
//!
//! ## Quick Start
//!
//! ```rust
//! use graphql_builder::{fields, Argument, Field, Query};
//!
//! let query = Query {
//!     operation_type: "query".to_string(),
//!     operation_name: String::new(),
//!     fields: vec![Some(
//!         Field {
//!             name: "courses".to_string(),
//!             alias: "Alias".to_string(),
//!             arguments: vec![
//!                 Argument::int("uid", 123),
//!                 Argument::string_list("blocked_nds", ["nd013", "nd014"]),
//!             ],
//!             fields: fields(["key", "id"]),
//!         }
//!         .into_ref(),
//!     )],
//! };
//!
//! assert_eq!(
//!     query.to_json_body().unwrap(),
//!     r#"{"query":"query{Alias:courses(uid:123,blocked_nds:[\"nd013\",\"nd014\"]){key,id,},}"}"#
//! );
//! ```
//!
//! ## Method Chaining
//!
//! ```rust
//! use graphql_builder::{make_field, make_query, OperationType};
//!
//! let query = make_query(OperationType::Query)
//!     .set_operation_name("viewer")
//!     .set_fields([make_field("me").add_fields(["id", "login"])]);
//!
//! assert_eq!(query.render_to_string().unwrap(), "query viewer{me{id,login,},}");
//! ```
//!
//! ## Validation
//!
//! Literal and chained construction accept anything; the tree is checked
//! when it is rendered. Rendering validates the whole tree before any text is
//! produced, so an error always comes with no output:
//!
//! ```rust
//! use graphql_builder::{make_field, make_query, OperationType, RenderError};
//!
//! let query = make_query(OperationType::Query)
//!     .add_field(make_field("courses").set_alias("not-an-alias"));
//!
//! let err = query.render().unwrap_err();
//! assert!(matches!(err, RenderError::InvalidName(_)));
//! ```
//!
//! Option lists check names as soon as they are applied. See [`options`].
//!
//! ## Design Principles
//!
//! - **No global state**: every render call owns its output
//! - **Deferred validation** for literals and chaining, **eager validation**
//!   for option lists
//! - **Read-only rendering**: the caller's tree is never modified
//! - **Single-threaded**: fields are shared through `Rc<RefCell<_>>`

pub mod document;
pub mod error;
pub mod names;
pub mod options;
pub mod render;

// Re-export public types at crate root for convenience
pub use document::{
    fields, make_field, make_query, Argument, ArgumentValue, Field, FieldRef, OperationType,
    Query,
};
pub use error::{
    BuildError, CycleError, CyclicFieldError, InvalidNameError, InvalidOperationTypeError,
    NilFieldError, RenderError,
};
pub use names::{validate_name, Name};
pub use render::{check_cycle, Fragments};
