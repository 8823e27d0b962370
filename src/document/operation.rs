//! GraphQL operation types.

use crate::error::InvalidOperationTypeError;
use std::fmt;
use std::str::FromStr;

/// The kind of a GraphQL operation.
///
/// [`Query::operation_type`](crate::Query::operation_type) stores the token as
/// a plain string so that literal construction can hold any value; this enum
/// is what the builders accept and what the renderer parses the token into.
///
/// # Example
///
/// ```rust
/// use graphql_builder::OperationType;
///
/// assert_eq!(OperationType::Mutation.to_string(), "mutation");
///
/// let parsed: OperationType = "subscription".parse().unwrap();
/// assert_eq!(parsed, OperationType::Subscription);
///
/// // Tokens are case-sensitive
/// assert!("Query".parse::<OperationType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OperationType {
    /// A read-only fetch.
    #[default]
    Query,
    /// A write followed by a fetch.
    Mutation,
    /// A long-lived request that fetches data in response to events.
    Subscription,
}

impl OperationType {
    /// All operation types, in the order GraphQL lists them.
    pub const ALL: [Self; 3] = [Self::Query, Self::Mutation, Self::Subscription];

    /// Returns the keyword used in the query document.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationType {
    type Err = InvalidOperationTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| InvalidOperationTypeError {
                operation_type: s.to_string(),
            })
    }
}

impl From<OperationType> for String {
    fn from(ty: OperationType) -> Self {
        ty.as_str().to_string()
    }
}
