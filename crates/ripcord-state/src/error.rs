use serde_json::Value;
use thiserror::Error;

/// Errors raised while mapping an API payload into a typed record.
///
/// A *missing* key is never an error — absence maps to `None`. Only a key
/// that is present with an uncastable value is fatal to the build call.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("malformed field `{field}`: expected {expected}, got {value}")]
    MalformedField {
        field: &'static str,
        value: Value,
        expected: &'static str,
    },
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors originating from a resolver while turning a nested payload
/// fragment into a canonical object.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("missing {0} fragment")]
    MissingFragment(&'static str),
    #[error("invalid {kind} fragment: {reason}")]
    InvalidFragment { kind: &'static str, reason: String },
}
