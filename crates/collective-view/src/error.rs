//! Error Types

use thiserror::Error;

/// Result alias for view derivations
pub type ViewResult<T> = Result<T, ViewError>;

/// ICU message parse errors, positions are byte offsets into the pattern
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("unbalanced brace at {0}")]
    UnbalancedBrace(usize),
    #[error("empty argument name at {0}")]
    EmptyArgument(usize),
    #[error("unknown argument type `{kind}` at {position}")]
    UnknownArgumentType { kind: String, position: usize },
    #[error("`{0}` is missing an `other` branch")]
    MissingOther(String),
    #[error("malformed branch in `{0}`")]
    MalformedBranch(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route `{0}`")]
    UnknownRoute(String),
    #[error("route `{route}` requires param `{param}`")]
    MissingParam { route: String, param: String },
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("message `{id}`: {source}")]
    Message {
        id: String,
        #[source]
        source: MessageError,
    },
    #[error(transparent)]
    Route(#[from] RouteError),
}
