/// Errors raised while composing an endpoint.
///
/// Both variants are caller errors: the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("invalid URI scheme {0:?}")]
    InvalidScheme(String),
    #[error("unknown command {0:?}, expected \"lock\" or \"unlock\"")]
    InvalidCommand(String),
}

/// Errors raised while decoding an endpoint back into its parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointParseError {
    #[error("endpoint is missing the \":///\" separator")]
    MissingSeparator,
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("endpoint is missing the {0} query parameter")]
    MissingParameter(&'static str),
    #[error("query parameter {0} is not valid percent-encoded UTF-8")]
    InvalidEncoding(&'static str),
}
