use libgraphql_schema_ast::DocumentError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum WalkError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("visitors cannot be registered once the walker has started walking")]
    LateRegistration,

    #[error("maximum walk depth of {max_depth} exceeded")]
    MaxDepthExceeded {
        max_depth: usize,
    },

    #[error("visitor #{0} is not registered with this walker")]
    UnknownVisitor(usize),

    #[error("{0}")]
    Visitor(String),
}
impl WalkError {
    /// Convenience for visitor callbacks that need to abort the walk with
    /// their own message.
    pub fn visitor(message: impl Into<String>) -> Self {
        Self::Visitor(message.into())
    }
}
