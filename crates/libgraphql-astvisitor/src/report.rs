use crate::Node;
use crate::WalkError;
use libgraphql_schema_ast::Document;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}
impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Where in the document a [`Diagnostic`] was raised.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeContext {
    /// The innermost node on the walk path when the diagnostic was recorded.
    pub node: Node,

    /// Dotted names of the named nodes on the walk path (e.g.
    /// `"Query.hero.id"`). Empty when only the document root was entered.
    pub path: String,
}
impl NodeContext {
    pub(crate) fn from_ancestors(document: &Document, ancestors: &[Node]) -> Option<Self> {
        let node = *ancestors.last()?;
        let path = ancestors.iter()
            .filter_map(|ancestor| ancestor.name(document))
            .collect::<Vec<_>>()
            .join(".");
        Some(Self { node, path })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    error: Option<WalkError>,
    message: String,
    node: Option<NodeContext>,
    severity: Severity,
}
impl Diagnostic {
    /// The [`WalkError`] this diagnostic was recorded for, if it came from
    /// the walker itself.
    pub fn error(&self) -> Option<&WalkError> {
        self.error.as_ref()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub fn node(&self) -> Option<&NodeContext> {
        self.node.as_ref()
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}
impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(NodeContext { path, .. }) = &self.node
            && !path.is_empty() {
            write!(f, " (at `{path}`)")?;
        }
        Ok(())
    }
}

/// An append-only collection of [`Diagnostic`]s produced while walking
/// documents.
///
/// A single `Report` may be shared across several walks; each one only ever
/// adds to it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    diagnostics: Vec<Diagnostic>,
}
impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, message: impl Into<String>, node: Option<NodeContext>) {
        self.push(Severity::Error, message.into(), node, None);
    }

    pub fn add_warning(&mut self, message: impl Into<String>, node: Option<NodeContext>) {
        self.push(Severity::Warning, message.into(), node, None);
    }

    pub fn add_walk_error(&mut self, error: WalkError, node: Option<NodeContext>) {
        self.push(Severity::Error, error.to_string(), node, Some(error));
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.as_slice()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|diag| diag.severity == Severity::Error)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn push(
        &mut self,
        severity: Severity,
        message: String,
        node: Option<NodeContext>,
        error: Option<WalkError>,
    ) {
        self.diagnostics.push(Diagnostic {
            error,
            message,
            node,
            severity,
        });
    }
}
