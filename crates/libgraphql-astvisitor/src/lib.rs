//! A depth-first walker over [`libgraphql_schema_ast::Document`]s.
//!
//! Analyses implement [`Visitor`], lend themselves to a [`Walker`] and
//! register for the [`NodeKind`]s they care about. One call to
//! [`Walker::walk()`] then visits every node of those kinds exactly once, in
//! declaration order, so the same document always yields the same sequence
//! of callbacks.
//!
//! Failures never escape a walk as panics. They are recorded in the
//! [`Report`] passed to `walk()` and the walk ends with
//! [`WalkOutcome::Failed`].

mod node;
mod report;
mod visitor;
mod walk_error;
mod walker;

pub use node::Node;
pub use node::NodeKind;
pub use report::Diagnostic;
pub use report::NodeContext;
pub use report::Report;
pub use report::Severity;
pub use visitor::VisitContext;
pub use visitor::VisitResult;
pub use visitor::Visitor;
pub use walk_error::WalkError;
pub use walker::walk_with_visitor;
pub use walker::VisitorId;
pub use walker::WalkOutcome;
pub use walker::WalkState;
pub use walker::Walker;
pub use walker::WalkerConfig;
pub use walker::DEFAULT_MAX_DEPTH;

#[cfg(test)]
mod tests;
