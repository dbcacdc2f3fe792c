use crate::Node;
use crate::NodeContext;
use crate::Report;
use crate::Severity;
use crate::WalkError;

#[test]
fn warnings_do_not_count_as_errors() {
    let mut report = Report::new();
    report.add_warning("schema has no query type", None);

    assert!(!report.is_empty());
    assert!(!report.has_errors());
    assert_eq!(report.diagnostics()[0].severity(), Severity::Warning);
}

#[test]
fn diagnostics_keep_insertion_order() {
    let mut report = Report::new();
    report.add_error("first", None);
    report.add_warning("second", None);
    report.add_walk_error(WalkError::LateRegistration, None);

    let messages = report.diagnostics()
        .iter()
        .map(|diag| diag.message())
        .collect::<Vec<_>>();
    assert_eq!(messages, vec![
        "first",
        "second",
        "visitors cannot be registered once the walker has started walking",
    ]);
    assert_eq!(report.errors().count(), 2);
    assert_eq!(report.diagnostics()[2].error(), Some(&WalkError::LateRegistration));
    assert_eq!(report.diagnostics()[0].error(), None);
}

#[test]
fn display_includes_node_path() {
    let mut report = Report::new();
    report.add_walk_error(
        WalkError::MaxDepthExceeded { max_depth: 4 },
        Some(NodeContext {
            node: Node::SchemaDefinition,
            path: "Query.hero".to_string(),
        }),
    );
    report.add_error("no path", Some(NodeContext {
        node: Node::Document,
        path: String::new(),
    }));

    assert_eq!(
        report.diagnostics()[0].to_string(),
        "error: maximum walk depth of 4 exceeded (at `Query.hero`)",
    );
    assert_eq!(report.diagnostics()[1].to_string(), "error: no path");
}
