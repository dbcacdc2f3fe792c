use super::Result;
use crate::gather_document_stats;
use crate::gather_document_stats_with_config;
use crate::gather_string_field_stats;
use crate::STAR_WARS_SCHEMA;
use libgraphql_astvisitor::walk_with_visitor;
use libgraphql_astvisitor::NodeKind;
use libgraphql_astvisitor::Report;
use libgraphql_astvisitor::VisitContext;
use libgraphql_astvisitor::VisitResult;
use libgraphql_astvisitor::Visitor;
use libgraphql_astvisitor::WalkOutcome;
use libgraphql_astvisitor::WalkerConfig;
use libgraphql_schema_ast::parse_schema;
use libgraphql_schema_ast::FieldDefinitionId;

#[derive(Default)]
struct FieldCounter {
    fields: usize,
}
impl Visitor for FieldCounter {
    fn enter_field_definition(
        &mut self,
        _cx: &mut VisitContext<'_, ()>,
        _id: FieldDefinitionId,
    ) -> VisitResult {
        self.fields += 1;
        Ok(())
    }
}

#[test]
fn string_field_stats_count_occurrences_and_dedupe_names() -> Result<()> {
    let doc = parse_schema(STAR_WARS_SCHEMA)?;
    let mut report = Report::new();

    let (stats, outcome) = gather_string_field_stats(&doc, &mut report);

    assert_eq!(outcome, WalkOutcome::Succeeded);
    assert!(!report.has_errors(), "{report:?}");
    assert_eq!(stats.string_field_count(), 9);
    assert_eq!(
        stats.string_field_names().iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["commentary", "height", "name", "primaryFunction"],
    );
    Ok(())
}

#[test]
fn document_stats_match_star_wars_schema() -> Result<()> {
    let doc = parse_schema(STAR_WARS_SCHEMA)?;
    let mut report = Report::new();

    let (stats, outcome) = gather_document_stats(&doc, &mut report);

    assert_eq!(outcome, WalkOutcome::Succeeded);
    assert!(!report.has_errors(), "{report:?}");
    assert_eq!(stats.string_field_count(), 9);
    assert_eq!(
        stats.unique_field_names().iter().map(String::as_str).collect::<Vec<_>>(),
        vec![
            "commentary",
            "createReview",
            "droid",
            "friends",
            "height",
            "hero",
            "id",
            "length",
            "name",
            "primaryFunction",
            "remainingJedis",
            "search",
            "stars",
        ],
    );
    assert_eq!(stats.object_type_names(), &[
        "Query",
        "Mutation",
        "Subscription",
        "Review",
        "Human",
        "Droid",
        "Starship",
    ]);
    assert_eq!(stats.enum_values(), &["NEWHOPE", "EMPIRE", "JEDI"]);
    Ok(())
}

#[test]
fn every_field_definition_is_visited_once() -> Result<()> {
    let doc = parse_schema(STAR_WARS_SCHEMA)?;
    let mut counter = FieldCounter::default();
    let mut report = Report::new();

    let outcome = walk_with_visitor(
        &doc,
        &mut counter,
        &[NodeKind::FieldDefinition],
        WalkerConfig::default(),
        &mut report,
    );

    assert_eq!(outcome, WalkOutcome::Succeeded);
    assert_eq!(counter.fields, doc.field_definition_count());
    assert_eq!(counter.fields, 18);
    Ok(())
}

#[test]
fn shallow_walk_reports_depth_error_and_keeps_partial_stats() -> Result<()> {
    let doc = parse_schema(STAR_WARS_SCHEMA)?;
    let mut report = Report::new();

    // Deep enough for `Query` but not for the `Character` type reference of
    // its first field.
    let (stats, outcome) = gather_document_stats_with_config(
        &doc,
        WalkerConfig::with_max_depth(3),
        &mut report,
    );

    assert_eq!(outcome, WalkOutcome::Failed);
    assert!(report.has_errors());
    assert_eq!(stats.object_type_names(), &["Query"]);
    assert_eq!(
        stats.unique_field_names().iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["hero"],
    );
    Ok(())
}

#[test]
fn aborted_and_complete_walks_sharing_a_report_are_distinguishable() -> Result<()> {
    let doc = parse_schema(STAR_WARS_SCHEMA)?;
    let mut report = Report::new();

    let (partial, partial_outcome) = gather_document_stats_with_config(
        &doc,
        WalkerConfig::with_max_depth(3),
        &mut report,
    );
    let (full, full_outcome) = gather_document_stats(&doc, &mut report);

    // The report only says that some walk failed.
    assert!(report.has_errors());
    assert_eq!(report.errors().count(), 1);

    assert_eq!(partial_outcome, WalkOutcome::Failed);
    assert_eq!(partial.object_type_names(), &["Query"]);
    assert_eq!(full_outcome, WalkOutcome::Succeeded);
    assert_eq!(full.object_type_names().len(), 7);
    Ok(())
}
