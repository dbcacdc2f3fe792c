use super::Result;
use crate::build_example_document;
use crate::gather_document_stats;
use crate::gather_string_field_stats;
use crate::SCHEMA_EXAMPLE;
use libgraphql_astvisitor::Report;
use libgraphql_schema_ast::parse_schema;
use libgraphql_schema_ast::TypeDefinitionId;

#[test]
fn built_and_parsed_documents_have_identical_stats() -> Result<()> {
    let built = build_example_document()?;
    let parsed = parse_schema(SCHEMA_EXAMPLE)?;
    let mut report = Report::new();

    let (built_stats, _) = gather_document_stats(&built, &mut report);
    let (parsed_stats, _) = gather_document_stats(&parsed, &mut report);
    assert!(report.is_empty(), "{report:?}");
    assert_eq!(built_stats, parsed_stats);
    assert_eq!(built_stats.object_type_names(), &["Query", "Droid"]);
    assert_eq!(built_stats.string_field_count(), 2);

    assert_eq!(
        gather_string_field_stats(&built, &mut report),
        gather_string_field_stats(&parsed, &mut report),
    );
    Ok(())
}

#[test]
fn built_document_matches_parsed_structure() -> Result<()> {
    let built = build_example_document()?;
    let parsed = parse_schema(SCHEMA_EXAMPLE)?;

    let type_names = |doc: &libgraphql_schema_ast::Document| {
        doc.type_definitions()
            .iter()
            .map(|type_def| doc.type_definition_name(*type_def).map(str::to_string))
            .collect::<std::result::Result<Vec<_>, _>>()
    };
    assert_eq!(type_names(&built)?, type_names(&parsed)?);
    assert_eq!(built.field_definition_count(), parsed.field_definition_count());
    assert_eq!(
        built.schema_definition().and_then(|def| def.query_type_name()),
        parsed.schema_definition().and_then(|def| def.query_type_name()),
    );

    let TypeDefinitionId::Object(droid) = built.type_definitions()[2] else {
        panic!("expected `Droid` to be an object type");
    };
    assert_eq!(built.object_type_definition_interface_names(droid)?, vec!["Character"]);
    Ok(())
}
