use libgraphql_astvisitor::walk_with_visitor;
use libgraphql_astvisitor::NodeKind;
use libgraphql_astvisitor::Report;
use libgraphql_astvisitor::VisitContext;
use libgraphql_astvisitor::VisitResult;
use libgraphql_astvisitor::Visitor;
use libgraphql_astvisitor::WalkOutcome;
use libgraphql_astvisitor::WalkerConfig;
use libgraphql_schema_ast::Document;
use libgraphql_schema_ast::DocumentError;
use libgraphql_schema_ast::FieldDefinitionId;
use libgraphql_schema_ast::InputValueDefinitionId;
use libgraphql_schema_ast::TypeRef;
use libgraphql_schema_ast::TypeRefId;
use std::collections::BTreeSet;

/// Whether `type_ref` is written as `String` or `String!`.
///
/// List-wrapped strings (`[String]`, `[String!]!`, ...) do not count.
pub fn is_string_type(document: &Document, type_ref: TypeRefId) -> Result<bool, DocumentError> {
    Ok(match document.type_ref(type_ref)? {
        TypeRef::Named(name) => name == "String",
        TypeRef::NonNull(inner) => matches!(
            document.type_ref(*inner)?,
            TypeRef::Named(name) if name == "String",
        ),
        TypeRef::List(_) => false,
    })
}

/// String-typed fields and input values of a document.
///
/// `string_field_count` counts every definition, so two `name: String!`
/// fields on different types count twice, while `string_field_names` holds
/// each name once.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StringFieldStats {
    string_field_count: usize,
    string_field_names: BTreeSet<String>,
}
impl StringFieldStats {
    pub fn string_field_count(&self) -> usize {
        self.string_field_count
    }

    /// Distinct names, in sorted order.
    pub fn string_field_names(&self) -> &BTreeSet<String> {
        &self.string_field_names
    }

    fn record(&mut self, name: &str) {
        self.string_field_count += 1;
        if !self.string_field_names.contains(name) {
            self.string_field_names.insert(name.to_string());
        }
    }
}

#[derive(Debug, Default)]
pub struct StringFieldStatsVisitor {
    stats: StringFieldStats,
}
impl StringFieldStatsVisitor {
    pub const NODE_KINDS: [NodeKind; 3] = [
        NodeKind::Document,
        NodeKind::FieldDefinition,
        NodeKind::InputValueDefinition,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_stats(self) -> StringFieldStats {
        self.stats
    }

    pub fn stats(&self) -> &StringFieldStats {
        &self.stats
    }
}
impl<C> Visitor<C> for StringFieldStatsVisitor {
    fn enter_document(&mut self, _cx: &mut VisitContext<'_, C>) -> VisitResult {
        self.stats = StringFieldStats::default();
        Ok(())
    }

    fn enter_field_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: FieldDefinitionId,
    ) -> VisitResult {
        let document = cx.document();
        let field_def = document.field_definition(id)?;
        if is_string_type(document, field_def.type_ref())? {
            self.stats.record(field_def.name());
        }
        Ok(())
    }

    fn enter_input_value_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: InputValueDefinitionId,
    ) -> VisitResult {
        let document = cx.document();
        let input_value_def = document.input_value_definition(id)?;
        if is_string_type(document, input_value_def.type_ref())? {
            self.stats.record(input_value_def.name());
        }
        Ok(())
    }
}

/// Walks `document` once and returns its [`StringFieldStats`] along with how
/// the walk ended.
///
/// If the walk fails, the failure is recorded in `report` and the stats
/// gathered up to that point are returned with [`WalkOutcome::Failed`].
pub fn gather_string_field_stats(
    document: &Document,
    report: &mut Report,
) -> (StringFieldStats, WalkOutcome) {
    let mut visitor = StringFieldStatsVisitor::new();
    let outcome = walk_with_visitor(
        document,
        &mut visitor,
        &StringFieldStatsVisitor::NODE_KINDS,
        WalkerConfig::default(),
        report,
    );
    log::debug!(
        "Gathered string field stats ({outcome:?}): {} occurrence(s).",
        visitor.stats.string_field_count,
    );
    (visitor.into_stats(), outcome)
}
