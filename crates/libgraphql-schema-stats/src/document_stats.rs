use crate::is_string_type;
use libgraphql_astvisitor::walk_with_visitor;
use libgraphql_astvisitor::NodeKind;
use libgraphql_astvisitor::Report;
use libgraphql_astvisitor::VisitContext;
use libgraphql_astvisitor::VisitResult;
use libgraphql_astvisitor::Visitor;
use libgraphql_astvisitor::WalkOutcome;
use libgraphql_astvisitor::WalkerConfig;
use libgraphql_schema_ast::Document;
use libgraphql_schema_ast::EnumValueDefinitionId;
use libgraphql_schema_ast::FieldDefinitionId;
use libgraphql_schema_ast::InputValueDefinitionId;
use libgraphql_schema_ast::ObjectTypeDefinitionId;
use std::collections::BTreeSet;

/// Summary statistics of a schema document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DocumentStats {
    enum_values: Vec<String>,
    object_type_names: Vec<String>,
    string_field_count: usize,
    unique_field_names: BTreeSet<String>,
}
impl DocumentStats {
    /// Every enum value of every enum type, in declaration order.
    pub fn enum_values(&self) -> &[String] {
        self.enum_values.as_slice()
    }

    /// Names of object types in declaration order. Interface and input
    /// object types are not included.
    pub fn object_type_names(&self) -> &[String] {
        self.object_type_names.as_slice()
    }

    /// Fields and input values (arguments and input object fields) typed
    /// `String` or `String!`, counted once per definition.
    pub fn string_field_count(&self) -> usize {
        self.string_field_count
    }

    /// Distinct names of object and interface fields, sorted. Input values
    /// do not contribute.
    pub fn unique_field_names(&self) -> &BTreeSet<String> {
        &self.unique_field_names
    }
}

#[derive(Debug, Default)]
pub struct DocumentStatsVisitor {
    stats: DocumentStats,
}
impl DocumentStatsVisitor {
    pub const NODE_KINDS: [NodeKind; 5] = [
        NodeKind::Document,
        NodeKind::EnumValueDefinition,
        NodeKind::FieldDefinition,
        NodeKind::ObjectTypeDefinition,
        NodeKind::InputValueDefinition,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_stats(self) -> DocumentStats {
        self.stats
    }

    pub fn stats(&self) -> &DocumentStats {
        &self.stats
    }
}
impl<C> Visitor<C> for DocumentStatsVisitor {
    fn enter_document(&mut self, _cx: &mut VisitContext<'_, C>) -> VisitResult {
        self.stats = DocumentStats::default();
        Ok(())
    }

    fn enter_enum_value_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: EnumValueDefinitionId,
    ) -> VisitResult {
        let name = cx.document().enum_value_definition_name(id)?;
        self.stats.enum_values.push(name.to_string());
        Ok(())
    }

    fn enter_field_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: FieldDefinitionId,
    ) -> VisitResult {
        let document = cx.document();
        let field_def = document.field_definition(id)?;
        if !self.stats.unique_field_names.contains(field_def.name()) {
            self.stats.unique_field_names.insert(field_def.name().to_string());
        }
        if is_string_type(document, field_def.type_ref())? {
            self.stats.string_field_count += 1;
        }
        Ok(())
    }

    fn enter_object_type_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: ObjectTypeDefinitionId,
    ) -> VisitResult {
        let name = cx.document().object_type_definition_name(id)?;
        self.stats.object_type_names.push(name.to_string());
        Ok(())
    }

    fn enter_input_value_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: InputValueDefinitionId,
    ) -> VisitResult {
        let document = cx.document();
        if is_string_type(document, document.input_value_definition_type(id)?)? {
            self.stats.string_field_count += 1;
        }
        Ok(())
    }
}

/// Walks `document` once with the default [`WalkerConfig`] and returns its
/// [`DocumentStats`] along with how the walk ended.
pub fn gather_document_stats(
    document: &Document,
    report: &mut Report,
) -> (DocumentStats, WalkOutcome) {
    gather_document_stats_with_config(document, WalkerConfig::default(), report)
}

/// Like [`gather_document_stats()`], with an explicit walker configuration.
///
/// On [`WalkOutcome::Failed`] the stats hold only what was gathered before
/// the walk aborted, and the failure is recorded in `report`.
pub fn gather_document_stats_with_config(
    document: &Document,
    config: WalkerConfig,
    report: &mut Report,
) -> (DocumentStats, WalkOutcome) {
    let mut visitor = DocumentStatsVisitor::new();
    let outcome = walk_with_visitor(
        document,
        &mut visitor,
        &DocumentStatsVisitor::NODE_KINDS,
        config,
        report,
    );
    log::debug!(
        "Gathered document stats ({outcome:?}): {} unique field name(s), {} \
        object type(s).",
        visitor.stats.unique_field_names.len(),
        visitor.stats.object_type_names.len(),
    );
    (visitor.into_stats(), outcome)
}
