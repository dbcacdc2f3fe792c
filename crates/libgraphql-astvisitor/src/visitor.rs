use crate::Node;
use crate::WalkError;
use libgraphql_schema_ast::Document;
use libgraphql_schema_ast::EnumTypeDefinitionId;
use libgraphql_schema_ast::EnumValueDefinitionId;
use libgraphql_schema_ast::FieldDefinitionId;
use libgraphql_schema_ast::InputObjectTypeDefinitionId;
use libgraphql_schema_ast::InputValueDefinitionId;
use libgraphql_schema_ast::InterfaceTypeDefinitionId;
use libgraphql_schema_ast::ObjectTypeDefinitionId;
use libgraphql_schema_ast::ScalarTypeDefinitionId;
use libgraphql_schema_ast::UnionTypeDefinitionId;

pub type VisitResult = std::result::Result<(), WalkError>;

/// What a [`Visitor`] callback can see of the walk in progress.
pub struct VisitContext<'a, C> {
    pub(crate) ancestors: &'a [Node],
    pub(crate) document: &'a Document,
    pub(crate) user_context: &'a mut C,
}
impl<'a, C> VisitContext<'a, C> {
    /// The nodes entered so far, from the document root down to (and
    /// including) the node being visited.
    pub fn ancestors(&self) -> &[Node] {
        self.ancestors
    }

    /// Depth of the node being visited. The document root is at depth 1.
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    pub fn document(&self) -> &'a Document {
        self.document
    }

    pub fn user_context(&self) -> &C {
        &*self.user_context
    }

    pub fn user_context_mut(&mut self) -> &mut C {
        &mut *self.user_context
    }
}

/// Callbacks invoked by a [`Walker`](crate::Walker) as it enters each node.
///
/// Every method defaults to doing nothing, so implementors only override the
/// node kinds they analyze. A callback only runs if the visitor was
/// registered for the matching [`NodeKind`](crate::NodeKind). Returning an
/// `Err` aborts the walk.
///
/// `C` is the user context threaded through every callback of a walk.
#[allow(unused_variables)]
pub trait Visitor<C = ()> {
    fn enter_document(&mut self, cx: &mut VisitContext<'_, C>) -> VisitResult {
        Ok(())
    }

    /// Look the definition up with `cx.document().schema_definition()`.
    fn enter_schema_definition(&mut self, cx: &mut VisitContext<'_, C>) -> VisitResult {
        Ok(())
    }

    fn enter_object_type_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: ObjectTypeDefinitionId,
    ) -> VisitResult {
        Ok(())
    }

    fn enter_interface_type_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: InterfaceTypeDefinitionId,
    ) -> VisitResult {
        Ok(())
    }

    fn enter_field_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: FieldDefinitionId,
    ) -> VisitResult {
        Ok(())
    }

    /// Called for field arguments as well as input object fields.
    fn enter_input_value_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: InputValueDefinitionId,
    ) -> VisitResult {
        Ok(())
    }

    fn enter_enum_type_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: EnumTypeDefinitionId,
    ) -> VisitResult {
        Ok(())
    }

    fn enter_enum_value_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: EnumValueDefinitionId,
    ) -> VisitResult {
        Ok(())
    }

    fn enter_input_object_type_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: InputObjectTypeDefinitionId,
    ) -> VisitResult {
        Ok(())
    }

    fn enter_union_type_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: UnionTypeDefinitionId,
    ) -> VisitResult {
        Ok(())
    }

    fn enter_scalar_type_definition(
        &mut self,
        cx: &mut VisitContext<'_, C>,
        id: ScalarTypeDefinitionId,
    ) -> VisitResult {
        Ok(())
    }
}
