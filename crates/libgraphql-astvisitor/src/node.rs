use libgraphql_schema_ast::Document;
use libgraphql_schema_ast::EnumTypeDefinitionId;
use libgraphql_schema_ast::EnumValueDefinitionId;
use libgraphql_schema_ast::FieldDefinitionId;
use libgraphql_schema_ast::InputObjectTypeDefinitionId;
use libgraphql_schema_ast::InputValueDefinitionId;
use libgraphql_schema_ast::InterfaceTypeDefinitionId;
use libgraphql_schema_ast::ObjectTypeDefinitionId;
use libgraphql_schema_ast::ScalarTypeDefinitionId;
use libgraphql_schema_ast::TypeRefId;
use libgraphql_schema_ast::UnionTypeDefinitionId;

/// The kinds of node a [`Visitor`](crate::Visitor) can be registered for.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeKind {
    Document,
    SchemaDefinition,
    ObjectTypeDefinition,
    InterfaceTypeDefinition,
    FieldDefinition,
    InputValueDefinition,
    EnumTypeDefinition,
    EnumValueDefinition,
    InputObjectTypeDefinition,
    UnionTypeDefinition,
    ScalarTypeDefinition,
}
impl NodeKind {
    pub const ALL: [NodeKind; NodeKind::COUNT] = [
        NodeKind::Document,
        NodeKind::SchemaDefinition,
        NodeKind::ObjectTypeDefinition,
        NodeKind::InterfaceTypeDefinition,
        NodeKind::FieldDefinition,
        NodeKind::InputValueDefinition,
        NodeKind::EnumTypeDefinition,
        NodeKind::EnumValueDefinition,
        NodeKind::InputObjectTypeDefinition,
        NodeKind::UnionTypeDefinition,
        NodeKind::ScalarTypeDefinition,
    ];

    pub const COUNT: usize = 11;

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// A position in the tree being walked.
///
/// Type references are part of the path (they count towards the walk depth)
/// but are not a [`NodeKind`] visitors can register for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Node {
    Document,
    SchemaDefinition,
    ObjectTypeDefinition(ObjectTypeDefinitionId),
    InterfaceTypeDefinition(InterfaceTypeDefinitionId),
    FieldDefinition(FieldDefinitionId),
    InputValueDefinition(InputValueDefinitionId),
    EnumTypeDefinition(EnumTypeDefinitionId),
    EnumValueDefinition(EnumValueDefinitionId),
    InputObjectTypeDefinition(InputObjectTypeDefinitionId),
    UnionTypeDefinition(UnionTypeDefinitionId),
    ScalarTypeDefinition(ScalarTypeDefinitionId),
    TypeRef(TypeRefId),
}
impl Node {
    pub fn kind(&self) -> Option<NodeKind> {
        Some(match self {
            Self::Document => NodeKind::Document,
            Self::SchemaDefinition => NodeKind::SchemaDefinition,
            Self::ObjectTypeDefinition(_) => NodeKind::ObjectTypeDefinition,
            Self::InterfaceTypeDefinition(_) => NodeKind::InterfaceTypeDefinition,
            Self::FieldDefinition(_) => NodeKind::FieldDefinition,
            Self::InputValueDefinition(_) => NodeKind::InputValueDefinition,
            Self::EnumTypeDefinition(_) => NodeKind::EnumTypeDefinition,
            Self::EnumValueDefinition(_) => NodeKind::EnumValueDefinition,
            Self::InputObjectTypeDefinition(_) => NodeKind::InputObjectTypeDefinition,
            Self::UnionTypeDefinition(_) => NodeKind::UnionTypeDefinition,
            Self::ScalarTypeDefinition(_) => NodeKind::ScalarTypeDefinition,
            Self::TypeRef(_) => return None,
        })
    }

    /// The name this node contributes to a human-readable path, if any.
    ///
    /// Returns `None` for the document root, for type references, and for
    /// handles `document` does not recognize.
    pub fn name<'doc>(&self, document: &'doc Document) -> Option<&'doc str> {
        match self {
            Self::Document | Self::TypeRef(_) => None,
            Self::SchemaDefinition => Some("schema"),
            Self::ObjectTypeDefinition(id) =>
                document.object_type_definition_name(*id).ok(),
            Self::InterfaceTypeDefinition(id) =>
                document.interface_type_definition_name(*id).ok(),
            Self::FieldDefinition(id) =>
                document.field_definition_name(*id).ok(),
            Self::InputValueDefinition(id) =>
                document.input_value_definition_name(*id).ok(),
            Self::EnumTypeDefinition(id) =>
                document.enum_type_definition(*id).ok().map(|def| def.name()),
            Self::EnumValueDefinition(id) =>
                document.enum_value_definition_name(*id).ok(),
            Self::InputObjectTypeDefinition(id) =>
                document.input_object_type_definition(*id).ok().map(|def| def.name()),
            Self::UnionTypeDefinition(id) =>
                document.union_type_definition(*id).ok().map(|def| def.name()),
            Self::ScalarTypeDefinition(id) =>
                document.scalar_type_definition(*id).ok().map(|def| def.name()),
        }
    }
}
