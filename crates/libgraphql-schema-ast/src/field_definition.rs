use crate::DirectiveAnnotation;
use crate::InputValueDefinitionId;
use crate::InterfaceTypeDefinitionId;
use crate::ObjectTypeDefinitionId;
use crate::TypeRefId;

/// The type definition a [`FieldDefinition`] was attached to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldOwner {
    Interface(InterfaceTypeDefinitionId),
    Object(ObjectTypeDefinitionId),
}

/// A field defined on an object type or interface type.
///
/// See
/// [Field Definitions](https://spec.graphql.org/October2021/#FieldsDefinition)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub(crate) arguments: Vec<InputValueDefinitionId>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) owner: Option<FieldOwner>,
    pub(crate) type_ref: TypeRefId,
}
impl FieldDefinition {
    pub fn arguments(&self) -> &[InputValueDefinitionId] {
        self.arguments.as_slice()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The type this field was attached to, or `None` while the field has
    /// been imported but not yet placed on an object or interface type.
    pub fn owner(&self) -> Option<FieldOwner> {
        self.owner
    }

    pub fn type_ref(&self) -> TypeRefId {
        self.type_ref
    }
}
