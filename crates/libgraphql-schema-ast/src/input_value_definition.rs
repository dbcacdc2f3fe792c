use crate::DirectiveAnnotation;
use crate::FieldDefinitionId;
use crate::InputObjectTypeDefinitionId;
use crate::TypeRefId;
use crate::Value;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputValueOwner {
    /// The input value is an argument of this field.
    Field(FieldDefinitionId),

    /// The input value is a field of this input object type.
    InputObject(InputObjectTypeDefinitionId),
}

/// A field argument or an input-object field.
///
/// See
/// [Input Values](https://spec.graphql.org/October2021/#InputValueDefinition)
/// in the GraphQL spec.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub(crate) default_value: Option<Value>,
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) owner: Option<InputValueOwner>,
    pub(crate) type_ref: TypeRefId,
}
impl InputValueDefinition {
    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
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

    pub fn owner(&self) -> Option<InputValueOwner> {
        self.owner
    }

    pub fn type_ref(&self) -> TypeRefId {
        self.type_ref
    }
}
