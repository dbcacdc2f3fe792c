use crate::DirectiveAnnotation;
use crate::EnumTypeDefinitionId;

/// A single value declared by an enum type.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub(crate) description: Option<String>,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) owner: Option<EnumTypeDefinitionId>,
}
impl EnumValueDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[DirectiveAnnotation] {
        self.directives.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn owner(&self) -> Option<EnumTypeDefinitionId> {
        self.owner
    }
}
