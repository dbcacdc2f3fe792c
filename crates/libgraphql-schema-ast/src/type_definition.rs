use crate::EnumTypeDefinitionId;
use crate::EnumValueDefinitionId;
use crate::FieldDefinitionId;
use crate::InputObjectTypeDefinitionId;
use crate::InputValueDefinitionId;
use crate::InterfaceTypeDefinitionId;
use crate::ObjectTypeDefinitionId;
use crate::ScalarTypeDefinitionId;
use crate::TypeRefId;
use crate::UnionTypeDefinitionId;

/// Handle to any top-level type definition.
///
/// [`Document::type_definitions()`](crate::Document::type_definitions)
/// lists these in declaration order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeDefinitionId {
    Enum(EnumTypeDefinitionId),
    InputObject(InputObjectTypeDefinitionId),
    Interface(InterfaceTypeDefinitionId),
    Object(ObjectTypeDefinitionId),
    Scalar(ScalarTypeDefinitionId),
    Union(UnionTypeDefinitionId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) fields: Vec<FieldDefinitionId>,
    pub(crate) interfaces: Vec<TypeRefId>,
    pub(crate) name: String,
}
impl ObjectTypeDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &[FieldDefinitionId] {
        self.fields.as_slice()
    }

    /// Type references to the interfaces this type claims to implement.
    ///
    /// These are not checked for conformance.
    pub fn interfaces(&self) -> &[TypeRefId] {
        self.interfaces.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) fields: Vec<FieldDefinitionId>,
    pub(crate) name: String,
}
impl InterfaceTypeDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &[FieldDefinitionId] {
        self.fields.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: Vec<EnumValueDefinitionId>,
}
impl EnumTypeDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn values(&self) -> &[EnumValueDefinitionId] {
        self.values.as_slice()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) fields: Vec<InputValueDefinitionId>,
    pub(crate) name: String,
}
impl InputObjectTypeDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &[InputValueDefinitionId] {
        self.fields.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) members: Vec<TypeRefId>,
    pub(crate) name: String,
}
impl UnionTypeDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn members(&self) -> &[TypeRefId] {
        self.members.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition {
    pub(crate) description: Option<String>,
    pub(crate) name: String,
}
impl ScalarTypeDefinition {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
