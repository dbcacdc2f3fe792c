use crate::DirectiveAnnotation;
use crate::DocumentError;
use crate::EnumTypeDefinition;
use crate::EnumTypeDefinitionId;
use crate::EnumValueDefinition;
use crate::EnumValueDefinitionId;
use crate::FieldDefinition;
use crate::FieldDefinitionId;
use crate::FieldOwner;
use crate::InputObjectTypeDefinition;
use crate::InputObjectTypeDefinitionId;
use crate::InputValueDefinition;
use crate::InputValueDefinitionId;
use crate::InputValueOwner;
use crate::InterfaceTypeDefinition;
use crate::InterfaceTypeDefinitionId;
use crate::ObjectTypeDefinition;
use crate::ObjectTypeDefinitionId;
use crate::ScalarTypeDefinition;
use crate::ScalarTypeDefinitionId;
use crate::SchemaDefinition;
use crate::TypeDefinitionId;
use crate::TypeRef;
use crate::TypeRefId;
use crate::UnionTypeDefinition;
use crate::UnionTypeDefinitionId;
use crate::Value;
use indexmap::IndexSet;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, DocumentError>;

/// Root owner of a GraphQL type-system document.
///
/// Every node lives in one of the document's tables and is referred to by a
/// handle. Import operations only ever append: a handle, once returned,
/// points at the same node for the lifetime of the document. The one piece
/// of state written after an import is the owner slot of a field, argument
/// or enum value, which is set exactly once when a parent definition adopts
/// it.
///
/// Type references are interned, so `add_named_type("String")` returns the
/// same [`TypeRefId`] every time it is called on one document, and likewise
/// for identical `NonNull`/`List` wrappers.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub(crate) enum_type_definitions: Vec<EnumTypeDefinition>,
    pub(crate) enum_value_definitions: Vec<EnumValueDefinition>,
    pub(crate) field_definitions: Vec<FieldDefinition>,
    pub(crate) input_object_type_definitions: Vec<InputObjectTypeDefinition>,
    pub(crate) input_value_definitions: Vec<InputValueDefinition>,
    pub(crate) interface_type_definitions: Vec<InterfaceTypeDefinition>,
    pub(crate) object_type_definitions: Vec<ObjectTypeDefinition>,
    pub(crate) scalar_type_definitions: Vec<ScalarTypeDefinition>,
    pub(crate) schema_definition: Option<SchemaDefinition>,
    pub(crate) type_definitions: Vec<TypeDefinitionId>,
    pub(crate) type_refs: IndexSet<TypeRef>,
    pub(crate) union_type_definitions: Vec<UnionTypeDefinition>,
}

// =========================================================
// Import API
// =========================================================

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a [`TypeRef::Named`] reference to `name`.
    pub fn add_named_type(&mut self, name: &str) -> Result<TypeRefId> {
        validate_name("type", name)?;
        Ok(self.intern_type_ref(TypeRef::Named(name.to_string())))
    }

    /// Wrap an existing type reference in [`TypeRef::NonNull`].
    ///
    /// `inner` must not itself be non-null: `String!!` is not valid GraphQL.
    pub fn add_non_null_type(&mut self, inner: TypeRefId) -> Result<TypeRefId> {
        if self.type_ref(inner)?.is_non_null() {
            return Err(DocumentError::NestedNonNull { type_ref: inner.0 });
        }
        Ok(self.intern_type_ref(TypeRef::NonNull(inner)))
    }

    /// Shorthand for `add_non_null_type(add_named_type(name)?)`.
    pub fn add_non_null_named_type(&mut self, name: &str) -> Result<TypeRefId> {
        let named = self.add_named_type(name)?;
        self.add_non_null_type(named)
    }

    /// Wrap an existing type reference in [`TypeRef::List`].
    pub fn add_list_type(&mut self, inner: TypeRefId) -> Result<TypeRefId> {
        self.type_ref(inner)?;
        Ok(self.intern_type_ref(TypeRef::List(inner)))
    }

    /// Append a type reference without checking that a wrapper's inner
    /// handle exists in this document.
    ///
    /// This exists for producers that lower a foreign arena wholesale and
    /// cannot guarantee the backwards-pointing invariant. Readers of such a
    /// document see [`DocumentError::UnresolvedTypeReference`] for chains
    /// that dangle or loop.
    pub fn import_type_ref_unchecked(&mut self, type_ref: TypeRef) -> TypeRefId {
        self.intern_type_ref(type_ref)
    }

    pub fn import_field_definition(
        &mut self,
        name: &str,
        description: Option<&str>,
        type_ref: TypeRefId,
        arguments: &[InputValueDefinitionId],
        directives: Vec<DirectiveAnnotation>,
    ) -> Result<FieldDefinitionId> {
        validate_name("field", name)?;
        self.type_ref(type_ref)?;
        self.check_unowned_input_values(arguments)?;

        let id = FieldDefinitionId(self.field_definitions.len());
        for arg in arguments {
            self.input_value_definitions[arg.0].owner =
                Some(InputValueOwner::Field(id));
        }
        self.field_definitions.push(FieldDefinition {
            arguments: arguments.to_vec(),
            description: description.map(str::to_string),
            directives,
            name: name.to_string(),
            owner: None,
            type_ref,
        });
        Ok(id)
    }

    pub fn import_input_value_definition(
        &mut self,
        name: &str,
        description: Option<&str>,
        type_ref: TypeRefId,
        default_value: Option<Value>,
    ) -> Result<InputValueDefinitionId> {
        self.import_input_value_definition_with_directives(
            name,
            description,
            type_ref,
            default_value,
            vec![],
        )
    }

    pub fn import_input_value_definition_with_directives(
        &mut self,
        name: &str,
        description: Option<&str>,
        type_ref: TypeRefId,
        default_value: Option<Value>,
        directives: Vec<DirectiveAnnotation>,
    ) -> Result<InputValueDefinitionId> {
        validate_name("input value", name)?;
        self.type_ref(type_ref)?;

        let id = InputValueDefinitionId(self.input_value_definitions.len());
        self.input_value_definitions.push(InputValueDefinition {
            default_value,
            description: description.map(str::to_string),
            directives,
            name: name.to_string(),
            owner: None,
            type_ref,
        });
        Ok(id)
    }

    pub fn import_enum_value_definition(
        &mut self,
        name: &str,
        description: Option<&str>,
        directives: Vec<DirectiveAnnotation>,
    ) -> Result<EnumValueDefinitionId> {
        validate_name("enum value", name)?;

        let id = EnumValueDefinitionId(self.enum_value_definitions.len());
        self.enum_value_definitions.push(EnumValueDefinition {
            description: description.map(str::to_string),
            directives,
            name: name.to_string(),
            owner: None,
        });
        Ok(id)
    }

    /// Define an object type owning `fields` (in the given order) and
    /// claiming to implement the interfaces referenced by `interfaces`.
    pub fn import_object_type_definition(
        &mut self,
        name: &str,
        description: Option<&str>,
        fields: &[FieldDefinitionId],
        interfaces: &[TypeRefId],
    ) -> Result<ObjectTypeDefinitionId> {
        validate_name("object type", name)?;
        self.check_unowned_fields(name, fields)?;
        for interface in interfaces {
            self.type_name(*interface)?;
        }

        let id = ObjectTypeDefinitionId(self.object_type_definitions.len());
        self.adopt_fields(fields, FieldOwner::Object(id));
        self.object_type_definitions.push(ObjectTypeDefinition {
            description: description.map(str::to_string),
            fields: fields.to_vec(),
            interfaces: interfaces.to_vec(),
            name: name.to_string(),
        });
        self.type_definitions.push(TypeDefinitionId::Object(id));
        Ok(id)
    }

    pub fn import_interface_type_definition(
        &mut self,
        name: &str,
        description: Option<&str>,
        fields: &[FieldDefinitionId],
    ) -> Result<InterfaceTypeDefinitionId> {
        validate_name("interface type", name)?;
        self.check_unowned_fields(name, fields)?;

        let id = InterfaceTypeDefinitionId(self.interface_type_definitions.len());
        self.adopt_fields(fields, FieldOwner::Interface(id));
        self.interface_type_definitions.push(InterfaceTypeDefinition {
            description: description.map(str::to_string),
            fields: fields.to_vec(),
            name: name.to_string(),
        });
        self.type_definitions.push(TypeDefinitionId::Interface(id));
        Ok(id)
    }

    pub fn import_enum_type_definition(
        &mut self,
        name: &str,
        description: Option<&str>,
        values: &[EnumValueDefinitionId],
    ) -> Result<EnumTypeDefinitionId> {
        validate_name("enum type", name)?;
        let mut seen = HashSet::new();
        for value in values {
            let value_def = self.enum_value_definition(*value)?;
            if value_def.owner.is_some() || !seen.insert(*value) {
                return Err(DocumentError::AlreadyOwned {
                    kind: EnumValueDefinitionId::KIND,
                    index: value.0,
                });
            }
        }

        let id = EnumTypeDefinitionId(self.enum_type_definitions.len());
        for value in values {
            self.enum_value_definitions[value.0].owner = Some(id);
        }
        self.enum_type_definitions.push(EnumTypeDefinition {
            description: description.map(str::to_string),
            name: name.to_string(),
            values: values.to_vec(),
        });
        self.type_definitions.push(TypeDefinitionId::Enum(id));
        Ok(id)
    }

    pub fn import_input_object_type_definition(
        &mut self,
        name: &str,
        description: Option<&str>,
        fields: &[InputValueDefinitionId],
    ) -> Result<InputObjectTypeDefinitionId> {
        validate_name("input object type", name)?;
        self.check_unowned_input_values(fields)?;

        let id = InputObjectTypeDefinitionId(self.input_object_type_definitions.len());
        for field in fields {
            self.input_value_definitions[field.0].owner =
                Some(InputValueOwner::InputObject(id));
        }
        self.input_object_type_definitions.push(InputObjectTypeDefinition {
            description: description.map(str::to_string),
            fields: fields.to_vec(),
            name: name.to_string(),
        });
        self.type_definitions.push(TypeDefinitionId::InputObject(id));
        Ok(id)
    }

    pub fn import_union_type_definition(
        &mut self,
        name: &str,
        description: Option<&str>,
        members: &[TypeRefId],
    ) -> Result<UnionTypeDefinitionId> {
        validate_name("union type", name)?;
        for member in members {
            self.type_name(*member)?;
        }

        let id = UnionTypeDefinitionId(self.union_type_definitions.len());
        self.union_type_definitions.push(UnionTypeDefinition {
            description: description.map(str::to_string),
            members: members.to_vec(),
            name: name.to_string(),
        });
        self.type_definitions.push(TypeDefinitionId::Union(id));
        Ok(id)
    }

    pub fn import_scalar_type_definition(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ScalarTypeDefinitionId> {
        validate_name("scalar type", name)?;

        let id = ScalarTypeDefinitionId(self.scalar_type_definitions.len());
        self.scalar_type_definitions.push(ScalarTypeDefinition {
            description: description.map(str::to_string),
            name: name.to_string(),
        });
        self.type_definitions.push(TypeDefinitionId::Scalar(id));
        Ok(id)
    }

    /// Record the root operation type names. `None` leaves that operation
    /// type unset.
    ///
    /// Fails with [`DocumentError::DuplicateSchemaDefinition`] if this
    /// document already has a schema definition.
    pub fn import_schema_definition(
        &mut self,
        query_type_name: Option<&str>,
        mutation_type_name: Option<&str>,
        subscription_type_name: Option<&str>,
    ) -> Result<()> {
        if self.schema_definition.is_some() {
            return Err(DocumentError::DuplicateSchemaDefinition);
        }
        for name in [query_type_name, mutation_type_name, subscription_type_name]
            .into_iter()
            .flatten() {
            validate_name("root operation type", name)?;
        }

        self.schema_definition = Some(SchemaDefinition {
            mutation_type_name: mutation_type_name.map(str::to_string),
            query_type_name: query_type_name.map(str::to_string),
            subscription_type_name: subscription_type_name.map(str::to_string),
        });
        Ok(())
    }

    fn adopt_fields(&mut self, fields: &[FieldDefinitionId], owner: FieldOwner) {
        for field in fields {
            self.field_definitions[field.0].owner = Some(owner);
        }
    }

    fn check_unowned_fields(
        &self,
        type_name: &str,
        fields: &[FieldDefinitionId],
    ) -> Result<()> {
        let mut seen_ids = HashSet::new();
        let mut seen_names = HashSet::new();
        for field in fields {
            let field_def = self.field_definition(*field)?;
            if field_def.owner.is_some() || !seen_ids.insert(*field) {
                return Err(DocumentError::AlreadyOwned {
                    kind: FieldDefinitionId::KIND,
                    index: field.0,
                });
            }
            if !seen_names.insert(field_def.name.as_str()) {
                return Err(DocumentError::DuplicateFieldName {
                    field_name: field_def.name.to_string(),
                    type_name: type_name.to_string(),
                });
            }
        }
        Ok(())
    }

    fn check_unowned_input_values(
        &self,
        input_values: &[InputValueDefinitionId],
    ) -> Result<()> {
        let mut seen = HashSet::new();
        for input_value in input_values {
            let input_value_def = self.input_value_definition(*input_value)?;
            if input_value_def.owner.is_some() || !seen.insert(*input_value) {
                return Err(DocumentError::AlreadyOwned {
                    kind: InputValueDefinitionId::KIND,
                    index: input_value.0,
                });
            }
        }
        Ok(())
    }

    fn intern_type_ref(&mut self, type_ref: TypeRef) -> TypeRefId {
        let (index, _) = self.type_refs.insert_full(type_ref);
        TypeRefId(index)
    }
}

// =========================================================
// Read accessors
// =========================================================

impl Document {
    pub fn type_ref(&self, id: TypeRefId) -> Result<&TypeRef> {
        self.type_refs.get_index(id.0).ok_or(DocumentError::InvalidHandle {
            kind: TypeRefId::KIND,
            index: id.0,
        })
    }

    /// Follow `NonNull`/`List` wrappers from `id` down to the innermost
    /// [`TypeRef::Named`] reference and return its handle.
    ///
    /// The number of steps is bounded by the size of the type-reference
    /// table, so a looping chain fails with
    /// [`DocumentError::UnresolvedTypeReference`] instead of spinning.
    pub fn named_type_ref(&self, id: TypeRefId) -> Result<TypeRefId> {
        let mut current_id = id;
        let mut current = self.type_ref(id)?;
        for _ in 0..self.type_refs.len() {
            match current {
                TypeRef::Named(_) => return Ok(current_id),
                TypeRef::NonNull(inner) | TypeRef::List(inner) => {
                    current_id = *inner;
                    current = self.type_refs.get_index(inner.0).ok_or(
                        DocumentError::UnresolvedTypeReference { type_ref: id.0 },
                    )?;
                },
            }
        }
        Err(DocumentError::UnresolvedTypeReference { type_ref: id.0 })
    }

    /// The name of the type `id` ultimately refers to, unwrapping any
    /// `NonNull`/`List` wrappers.
    pub fn type_name(&self, id: TypeRefId) -> Result<&str> {
        let named_id = self.named_type_ref(id)?;
        match self.type_ref(named_id)? {
            TypeRef::Named(name) => Ok(name.as_str()),
            _ => Err(DocumentError::UnresolvedTypeReference { type_ref: id.0 }),
        }
    }

    /// Render a type reference the way it is written in SDL, e.g.
    /// `[Character!]!`.
    pub fn type_to_graphql_string(&self, id: TypeRefId) -> Result<String> {
        let mut wrappers = vec![];
        let named_id = self.named_type_ref(id)?;
        let mut current_id = id;
        while current_id != named_id {
            let current = self.type_ref(current_id)?;
            wrappers.push(current.is_list());
            current_id = current.inner().ok_or(
                DocumentError::UnresolvedTypeReference { type_ref: id.0 },
            )?;
        }

        let mut rendered = self.type_name(named_id)?.to_string();
        for is_list in wrappers.into_iter().rev() {
            rendered = if is_list {
                format!("[{rendered}]")
            } else {
                format!("{rendered}!")
            };
        }
        Ok(rendered)
    }

    pub fn type_ref_count(&self) -> usize {
        self.type_refs.len()
    }

    /// All top-level type definitions in declaration order.
    pub fn type_definitions(&self) -> &[TypeDefinitionId] {
        self.type_definitions.as_slice()
    }

    pub fn type_definition_name(&self, id: TypeDefinitionId) -> Result<&str> {
        Ok(match id {
            TypeDefinitionId::Enum(id) => self.enum_type_definition(id)?.name(),
            TypeDefinitionId::InputObject(id) => self.input_object_type_definition(id)?.name(),
            TypeDefinitionId::Interface(id) => self.interface_type_definition(id)?.name(),
            TypeDefinitionId::Object(id) => self.object_type_definition(id)?.name(),
            TypeDefinitionId::Scalar(id) => self.scalar_type_definition(id)?.name(),
            TypeDefinitionId::Union(id) => self.union_type_definition(id)?.name(),
        })
    }

    pub fn schema_definition(&self) -> Option<&SchemaDefinition> {
        self.schema_definition.as_ref()
    }

    pub fn field_definition(&self, id: FieldDefinitionId) -> Result<&FieldDefinition> {
        lookup(&self.field_definitions, FieldDefinitionId::KIND, id.0)
    }

    pub fn field_definition_name(&self, id: FieldDefinitionId) -> Result<&str> {
        Ok(self.field_definition(id)?.name())
    }

    pub fn field_definition_type(&self, id: FieldDefinitionId) -> Result<TypeRefId> {
        Ok(self.field_definition(id)?.type_ref())
    }

    pub fn field_definition_arguments(
        &self,
        id: FieldDefinitionId,
    ) -> Result<&[InputValueDefinitionId]> {
        Ok(self.field_definition(id)?.arguments())
    }

    pub fn field_definition_count(&self) -> usize {
        self.field_definitions.len()
    }

    pub fn input_value_definition(
        &self,
        id: InputValueDefinitionId,
    ) -> Result<&InputValueDefinition> {
        lookup(&self.input_value_definitions, InputValueDefinitionId::KIND, id.0)
    }

    pub fn input_value_definition_name(&self, id: InputValueDefinitionId) -> Result<&str> {
        Ok(self.input_value_definition(id)?.name())
    }

    pub fn input_value_definition_type(&self, id: InputValueDefinitionId) -> Result<TypeRefId> {
        Ok(self.input_value_definition(id)?.type_ref())
    }

    pub fn enum_value_definition(
        &self,
        id: EnumValueDefinitionId,
    ) -> Result<&EnumValueDefinition> {
        lookup(&self.enum_value_definitions, EnumValueDefinitionId::KIND, id.0)
    }

    pub fn enum_value_definition_name(&self, id: EnumValueDefinitionId) -> Result<&str> {
        Ok(self.enum_value_definition(id)?.name())
    }

    pub fn object_type_definition(
        &self,
        id: ObjectTypeDefinitionId,
    ) -> Result<&ObjectTypeDefinition> {
        lookup(&self.object_type_definitions, ObjectTypeDefinitionId::KIND, id.0)
    }

    pub fn object_type_definition_name(&self, id: ObjectTypeDefinitionId) -> Result<&str> {
        Ok(self.object_type_definition(id)?.name())
    }

    /// Names of the interfaces an object type claims to implement, in
    /// declaration order.
    pub fn object_type_definition_interface_names(
        &self,
        id: ObjectTypeDefinitionId,
    ) -> Result<Vec<&str>> {
        self.object_type_definition(id)?
            .interfaces()
            .iter()
            .map(|interface| self.type_name(*interface))
            .collect()
    }

    pub fn interface_type_definition(
        &self,
        id: InterfaceTypeDefinitionId,
    ) -> Result<&InterfaceTypeDefinition> {
        lookup(&self.interface_type_definitions, InterfaceTypeDefinitionId::KIND, id.0)
    }

    pub fn interface_type_definition_name(&self, id: InterfaceTypeDefinitionId) -> Result<&str> {
        Ok(self.interface_type_definition(id)?.name())
    }

    pub fn enum_type_definition(
        &self,
        id: EnumTypeDefinitionId,
    ) -> Result<&EnumTypeDefinition> {
        lookup(&self.enum_type_definitions, EnumTypeDefinitionId::KIND, id.0)
    }

    pub fn input_object_type_definition(
        &self,
        id: InputObjectTypeDefinitionId,
    ) -> Result<&InputObjectTypeDefinition> {
        lookup(&self.input_object_type_definitions, InputObjectTypeDefinitionId::KIND, id.0)
    }

    pub fn union_type_definition(
        &self,
        id: UnionTypeDefinitionId,
    ) -> Result<&UnionTypeDefinition> {
        lookup(&self.union_type_definitions, UnionTypeDefinitionId::KIND, id.0)
    }

    pub fn scalar_type_definition(
        &self,
        id: ScalarTypeDefinitionId,
    ) -> Result<&ScalarTypeDefinition> {
        lookup(&self.scalar_type_definitions, ScalarTypeDefinitionId::KIND, id.0)
    }
}

fn lookup<'a, T>(table: &'a [T], kind: &'static str, index: usize) -> Result<&'a T> {
    table.get(index).ok_or(DocumentError::InvalidHandle { kind, index })
}

/// https://spec.graphql.org/October2021/#Name
fn validate_name(kind: &'static str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let is_valid = match chars.next() {
        Some(first) =>
            (first == '_' || first.is_ascii_alphabetic())
                && chars.all(|c| c == '_' || c.is_ascii_alphanumeric()),
        None => false,
    };

    if is_valid {
        Ok(())
    } else {
        Err(DocumentError::InvalidName {
            kind,
            name: name.to_string(),
        })
    }
}
