//! Lowering from a `graphql_parser` schema AST into a [`Document`].
//!
//! Everything goes through the public import API, so a parsed document and a
//! hand-built one with the same definitions are indistinguishable to
//! readers.

use crate::DirectiveAnnotation;
use crate::Document;
use crate::DocumentError;
use crate::TypeRefId;
use crate::Value;
use graphql_parser::schema as gp;

type Result<T> = std::result::Result<T, SchemaParseError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SchemaParseError {
    #[error("schema parse error: {0}")]
    Parse(String),

    #[error("{line}:{column}: {err}")]
    InvalidDefinition {
        line: usize,
        column: usize,
        err: DocumentError,
    },

    #[error("{line}:{column}: integer value `{value}` does not fit in 64 bits")]
    IntValueOutOfRange {
        line: usize,
        column: usize,
        value: String,
    },

    #[error("{line}:{column}: variable `${name}` used in a constant value")]
    VariableInConstValue {
        line: usize,
        column: usize,
        name: String,
    },
}

/// Parse SDL text with `graphql_parser` and lower it into a [`Document`].
pub fn parse_schema(source: &str) -> Result<Document> {
    let ast_doc = gp::parse_schema::<String>(source)
        .map_err(|err| SchemaParseError::Parse(err.to_string()))?;
    Document::from_ast(&ast_doc)
}

impl Document {
    /// Lower a parsed schema document, preserving declaration order.
    ///
    /// Type extensions and directive definitions have no counterpart in the
    /// model and are skipped.
    pub fn from_ast(ast_doc: &gp::Document<'_, String>) -> Result<Self> {
        let mut doc = Document::new();
        for def in &ast_doc.definitions {
            match def {
                gp::Definition::SchemaDefinition(schema_def) => {
                    doc.import_schema_definition(
                        schema_def.query.as_deref(),
                        schema_def.mutation.as_deref(),
                        schema_def.subscription.as_deref(),
                    ).map_err(|err| at(schema_def.position, err))?;
                },

                gp::Definition::TypeDefinition(type_def) =>
                    doc.import_ast_type_definition(type_def)?,

                gp::Definition::TypeExtension(_) => log::debug!(
                    "Skipping type extension; extensions are not part of \
                    the document model.",
                ),

                gp::Definition::DirectiveDefinition(directive_def) => log::debug!(
                    "Skipping definition of directive `@{}`.",
                    directive_def.name,
                ),
            }
        }
        Ok(doc)
    }

    fn import_ast_type_definition(
        &mut self,
        type_def: &gp::TypeDefinition<'_, String>,
    ) -> Result<()> {
        match type_def {
            gp::TypeDefinition::Object(obj) => {
                let fields = self.import_ast_fields(&obj.fields)?;
                let interfaces = obj.implements_interfaces
                    .iter()
                    .map(|name| self.add_named_type(name))
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|err| at(obj.position, err))?;
                self.import_object_type_definition(
                    &obj.name,
                    obj.description.as_deref(),
                    &fields,
                    &interfaces,
                ).map_err(|err| at(obj.position, err))?;
            },

            gp::TypeDefinition::Interface(iface) => {
                let fields = self.import_ast_fields(&iface.fields)?;
                self.import_interface_type_definition(
                    &iface.name,
                    iface.description.as_deref(),
                    &fields,
                ).map_err(|err| at(iface.position, err))?;
            },

            gp::TypeDefinition::Enum(enum_def) => {
                let mut values = Vec::with_capacity(enum_def.values.len());
                for value in &enum_def.values {
                    let directives =
                        ast_directives(value.position, &value.directives)?;
                    values.push(self.import_enum_value_definition(
                        &value.name,
                        value.description.as_deref(),
                        directives,
                    ).map_err(|err| at(value.position, err))?);
                }
                self.import_enum_type_definition(
                    &enum_def.name,
                    enum_def.description.as_deref(),
                    &values,
                ).map_err(|err| at(enum_def.position, err))?;
            },

            gp::TypeDefinition::InputObject(inputobj) => {
                let fields = self.import_ast_input_values(&inputobj.fields)?;
                self.import_input_object_type_definition(
                    &inputobj.name,
                    inputobj.description.as_deref(),
                    &fields,
                ).map_err(|err| at(inputobj.position, err))?;
            },

            gp::TypeDefinition::Union(union_def) => {
                let members = union_def.types
                    .iter()
                    .map(|name| self.add_named_type(name))
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|err| at(union_def.position, err))?;
                self.import_union_type_definition(
                    &union_def.name,
                    union_def.description.as_deref(),
                    &members,
                ).map_err(|err| at(union_def.position, err))?;
            },

            gp::TypeDefinition::Scalar(scalar) => {
                self.import_scalar_type_definition(
                    &scalar.name,
                    scalar.description.as_deref(),
                ).map_err(|err| at(scalar.position, err))?;
            },
        }
        Ok(())
    }

    fn import_ast_fields(
        &mut self,
        fields: &[gp::Field<'_, String>],
    ) -> Result<Vec<crate::FieldDefinitionId>> {
        let mut field_ids = Vec::with_capacity(fields.len());
        for field in fields {
            let arguments = self.import_ast_input_values(&field.arguments)?;
            let type_ref = self.import_ast_type(&field.field_type)
                .map_err(|err| at(field.position, err))?;
            let directives = ast_directives(field.position, &field.directives)?;
            field_ids.push(self.import_field_definition(
                &field.name,
                field.description.as_deref(),
                type_ref,
                &arguments,
                directives,
            ).map_err(|err| at(field.position, err))?);
        }
        Ok(field_ids)
    }

    fn import_ast_input_values(
        &mut self,
        input_values: &[gp::InputValue<'_, String>],
    ) -> Result<Vec<crate::InputValueDefinitionId>> {
        let mut input_value_ids = Vec::with_capacity(input_values.len());
        for input_value in input_values {
            let type_ref = self.import_ast_type(&input_value.value_type)
                .map_err(|err| at(input_value.position, err))?;
            let default_value = input_value.default_value
                .as_ref()
                .map(|value| ast_value(input_value.position, value))
                .transpose()?;
            let directives =
                ast_directives(input_value.position, &input_value.directives)?;
            input_value_ids.push(self.import_input_value_definition_with_directives(
                &input_value.name,
                input_value.description.as_deref(),
                type_ref,
                default_value,
                directives,
            ).map_err(|err| at(input_value.position, err))?);
        }
        Ok(input_value_ids)
    }

    fn import_ast_type(
        &mut self,
        ast_type: &gp::Type<'_, String>,
    ) -> std::result::Result<TypeRefId, DocumentError> {
        match ast_type {
            gp::Type::NamedType(name) => self.add_named_type(name),
            gp::Type::ListType(inner) => {
                let inner = self.import_ast_type(inner)?;
                self.add_list_type(inner)
            },
            gp::Type::NonNullType(inner) => {
                let inner = self.import_ast_type(inner)?;
                self.add_non_null_type(inner)
            },
        }
    }
}

fn ast_directives(
    position: graphql_parser::Pos,
    directives: &[gp::Directive<'_, String>],
) -> Result<Vec<DirectiveAnnotation>> {
    directives.iter().map(|directive| -> Result<DirectiveAnnotation> {
        let mut annotation = DirectiveAnnotation::new(directive.name.as_str());
        for (arg_name, arg_value) in &directive.arguments {
            annotation = annotation.with_argument(
                arg_name.as_str(),
                ast_value(position, arg_value)?,
            );
        }
        Ok(annotation)
    }).collect()
}

fn ast_value(
    position: graphql_parser::Pos,
    value: &gp::Value<'_, String>,
) -> Result<Value> {
    Ok(match value {
        gp::Value::Boolean(value) => Value::Boolean(*value),
        gp::Value::Enum(value) => Value::Enum(value.to_string()),
        gp::Value::Float(value) => Value::Float(*value),
        gp::Value::Int(number) => Value::Int(number.as_i64().ok_or_else(||
            SchemaParseError::IntValueOutOfRange {
                line: position.line,
                column: position.column,
                value: format!("{number:?}"),
            }
        )?),
        gp::Value::List(values) => Value::List(
            values.iter()
                .map(|value| ast_value(position, value))
                .collect::<Result<_>>()?,
        ),
        gp::Value::Null => Value::Null,
        gp::Value::Object(entries) => Value::Object(
            entries.iter()
                .map(|(key, value)| -> Result<(String, Value)> {
                    Ok((key.to_string(), ast_value(position, value)?))
                })
                .collect::<Result<_>>()?,
        ),
        gp::Value::String(value) => Value::String(value.to_string()),
        gp::Value::Variable(name) => return Err(SchemaParseError::VariableInConstValue {
            line: position.line,
            column: position.column,
            name: name.to_string(),
        }),
    })
}

fn at(position: graphql_parser::Pos, err: DocumentError) -> SchemaParseError {
    SchemaParseError::InvalidDefinition {
        line: position.line,
        column: position.column,
        err,
    }
}
