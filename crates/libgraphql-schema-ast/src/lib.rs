//! An in-memory model of GraphQL type-system documents.
//!
//! A [`Document`] owns every node in flat arena tables and hands out small
//! `Copy` handles ([`FieldDefinitionId`], [`TypeRefId`], ...) that stay valid
//! for as long as the document lives. Documents are populated either through
//! the import API on [`Document`] or by lowering a
//! [`graphql_parser`] schema AST via [`parse_schema`] /
//! [`Document::from_ast`]. Once built, a document is only read, so a shared
//! `&Document` can be walked from many threads at once.

mod directive_annotation;
mod document;
mod document_error;
mod enum_value_definition;
mod field_definition;
mod from_ast;
mod ids;
mod input_value_definition;
mod schema_definition;
mod type_definition;
mod type_ref;
mod value;

pub use directive_annotation::DirectiveAnnotation;
pub use document::Document;
pub use document_error::DocumentError;
pub use enum_value_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use field_definition::FieldOwner;
pub use from_ast::parse_schema;
pub use from_ast::SchemaParseError;
pub use ids::EnumTypeDefinitionId;
pub use ids::EnumValueDefinitionId;
pub use ids::FieldDefinitionId;
pub use ids::InputObjectTypeDefinitionId;
pub use ids::InputValueDefinitionId;
pub use ids::InterfaceTypeDefinitionId;
pub use ids::ObjectTypeDefinitionId;
pub use ids::ScalarTypeDefinitionId;
pub use ids::TypeRefId;
pub use ids::UnionTypeDefinitionId;
pub use input_value_definition::InputValueDefinition;
pub use input_value_definition::InputValueOwner;
pub use schema_definition::SchemaDefinition;
pub use type_definition::EnumTypeDefinition;
pub use type_definition::InputObjectTypeDefinition;
pub use type_definition::InterfaceTypeDefinition;
pub use type_definition::ObjectTypeDefinition;
pub use type_definition::ScalarTypeDefinition;
pub use type_definition::TypeDefinitionId;
pub use type_definition::UnionTypeDefinition;
pub use type_ref::TypeRef;
pub use value::Value;

#[cfg(test)]
mod tests;
