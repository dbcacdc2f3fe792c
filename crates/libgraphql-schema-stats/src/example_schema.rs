use libgraphql_schema_ast::Document;
use libgraphql_schema_ast::DocumentError;
use libgraphql_schema_ast::FieldDefinitionId;
use libgraphql_schema_ast::TypeRefId;

type Result<T> = std::result::Result<T, DocumentError>;

/// The SDL equivalent of [`build_example_document()`].
pub const SCHEMA_EXAMPLE: &str = r#"schema {
    query: Query
}

type Query {
    droid: Droid!
    hero(id: ID!): Character
}

interface Character {
    name: String!
}

type Droid implements Character {
    name: String!
}"#;

/// Builds [`SCHEMA_EXAMPLE`] through the import API alone, without parsing
/// any text.
pub fn build_example_document() -> Result<Document> {
    let mut builder = ExampleSchemaBuilder::new()?;
    builder.import_schema_definition()?;
    builder.import_query_definition()?;
    builder.import_character_definition()?;
    builder.import_droid_definition()?;
    Ok(builder.doc)
}

/// Type references shared by several definitions of the example schema.
struct TypeRefs {
    character: TypeRefId,
    droid_non_null: TypeRefId,
    id_non_null: TypeRefId,
    string_non_null: TypeRefId,
}

struct ExampleSchemaBuilder {
    doc: Document,
    type_refs: TypeRefs,
}
impl ExampleSchemaBuilder {
    fn new() -> Result<Self> {
        let mut doc = Document::new();
        let type_refs = TypeRefs {
            character: doc.add_named_type("Character")?,
            string_non_null: doc.add_non_null_named_type("String")?,
            id_non_null: doc.add_non_null_named_type("ID")?,
            droid_non_null: doc.add_non_null_named_type("Droid")?,
        };
        Ok(Self { doc, type_refs })
    }

    fn import_schema_definition(&mut self) -> Result<()> {
        self.doc.import_schema_definition(Some("Query"), None, None)
    }

    fn import_query_definition(&mut self) -> Result<()> {
        let droid = self.import_query_droid_field_definition()?;
        let hero = self.import_query_hero_field_definition()?;
        self.doc.import_object_type_definition("Query", None, &[droid, hero], &[])?;
        Ok(())
    }

    fn import_query_droid_field_definition(&mut self) -> Result<FieldDefinitionId> {
        self.doc.import_field_definition(
            "droid",
            None,
            self.type_refs.droid_non_null,
            &[],
            vec![],
        )
    }

    fn import_query_hero_field_definition(&mut self) -> Result<FieldDefinitionId> {
        let id_arg = self.doc.import_input_value_definition(
            "id",
            None,
            self.type_refs.id_non_null,
            None,
        )?;
        self.doc.import_field_definition(
            "hero",
            None,
            self.type_refs.character,
            &[id_arg],
            vec![],
        )
    }

    /// `Character` and `Droid` each own a separate `name` field definition.
    fn import_name_field_definition(&mut self) -> Result<FieldDefinitionId> {
        self.doc.import_field_definition(
            "name",
            None,
            self.type_refs.string_non_null,
            &[],
            vec![],
        )
    }

    fn import_character_definition(&mut self) -> Result<()> {
        let name = self.import_name_field_definition()?;
        self.doc.import_interface_type_definition("Character", None, &[name])?;
        Ok(())
    }

    fn import_droid_definition(&mut self) -> Result<()> {
        let name = self.import_name_field_definition()?;
        self.doc.import_object_type_definition(
            "Droid",
            None,
            &[name],
            &[self.type_refs.character],
        )?;
        Ok(())
    }
}
