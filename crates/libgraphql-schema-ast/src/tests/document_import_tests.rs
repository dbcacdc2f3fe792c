use crate::Document;
use crate::DocumentError;
use crate::FieldOwner;
use crate::InputValueOwner;
use crate::TypeDefinitionId;
use crate::TypeRef;
use crate::Value;

type Result<T> = std::result::Result<T, DocumentError>;

mod type_refs {
    use super::*;

    #[test]
    fn named_types_are_interned_by_name() -> Result<()> {
        let mut doc = Document::new();
        let string1 = doc.add_named_type("String")?;
        let int = doc.add_named_type("Int")?;
        let string2 = doc.add_named_type("String")?;

        assert_eq!(string1, string2);
        assert_ne!(string1, int);
        assert_eq!(doc.type_ref_count(), 2);
        Ok(())
    }

    #[test]
    fn wrappers_are_interned_by_inner_handle() -> Result<()> {
        let mut doc = Document::new();
        let non_null1 = doc.add_non_null_named_type("ID")?;
        let non_null2 = doc.add_non_null_named_type("ID")?;
        let named = doc.add_named_type("ID")?;
        let list = doc.add_list_type(named)?;

        assert_eq!(non_null1, non_null2);
        assert_eq!(doc.type_ref(non_null1)?, &TypeRef::NonNull(named));
        assert_eq!(doc.type_ref(list)?, &TypeRef::List(named));
        assert_ne!(list, non_null1);
        Ok(())
    }

    #[test]
    fn empty_type_name_is_rejected() {
        let mut doc = Document::new();
        assert_eq!(
            doc.add_named_type(""),
            Err(DocumentError::InvalidName {
                kind: "type",
                name: "".to_string(),
            }),
        );
        assert_eq!(doc.type_ref_count(), 0);
    }

    #[test]
    fn malformed_type_name_is_rejected() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.add_named_type("1Character"),
            Err(DocumentError::InvalidName { .. }),
        ));
        assert!(matches!(
            doc.add_named_type("Char acter"),
            Err(DocumentError::InvalidName { .. }),
        ));
    }

    #[test]
    fn wrapping_foreign_handle_is_rejected() -> Result<()> {
        let mut other_doc = Document::new();
        other_doc.add_named_type("A")?;
        other_doc.add_named_type("B")?;
        let foreign = other_doc.add_named_type("C")?;

        let mut doc = Document::new();
        assert_eq!(
            doc.add_non_null_type(foreign),
            Err(DocumentError::InvalidHandle {
                kind: "type reference",
                index: 2,
            }),
        );
        assert_eq!(
            doc.add_list_type(foreign),
            Err(DocumentError::InvalidHandle {
                kind: "type reference",
                index: 2,
            }),
        );
        Ok(())
    }

    #[test]
    fn non_null_of_non_null_is_rejected() -> Result<()> {
        let mut doc = Document::new();
        let string_non_null = doc.add_non_null_named_type("String")?;
        let type_ref_count = doc.type_ref_count();

        assert_eq!(
            doc.add_non_null_type(string_non_null),
            Err(DocumentError::NestedNonNull {
                type_ref: type_ref_count - 1,
            }),
        );
        assert_eq!(doc.type_ref_count(), type_ref_count);

        // A list in between makes it legal again: `[String!]!`.
        let list = doc.add_list_type(string_non_null)?;
        doc.add_non_null_type(list)?;
        Ok(())
    }
}

mod definitions {
    use super::*;

    #[test]
    fn import_object_type_preserves_field_order() -> Result<()> {
        let mut doc = Document::new();
        let string_type = doc.add_non_null_named_type("String")?;
        let character_type = doc.add_named_type("Character")?;

        let name = doc.import_field_definition("name", None, string_type, &[], vec![])?;
        let nickname = doc.import_field_definition("nickname", None, string_type, &[], vec![])?;
        let droid = doc.import_object_type_definition(
            "Droid",
            Some("A mechanical creature."),
            &[nickname, name],
            &[character_type],
        )?;

        let droid_def = doc.object_type_definition(droid)?;
        assert_eq!(droid_def.name(), "Droid");
        assert_eq!(droid_def.description(), Some("A mechanical creature."));
        assert_eq!(droid_def.fields(), &[nickname, name]);
        assert_eq!(doc.object_type_definition_interface_names(droid)?, vec!["Character"]);
        assert_eq!(doc.field_definition(name)?.owner(), Some(FieldOwner::Object(droid)));
        assert_eq!(doc.type_definitions(), &[TypeDefinitionId::Object(droid)]);
        Ok(())
    }

    #[test]
    fn import_field_definition_does_not_attach_owner() -> Result<()> {
        let mut doc = Document::new();
        let string_type = doc.add_named_type("String")?;
        let field = doc.import_field_definition("name", None, string_type, &[], vec![])?;

        assert_eq!(doc.field_definition(field)?.owner(), None);
        assert!(doc.type_definitions().is_empty());
        Ok(())
    }

    #[test]
    fn arguments_are_owned_by_their_field() -> Result<()> {
        let mut doc = Document::new();
        let id_type = doc.add_non_null_named_type("ID")?;
        let character_type = doc.add_named_type("Character")?;
        let id_arg = doc.import_input_value_definition("id", None, id_type, None)?;
        let hero = doc.import_field_definition("hero", None, character_type, &[id_arg], vec![])?;

        assert_eq!(doc.field_definition_arguments(hero)?, &[id_arg]);
        assert_eq!(
            doc.input_value_definition(id_arg)?.owner(),
            Some(InputValueOwner::Field(hero)),
        );
        Ok(())
    }

    #[test]
    fn field_cannot_be_attached_twice() -> Result<()> {
        let mut doc = Document::new();
        let string_type = doc.add_named_type("String")?;
        let name = doc.import_field_definition("name", None, string_type, &[], vec![])?;
        doc.import_interface_type_definition("Character", None, &[name])?;

        assert_eq!(
            doc.import_object_type_definition("Droid", None, &[name], &[]),
            Err(DocumentError::AlreadyOwned {
                kind: "field definition",
                index: name.index(),
            }),
        );
        // The failed import must not leave a partial definition behind.
        assert_eq!(doc.type_definitions().len(), 1);
        Ok(())
    }

    #[test]
    fn argument_cannot_be_shared_by_two_fields() -> Result<()> {
        let mut doc = Document::new();
        let id_type = doc.add_named_type("ID")?;
        let id_arg = doc.import_input_value_definition("id", None, id_type, None)?;
        doc.import_field_definition("droid", None, id_type, &[id_arg], vec![])?;

        assert!(matches!(
            doc.import_field_definition("human", None, id_type, &[id_arg], vec![]),
            Err(DocumentError::AlreadyOwned { kind: "input value definition", .. }),
        ));
        assert_eq!(doc.field_definition_count(), 1);
        Ok(())
    }

    #[test]
    fn duplicate_field_names_on_one_type_are_rejected() -> Result<()> {
        let mut doc = Document::new();
        let string_type = doc.add_named_type("String")?;
        let name1 = doc.import_field_definition("name", None, string_type, &[], vec![])?;
        let name2 = doc.import_field_definition("name", None, string_type, &[], vec![])?;

        assert_eq!(
            doc.import_object_type_definition("Human", None, &[name1, name2], &[]),
            Err(DocumentError::DuplicateFieldName {
                field_name: "name".to_string(),
                type_name: "Human".to_string(),
            }),
        );
        Ok(())
    }

    #[test]
    fn empty_field_name_is_rejected() -> Result<()> {
        let mut doc = Document::new();
        let string_type = doc.add_named_type("String")?;

        assert_eq!(
            doc.import_field_definition("", None, string_type, &[], vec![]),
            Err(DocumentError::InvalidName {
                kind: "field",
                name: "".to_string(),
            }),
        );
        Ok(())
    }

    #[test]
    fn foreign_field_handle_is_rejected() -> Result<()> {
        let mut other_doc = Document::new();
        let string_type = other_doc.add_named_type("String")?;
        let foreign = other_doc.import_field_definition("name", None, string_type, &[], vec![])?;

        let mut doc = Document::new();
        assert_eq!(
            doc.import_interface_type_definition("Character", None, &[foreign]),
            Err(DocumentError::InvalidHandle {
                kind: "field definition",
                index: 0,
            }),
        );
        Ok(())
    }

    #[test]
    fn enum_values_keep_declared_order() -> Result<()> {
        let mut doc = Document::new();
        let values = ["NEWHOPE", "EMPIRE", "JEDI"]
            .into_iter()
            .map(|name| doc.import_enum_value_definition(name, None, vec![]))
            .collect::<Result<Vec<_>>>()?;
        let episode = doc.import_enum_type_definition("Episode", None, &values)?;

        let names = doc.enum_type_definition(episode)?
            .values()
            .iter()
            .map(|value| doc.enum_value_definition_name(*value))
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(names, vec!["NEWHOPE", "EMPIRE", "JEDI"]);
        assert_eq!(doc.enum_value_definition(values[0])?.owner(), Some(episode));
        Ok(())
    }

    #[test]
    fn input_object_fields_keep_default_values() -> Result<()> {
        let mut doc = Document::new();
        let int_type = doc.add_non_null_named_type("Int")?;
        let string_type = doc.add_named_type("String")?;
        let stars = doc.import_input_value_definition("stars", None, int_type, Some(Value::Int(5)))?;
        let commentary = doc.import_input_value_definition("commentary", None, string_type, None)?;
        let review_input = doc.import_input_object_type_definition(
            "ReviewInput",
            None,
            &[stars, commentary],
        )?;

        assert_eq!(doc.input_object_type_definition(review_input)?.fields(), &[stars, commentary]);
        assert_eq!(doc.input_value_definition(stars)?.default_value(), Some(&Value::Int(5)));
        assert_eq!(doc.input_value_definition(commentary)?.default_value(), None);
        assert_eq!(
            doc.input_value_definition(stars)?.owner(),
            Some(InputValueOwner::InputObject(review_input)),
        );
        Ok(())
    }

    #[test]
    fn type_definitions_follow_declaration_order() -> Result<()> {
        let mut doc = Document::new();
        let human_type = doc.add_named_type("Human")?;
        let search_result = doc.import_union_type_definition("SearchResult", None, &[human_type])?;
        let date = doc.import_scalar_type_definition("Date", None)?;
        let query = doc.import_object_type_definition("Query", None, &[], &[])?;

        assert_eq!(doc.type_definitions(), &[
            TypeDefinitionId::Union(search_result),
            TypeDefinitionId::Scalar(date),
            TypeDefinitionId::Object(query),
        ]);
        let names = doc.type_definitions()
            .iter()
            .map(|type_def| doc.type_definition_name(*type_def))
            .collect::<Result<Vec<_>>>()?;
        assert_eq!(names, vec!["SearchResult", "Date", "Query"]);
        Ok(())
    }
}

mod schema_definition {
    use super::*;

    #[test]
    fn import_schema_definition_records_root_types() -> Result<()> {
        let mut doc = Document::new();
        doc.import_schema_definition(Some("Query"), None, Some("Subscription"))?;

        let schema_def = doc.schema_definition().expect("schema definition was imported");
        assert_eq!(schema_def.query_type_name(), Some("Query"));
        assert_eq!(schema_def.mutation_type_name(), None);
        assert_eq!(schema_def.subscription_type_name(), Some("Subscription"));
        Ok(())
    }

    #[test]
    fn second_schema_definition_is_rejected() -> Result<()> {
        let mut doc = Document::new();
        doc.import_schema_definition(Some("Query"), None, None)?;

        assert_eq!(
            doc.import_schema_definition(Some("OtherQuery"), None, None),
            Err(DocumentError::DuplicateSchemaDefinition),
        );
        assert_eq!(
            doc.schema_definition().and_then(|def| def.query_type_name()),
            Some("Query"),
        );
        Ok(())
    }
}
