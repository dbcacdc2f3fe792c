/// Failures raised while importing nodes into, or reading nodes out of, a
/// [`Document`](crate::Document).
///
/// `InvalidName`, `InvalidHandle`, `NestedNonNull`, `AlreadyOwned`,
/// `DuplicateFieldName` and `DuplicateSchemaDefinition` indicate a bug in
/// whatever is building the document. `UnresolvedTypeReference` indicates a
/// malformed document and is what readers see when a type-reference chain
/// cannot be unwrapped.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DocumentError {
    #[error("`{name}` is not a valid {kind} name")]
    InvalidName {
        kind: &'static str,
        name: String,
    },

    #[error("{kind} handle #{index} was not issued by this document")]
    InvalidHandle {
        kind: &'static str,
        index: usize,
    },

    #[error("type reference #{type_ref} is already non-null")]
    NestedNonNull {
        type_ref: usize,
    },

    #[error("{kind} #{index} already belongs to another definition")]
    AlreadyOwned {
        kind: &'static str,
        index: usize,
    },

    #[error("field `{field_name}` is defined more than once on `{type_name}`")]
    DuplicateFieldName {
        field_name: String,
        type_name: String,
    },

    #[error("the document already contains a schema definition")]
    DuplicateSchemaDefinition,

    #[error("type reference #{type_ref} does not unwrap to a named type")]
    UnresolvedTypeReference {
        type_ref: usize,
    },
}
