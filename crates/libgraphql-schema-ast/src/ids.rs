macro_rules! define_ids {
    ($(
        $(#[$meta:meta])*
        $name:ident => $kind:literal;
    )*) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $name(pub(crate) usize);

        impl $name {
            /// Human-readable name of the table this handle indexes into.
            pub const KIND: &'static str = $kind;

            /// Position of the referenced node within its
            /// [`Document`](crate::Document) table.
            pub fn index(self) -> usize {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", $kind, self.0)
            }
        }
    )*};
}

define_ids! {
    /// Handle to a [`TypeRef`](crate::TypeRef).
    TypeRefId => "type reference";

    /// Handle to a [`FieldDefinition`](crate::FieldDefinition).
    FieldDefinitionId => "field definition";

    /// Handle to an [`InputValueDefinition`](crate::InputValueDefinition).
    InputValueDefinitionId => "input value definition";

    /// Handle to an [`EnumValueDefinition`](crate::EnumValueDefinition).
    EnumValueDefinitionId => "enum value definition";

    ObjectTypeDefinitionId => "object type definition";
    InterfaceTypeDefinitionId => "interface type definition";
    EnumTypeDefinitionId => "enum type definition";
    InputObjectTypeDefinitionId => "input object type definition";
    UnionTypeDefinitionId => "union type definition";
    ScalarTypeDefinitionId => "scalar type definition";
}
