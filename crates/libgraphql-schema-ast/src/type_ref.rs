use crate::TypeRefId;

/// A possibly-wrapped reference to a named type, as written on a field's
/// result type or an input value's type.
///
/// Wrappers point at their inner reference by [`TypeRefId`]. The import API
/// only accepts inner handles that already exist, so a chain built through
/// it always points backwards in the arena and ends at a
/// [`TypeRef::Named`].
///
/// `Named` references are weak: nothing here checks that a type with that
/// name is actually defined.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeRef {
    List(TypeRefId),
    Named(String),
    NonNull(TypeRefId),
}
impl TypeRef {
    /// The referenced type name if this is a [`TypeRef::Named`].
    pub fn as_named(&self) -> Option<&str> {
        if let Self::Named(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    /// The wrapped reference for [`TypeRef::List`] and [`TypeRef::NonNull`].
    pub fn inner(&self) -> Option<TypeRefId> {
        match self {
            Self::List(inner) | Self::NonNull(inner) => Some(*inner),
            Self::Named(_) => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }
}
