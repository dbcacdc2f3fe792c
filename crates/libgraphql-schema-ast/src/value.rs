use indexmap::IndexMap;

/// A constant GraphQL value, as used for input-value defaults and directive
/// arguments in a type-system document.
///
/// Variables cannot appear in type-system documents, so unlike an
/// executable-document value there is no variable reference variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
}
impl Value {
    pub fn as_str(&self) -> Option<&str> {
        if let Self::String(str) = self {
            Some(str.as_str())
        } else {
            None
        }
    }
}
