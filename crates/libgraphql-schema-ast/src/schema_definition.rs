/// The `schema { ... }` block naming the root operation types.
///
/// At most one exists per [`Document`](crate::Document).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaDefinition {
    pub(crate) mutation_type_name: Option<String>,
    pub(crate) query_type_name: Option<String>,
    pub(crate) subscription_type_name: Option<String>,
}
impl SchemaDefinition {
    pub fn mutation_type_name(&self) -> Option<&str> {
        self.mutation_type_name.as_deref()
    }

    pub fn query_type_name(&self) -> Option<&str> {
        self.query_type_name.as_deref()
    }

    pub fn subscription_type_name(&self) -> Option<&str> {
        self.subscription_type_name.as_deref()
    }
}
