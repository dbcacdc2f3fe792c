use crate::Value;

/// A directive applied to a definition, e.g. `@deprecated(reason: "old")`.
///
/// Arguments keep their source order.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: Vec<(String, Value)>,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            arguments: vec![],
            name: name.into(),
        }
    }

    pub fn with_argument(
        mut self,
        name: impl Into<String>,
        value: Value,
    ) -> Self {
        self.arguments.push((name.into(), value));
        self
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments
            .iter()
            .find(|(arg_name, _)| arg_name == name)
            .map(|(_, value)| value)
    }

    pub fn arguments(&self) -> &[(String, Value)] {
        self.arguments.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
