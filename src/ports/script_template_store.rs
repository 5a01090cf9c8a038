/// A named script skeleton template.
#[derive(Debug, Clone)]
pub struct ScriptTemplate {
    /// Template name, as referenced by the generator.
    pub name: String,
    /// Template source.
    pub source: String,
}

/// Port for loading script skeleton templates.
pub trait ScriptTemplateStore {
    /// All templates available to the generator.
    fn templates(&self) -> Vec<ScriptTemplate>;
}
