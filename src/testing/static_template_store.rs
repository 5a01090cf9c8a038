use crate::ports::{ScriptTemplate, ScriptTemplateStore};

/// Template store serving a fixed list of in-memory templates.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct StaticTemplateStore {
    templates: Vec<ScriptTemplate>,
}

#[allow(dead_code)]
impl StaticTemplateStore {
    pub fn new(templates: Vec<(&str, &str)>) -> Self {
        let templates = templates
            .into_iter()
            .map(|(name, source)| ScriptTemplate {
                name: name.to_string(),
                source: source.to_string(),
            })
            .collect();
        Self { templates }
    }
}

impl ScriptTemplateStore for StaticTemplateStore {
    fn templates(&self) -> Vec<ScriptTemplate> {
        self.templates.clone()
    }
}
