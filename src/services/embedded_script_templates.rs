use include_dir::{Dir, DirEntry, include_dir};

use crate::ports::{ScriptTemplate, ScriptTemplateStore};

static SCRIPT_TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/scripts");

/// Script skeletons compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedScriptTemplateStore;

impl EmbeddedScriptTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptTemplateStore for EmbeddedScriptTemplateStore {
    fn templates(&self) -> Vec<ScriptTemplate> {
        let mut templates = Vec::new();
        collect_templates(&SCRIPT_TEMPLATE_DIR, &mut templates);
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        templates
    }
}

fn collect_templates(dir: &'static Dir, templates: &mut Vec<ScriptTemplate>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                if let Some(source) = file.contents_utf8() {
                    templates.push(ScriptTemplate {
                        name: file.path().to_string_lossy().to_string(),
                        source: source.to_string(),
                    });
                }
            }
            DirEntry::Dir(subdir) => collect_templates(subdir, templates),
        }
    }
}
