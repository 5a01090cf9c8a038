use crate::domain::{AppError, ScriptGenerator};
use crate::ports::{Notifier, ScriptTemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<N: Notifier, T: ScriptTemplateStore> {
    notifier: N,
    templates: T,
}

impl<N: Notifier, T: ScriptTemplateStore> AppContext<N, T> {
    /// Create a new application context.
    pub fn new(notifier: N, templates: T) -> Self {
        Self { notifier, templates }
    }

    /// Get a mutable reference to the notifier.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Get a reference to the notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Get a reference to the script template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Build a script generator over the context's templates.
    pub fn generator(&self) -> Result<ScriptGenerator, AppError> {
        ScriptGenerator::new(&self.templates)
    }
}
