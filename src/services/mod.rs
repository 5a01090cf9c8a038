mod clipboard_arboard;
mod console_notifier;
mod embedded_script_templates;
mod form_dialoguer;
mod script_directory;
mod topology_filesystem;

pub use clipboard_arboard::ArboardClipboard;
pub use console_notifier::ConsoleNotifier;
pub use embedded_script_templates::EmbeddedScriptTemplateStore;
pub use form_dialoguer::DialoguerForm;
pub use script_directory::DirectoryScriptSink;
pub use topology_filesystem::{TopologyFormat, read_topology, write_topology};
