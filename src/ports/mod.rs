mod clipboard_writer;
mod form_input;
mod notifier;
mod script_sink;
mod script_template_store;

pub use clipboard_writer::ClipboardWriter;
pub use form_input::FormInput;
pub use notifier::{Notice, NoticeLevel, Notifier};
pub use script_sink::ScriptSink;
pub use script_template_store::{ScriptTemplate, ScriptTemplateStore};
