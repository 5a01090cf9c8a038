mod memory_script_sink;
mod mock_clipboard;
mod recording_notifier;
mod static_template_store;

#[allow(unused_imports)]
pub use memory_script_sink::MemoryScriptSink;
#[allow(unused_imports)]
pub use mock_clipboard::MockClipboard;
#[allow(unused_imports)]
pub use recording_notifier::RecordingNotifier;
#[allow(unused_imports)]
pub use static_template_store::StaticTemplateStore;
