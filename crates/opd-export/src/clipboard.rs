//! Query Text Clipboard
//!
//! Copying the generated query text goes through an injected sink, so
//! the UI shell decides what "clipboard" means. An empty query text is
//! a no-op.

use std::sync::Mutex;

/// Sink for copied query text
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str);
}

/// Copy the query text if there is any; returns whether a copy happened
pub fn copy_query_text(clipboard: &dyn Clipboard, query_text: &str) -> bool {
    if query_text.is_empty() {
        return false;
    }

    clipboard.write_text(query_text);
    true
}

/// In-process clipboard holding the last copied text
#[derive(Default)]
pub struct MemoryClipboard {
    content: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last copied text, if any
    pub fn contents(&self) -> Option<String> {
        self.content
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) {
        *self.content.lock().unwrap_or_else(|e| e.into_inner()) = Some(text.to_string());
    }
}
