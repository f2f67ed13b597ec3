use std::sync::Mutex;

use crate::error::ClipboardError;

/// Destination for shared result text.
pub trait ClipboardSink: Send + Sync {
    /// # Errors
    ///
    /// Returns `ClipboardError` when the text could not be stored.
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard that keeps every write in memory. Useful for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.writes().pop()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut writes = self
            .writes
            .lock()
            .map_err(|_| ClipboardError::Write("memory clipboard poisoned".to_string()))?;
        writes.push(text.to_string());
        Ok(())
    }
}
