use super::backend::{parse_document, Document, DocumentBackend};
use crate::error::{Result, WorklaunchError};
use std::cell::{Cell, RefCell};

/// In-memory storage backend for testing.
///
/// Holds the serialized text rather than the parsed map so it goes through
/// the same parse path as a file, which lets tests inject corrupt content.
/// Uses `RefCell` for interior mutability since worklaunch is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    raw: RefCell<Option<String>>,
    save_count: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `raw` as the stored content, as if a file already existed.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let backend = Self::new();
        *backend.raw.borrow_mut() = Some(raw.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.save_count.get()
    }

    /// The stored text, exactly as the last save produced it.
    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl DocumentBackend for MemBackend {
    fn load_document(&self) -> Result<Option<Document>> {
        match self.raw.borrow().as_deref() {
            Some(raw) => parse_document(raw, &self.location()).map(Some),
            None => Ok(None),
        }
    }

    fn save_document(&self, document: &Document) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(WorklaunchError::Store("Simulated write error".to_string()));
        }
        let content =
            serde_json::to_string_pretty(document).map_err(WorklaunchError::Serialization)?;
        *self.raw.borrow_mut() = Some(content);
        self.save_count.set(self.save_count.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory://document".to_string()
    }
}
