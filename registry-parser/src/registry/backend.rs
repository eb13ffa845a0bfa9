//! Persistence collaborator
//!
//! The root [RegistryConf](crate::registry::ast::RegistryConf) hands every top-level node to
//! its backend as the node is finalized, exactly once and in source order. What the backend
//! does with it (write a database row, build an index, nothing) is its own business.

use crate::registry::ast::RegistryItem;
use thiserror::Error;

/// Error reported by a backend that could not accept an item
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("backend rejected item: {message}")]
pub struct BackendError {
    pub message: String,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Receives top-level nodes as the root container finalizes them.
pub trait RegistryBackend {
    fn add_item(
        &mut self,
        corpus_id: &str,
        variant: Option<&str>,
        item: &RegistryItem,
    ) -> Result<(), BackendError>;
}

impl<B: RegistryBackend + ?Sized> RegistryBackend for &mut B {
    fn add_item(
        &mut self,
        corpus_id: &str,
        variant: Option<&str>,
        item: &RegistryItem,
    ) -> Result<(), BackendError> {
        (**self).add_item(corpus_id, variant, item)
    }
}

impl<B: RegistryBackend + ?Sized> RegistryBackend for Box<B> {
    fn add_item(
        &mut self,
        corpus_id: &str,
        variant: Option<&str>,
        item: &RegistryItem,
    ) -> Result<(), BackendError> {
        (**self).add_item(corpus_id, variant, item)
    }
}

/// Accepts and discards everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullBackend;

impl RegistryBackend for NullBackend {
    fn add_item(
        &mut self,
        _corpus_id: &str,
        _variant: Option<&str>,
        _item: &RegistryItem,
    ) -> Result<(), BackendError> {
        Ok(())
    }
}

/// One recorded `add_item` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendCall {
    pub corpus_id: String,
    pub variant: Option<String>,
    pub item: RegistryItem,
}

/// Records every call, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryBackend {
    calls: Vec<BackendCall>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    pub fn items(&self) -> impl Iterator<Item = &RegistryItem> {
        self.calls.iter().map(|call| &call.item)
    }
}

impl RegistryBackend for MemoryBackend {
    fn add_item(
        &mut self,
        corpus_id: &str,
        variant: Option<&str>,
        item: &RegistryItem,
    ) -> Result<(), BackendError> {
        self.calls.push(BackendCall {
            corpus_id: corpus_id.to_string(),
            variant: variant.map(str::to_string),
            item: item.clone(),
        });
        Ok(())
    }
}
