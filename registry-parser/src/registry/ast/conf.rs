//! The root of a parsed registry

use super::node::RegistryItem;
use crate::registry::backend::{BackendError, NullBackend, RegistryBackend};
use serde::Serialize;
use std::fmt;

/// Root container: the corpus identity plus the ordered top-level items.
///
/// The root owns its backend handle and forwards every item to it from
/// [add_item](RegistryConf::add_item). The backend is not part of the tree: it is skipped
/// by serialization and ignored by equality.
#[derive(Serialize)]
pub struct RegistryConf<B = NullBackend> {
    pub corpus_id: String,
    pub variant: Option<String>,
    items: Vec<RegistryItem>,
    #[serde(skip)]
    backend: B,
}

impl RegistryConf<NullBackend> {
    /// A root without persistence.
    pub fn detached(corpus_id: impl Into<String>, variant: Option<String>) -> Self {
        Self::new(corpus_id, variant, NullBackend)
    }
}

impl<B> RegistryConf<B> {
    pub fn new(corpus_id: impl Into<String>, variant: Option<String>, backend: B) -> Self {
        Self {
            corpus_id: corpus_id.into(),
            variant,
            items: Vec::new(),
            backend,
        }
    }

    pub fn items(&self) -> &[RegistryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Drop the tree and keep the backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Swap the backend out without touching the tree.
    pub fn with_backend<C>(self, backend: C) -> RegistryConf<C> {
        RegistryConf {
            corpus_id: self.corpus_id,
            variant: self.variant,
            items: self.items,
            backend,
        }
    }
}

impl<B: RegistryBackend> RegistryConf<B> {
    /// Append a finished top-level node, after the backend accepted it.
    pub fn add_item(&mut self, item: impl Into<RegistryItem>) -> Result<(), BackendError> {
        let item = item.into();
        self.backend
            .add_item(&self.corpus_id, self.variant.as_deref(), &item)?;
        self.items.push(item);
        Ok(())
    }
}

impl<B> fmt::Debug for RegistryConf<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryConf")
            .field("corpus_id", &self.corpus_id)
            .field("variant", &self.variant)
            .field("items", &self.items)
            .finish()
    }
}

impl<B, C> PartialEq<RegistryConf<C>> for RegistryConf<B> {
    fn eq(&self, other: &RegistryConf<C>) -> bool {
        self.corpus_id == other.corpus_id
            && self.variant == other.variant
            && self.items == other.items
    }
}

impl<B: Clone> Clone for RegistryConf<B> {
    fn clone(&self) -> Self {
        Self {
            corpus_id: self.corpus_id.clone(),
            variant: self.variant.clone(),
            items: self.items.clone(),
            backend: self.backend.clone(),
        }
    }
}
