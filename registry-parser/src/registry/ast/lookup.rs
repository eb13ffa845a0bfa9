//! Read-only queries over a finished tree
//!
//! Names are compared exactly. When a name is declared twice the first declaration wins,
//! matching how the indexing engine resolves duplicates.

use super::conf::RegistryConf;
use super::node::{Attribute, PosAttribute, RegistryItem, SimpleAttr, Struct, StructItem};

impl<B> RegistryConf<B> {
    /// Positional attributes in declaration order.
    pub fn posattrs(&self) -> impl Iterator<Item = &PosAttribute> {
        self.items().iter().filter_map(RegistryItem::as_posattr)
    }

    /// Structures in declaration order.
    pub fn structs(&self) -> impl Iterator<Item = &Struct> {
        self.items().iter().filter_map(RegistryItem::as_struct)
    }

    /// Top-level simple attributes in declaration order.
    pub fn simple_attrs(&self) -> impl Iterator<Item = &SimpleAttr> {
        self.items().iter().filter_map(RegistryItem::as_simple)
    }

    /// Value of a top-level simple attribute, e.g. `conf.simple("ENCODING")`.
    pub fn simple(&self, name: &str) -> Option<&str> {
        self.simple_attrs()
            .find(|attr| attr.name == name)
            .and_then(SimpleAttr::value)
    }

    pub fn posattr(&self, name: &str) -> Option<&PosAttribute> {
        self.posattrs().find(|attr| attr.name == name)
    }

    pub fn structure(&self, name: &str) -> Option<&Struct> {
        self.structs().find(|s| s.name == name)
    }
}

impl Struct {
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.items.iter().filter_map(StructItem::as_attribute)
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes().find(|attr| attr.name() == Some(name))
    }

    pub fn simple(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .filter_map(StructItem::as_simple)
            .find(|attr| attr.name == name)
            .and_then(SimpleAttr::value)
    }
}

impl Attribute {
    pub fn simple(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|attr| attr.name == name)
            .and_then(SimpleAttr::value)
    }
}
