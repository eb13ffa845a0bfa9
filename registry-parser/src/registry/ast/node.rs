//! Registry node types
//!
//! A node's type is fixed when it is created. The parser creates each node with the
//! introducing key as a placeholder and then sets the real name or value once, so after
//! parsing the scalar fields are effectively immutable.

use super::container::Children;
use serde::Serialize;

/// A `KEY value` pair: the leaf of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleAttr {
    pub name: String,
    /// `None` until the parser sees the value token.
    pub value: Option<String>,
}

impl SimpleAttr {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// A word-level (positional) corpus attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosAttribute {
    /// 0-based, counted over positional attributes only.
    pub position: usize,
    pub name: String,
}

impl PosAttribute {
    pub fn new(position: usize, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }
}

/// An attribute declared inside a structure body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Attribute {
    /// `None` until the parser sees the name token.
    pub name: Option<String>,
    pub items: Children<SimpleAttr>,
}

impl Attribute {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            items: Children::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn new_item(&mut self, item: SimpleAttr) -> &mut SimpleAttr {
        self.items.push(item)
    }

    pub fn last_item(&self) -> Option<&SimpleAttr> {
        self.items.last()
    }

    pub fn last_item_mut(&mut self) -> Option<&mut SimpleAttr> {
        self.items.last_mut()
    }
}

/// A child of a structure body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StructItem {
    Attribute(Attribute),
    Simple(SimpleAttr),
}

impl StructItem {
    pub fn as_attribute(&self) -> Option<&Attribute> {
        match self {
            StructItem::Attribute(attr) => Some(attr),
            StructItem::Simple(_) => None,
        }
    }

    pub fn as_simple(&self) -> Option<&SimpleAttr> {
        match self {
            StructItem::Simple(attr) => Some(attr),
            StructItem::Attribute(_) => None,
        }
    }
}

/// A structural corpus attribute (document, paragraph, sentence, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Struct {
    pub name: String,
    pub items: Children<StructItem>,
}

impl Struct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Children::new(),
        }
    }

    pub fn new_item(&mut self, item: StructItem) -> &mut StructItem {
        self.items.push(item)
    }

    pub fn last_item(&self) -> Option<&StructItem> {
        self.items.last()
    }

    pub fn last_item_mut(&mut self) -> Option<&mut StructItem> {
        self.items.last_mut()
    }
}

/// A top-level child of [RegistryConf](super::RegistryConf).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistryItem {
    PosAttribute(PosAttribute),
    Struct(Struct),
    Simple(SimpleAttr),
}

impl RegistryItem {
    pub fn as_posattr(&self) -> Option<&PosAttribute> {
        match self {
            RegistryItem::PosAttribute(attr) => Some(attr),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            RegistryItem::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_simple(&self) -> Option<&SimpleAttr> {
        match self {
            RegistryItem::Simple(attr) => Some(attr),
            _ => None,
        }
    }
}

impl From<PosAttribute> for RegistryItem {
    fn from(attr: PosAttribute) -> Self {
        RegistryItem::PosAttribute(attr)
    }
}

impl From<Struct> for RegistryItem {
    fn from(s: Struct) -> Self {
        RegistryItem::Struct(s)
    }
}

impl From<SimpleAttr> for RegistryItem {
    fn from(attr: SimpleAttr) -> Self {
        RegistryItem::Simple(attr)
    }
}

impl From<Attribute> for StructItem {
    fn from(attr: Attribute) -> Self {
        StructItem::Attribute(attr)
    }
}

impl From<SimpleAttr> for StructItem {
    fn from(attr: SimpleAttr) -> Self {
        StructItem::Simple(attr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_struct_last_item_tracks_appends() {
        let mut s = Struct::new("doc");
        s.new_item(SimpleAttr::new("DISPLAYTAG").into());
        s.new_item(Attribute::new().into());

        assert!(matches!(s.last_item(), Some(StructItem::Attribute(_))));
        if let Some(StructItem::Attribute(attr)) = s.last_item_mut() {
            attr.name = Some("id".to_string());
            attr.new_item(SimpleAttr::with_value("DYNTYPE", "plain"));
        }

        let attr = s.items[1].as_attribute().unwrap();
        assert_eq!(attr.name(), Some("id"));
        assert_eq!(attr.last_item().and_then(|a| a.value()), Some("plain"));
    }

    #[test]
    fn test_item_serialization_is_tagged() {
        let item = RegistryItem::from(PosAttribute::new(0, "word"));
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"type":"pos_attribute","position":0,"name":"word"}"#
        );
    }
}
