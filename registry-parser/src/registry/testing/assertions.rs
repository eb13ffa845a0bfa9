//! Fluent assertion API for configuration trees

use crate::registry::ast::{
    Attribute, PosAttribute, RegistryConf, RegistryItem, RegistryNode, SimpleAttr, Struct,
    StructItem,
};

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a tree
pub fn assert_registry<B>(conf: &RegistryConf<B>) -> RegistryAssertion<'_> {
    RegistryAssertion {
        corpus_id: &conf.corpus_id,
        variant: conf.variant.as_deref(),
        items: conf.items(),
    }
}

fn summarize<T: RegistryNode>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("{}({})", item.node_type(), item.display_label()))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Root Assertions
// ============================================================================

pub struct RegistryAssertion<'a> {
    corpus_id: &'a str,
    variant: Option<&'a str>,
    items: &'a [RegistryItem],
}

impl<'a> RegistryAssertion<'a> {
    pub fn corpus_id(self, expected: &str) -> Self {
        assert_eq!(self.corpus_id, expected, "corpus_id mismatch");
        self
    }

    pub fn variant(self, expected: Option<&str>) -> Self {
        assert_eq!(self.variant, expected, "variant mismatch");
        self
    }

    /// Assert the number of top-level items
    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.items.len(),
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            self.items.len(),
            summarize(self.items)
        );
        self
    }

    /// Assert on a specific top-level item by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ItemAssertion<'a>),
    {
        assert!(
            index < self.items.len(),
            "Item index {} out of bounds (registry has {} items)",
            index,
            self.items.len()
        );
        assertion(ItemAssertion {
            item: &self.items[index],
            context: format!("items[{}]", index),
        });
        self
    }
}

// ============================================================================
// Top-Level Item Assertions
// ============================================================================

pub struct ItemAssertion<'a> {
    item: &'a RegistryItem,
    context: String,
}

impl<'a> ItemAssertion<'a> {
    fn mismatch(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {} '{}'",
            self.context,
            expected,
            self.item.node_type(),
            self.item.display_label()
        )
    }

    pub fn assert_posattr(self) -> PosAttributeAssertion<'a> {
        match self.item {
            RegistryItem::PosAttribute(attr) => PosAttributeAssertion {
                attr,
                context: self.context,
            },
            _ => self.mismatch("PosAttribute"),
        }
    }

    pub fn assert_struct(self) -> StructAssertion<'a> {
        match self.item {
            RegistryItem::Struct(s) => StructAssertion {
                s,
                context: self.context,
            },
            _ => self.mismatch("Struct"),
        }
    }

    pub fn assert_simple(self) -> SimpleAttrAssertion<'a> {
        match self.item {
            RegistryItem::Simple(attr) => SimpleAttrAssertion {
                attr,
                context: self.context,
            },
            _ => self.mismatch("SimpleAttr"),
        }
    }
}

// ============================================================================
// PosAttribute Assertions
// ============================================================================

pub struct PosAttributeAssertion<'a> {
    attr: &'a PosAttribute,
    context: String,
}

impl PosAttributeAssertion<'_> {
    pub fn position(self, expected: usize) -> Self {
        assert_eq!(
            self.attr.position, expected,
            "{}: position mismatch",
            self.context
        );
        self
    }

    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.attr.name, expected, "{}: name mismatch", self.context);
        self
    }
}

// ============================================================================
// Struct Assertions
// ============================================================================

pub struct StructAssertion<'a> {
    s: &'a Struct,
    context: String,
}

impl<'a> StructAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.s.name, expected, "{}: name mismatch", self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.s.items.len(),
            expected,
            "{}: Expected {} children, found: [{}]",
            self.context,
            expected,
            summarize(self.s.items.as_slice())
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(StructItemAssertion<'a>),
    {
        assert!(
            index < self.s.items.len(),
            "{}: child index {} out of bounds ({} children)",
            self.context,
            index,
            self.s.items.len()
        );
        assertion(StructItemAssertion {
            item: &self.s.items[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

pub struct StructItemAssertion<'a> {
    item: &'a StructItem,
    context: String,
}

impl<'a> StructItemAssertion<'a> {
    pub fn assert_attribute(self) -> AttributeAssertion<'a> {
        match self.item {
            StructItem::Attribute(attr) => AttributeAssertion {
                attr,
                context: self.context,
            },
            StructItem::Simple(attr) => panic!(
                "{}: Expected Attribute, found SimpleAttr '{}'",
                self.context,
                attr.display_label()
            ),
        }
    }

    pub fn assert_simple(self) -> SimpleAttrAssertion<'a> {
        match self.item {
            StructItem::Simple(attr) => SimpleAttrAssertion {
                attr,
                context: self.context,
            },
            StructItem::Attribute(attr) => panic!(
                "{}: Expected SimpleAttr, found Attribute '{}'",
                self.context,
                attr.display_label()
            ),
        }
    }
}

// ============================================================================
// Attribute Assertions
// ============================================================================

pub struct AttributeAssertion<'a> {
    attr: &'a Attribute,
    context: String,
}

impl<'a> AttributeAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(
            self.attr.name(),
            Some(expected),
            "{}: name mismatch",
            self.context
        );
        self
    }

    pub fn unnamed(self) -> Self {
        assert_eq!(self.attr.name(), None, "{}: expected no name", self.context);
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.attr.items.len(),
            expected,
            "{}: Expected {} children, found: [{}]",
            self.context,
            expected,
            summarize(self.attr.items.as_slice())
        );
        self
    }

    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SimpleAttrAssertion<'a>),
    {
        assert!(
            index < self.attr.items.len(),
            "{}: child index {} out of bounds ({} children)",
            self.context,
            index,
            self.attr.items.len()
        );
        assertion(SimpleAttrAssertion {
            attr: &self.attr.items[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// SimpleAttr Assertions
// ============================================================================

pub struct SimpleAttrAssertion<'a> {
    attr: &'a SimpleAttr,
    context: String,
}

impl SimpleAttrAssertion<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.attr.name, expected, "{}: name mismatch", self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_eq!(
            self.attr.value(),
            Some(expected),
            "{}: value mismatch",
            self.context
        );
        self
    }

    pub fn no_value(self) -> Self {
        assert_eq!(self.attr.value(), None, "{}: expected no value", self.context);
        self
    }
}
