//! Uniform access to node kinds and labels

use super::node::{Attribute, PosAttribute, RegistryItem, SimpleAttr, Struct, StructItem};

/// Common interface for every node in the tree
pub trait RegistryNode {
    /// Node kind name, the type name of the node (`"SimpleAttr"`, `"Struct"`, ...)
    fn node_type(&self) -> &'static str;
    /// Short human-readable description of the node
    fn display_label(&self) -> String;
}

impl RegistryNode for SimpleAttr {
    fn node_type(&self) -> &'static str {
        "SimpleAttr"
    }

    fn display_label(&self) -> String {
        match &self.value {
            Some(value) => format!("{} = {}", self.name, value),
            None => self.name.clone(),
        }
    }
}

impl RegistryNode for PosAttribute {
    fn node_type(&self) -> &'static str {
        "PosAttribute"
    }

    fn display_label(&self) -> String {
        format!("#{} {}", self.position, self.name)
    }
}

impl RegistryNode for Attribute {
    fn node_type(&self) -> &'static str {
        "Attribute"
    }

    fn display_label(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

impl RegistryNode for Struct {
    fn node_type(&self) -> &'static str {
        "Struct"
    }

    fn display_label(&self) -> String {
        self.name.clone()
    }
}

impl RegistryNode for StructItem {
    fn node_type(&self) -> &'static str {
        match self {
            StructItem::Attribute(a) => a.node_type(),
            StructItem::Simple(s) => s.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            StructItem::Attribute(a) => a.display_label(),
            StructItem::Simple(s) => s.display_label(),
        }
    }
}

impl RegistryNode for RegistryItem {
    fn node_type(&self) -> &'static str {
        match self {
            RegistryItem::PosAttribute(p) => p.node_type(),
            RegistryItem::Struct(s) => s.node_type(),
            RegistryItem::Simple(s) => s.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            RegistryItem::PosAttribute(p) => p.display_label(),
            RegistryItem::Struct(s) => s.display_label(),
            RegistryItem::Simple(s) => s.display_label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_is_the_type_name() {
        let simple: RegistryItem = SimpleAttr::with_value("ENCODING", "utf8").into();
        let posattr: RegistryItem = PosAttribute::new(0, "word").into();
        let structure: RegistryItem = Struct::new("doc").into();
        let attribute: StructItem = Attribute::named("id").into();

        assert_eq!(simple.node_type(), "SimpleAttr");
        assert_eq!(posattr.node_type(), "PosAttribute");
        assert_eq!(structure.node_type(), "Struct");
        assert_eq!(attribute.node_type(), "Attribute");
        assert_eq!(simple.display_label(), "ENCODING = utf8");
        assert_eq!(posattr.display_label(), "#0 word");
    }
}
