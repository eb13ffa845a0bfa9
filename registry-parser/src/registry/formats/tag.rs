//! XML-like tag serialization
//!
//! Mirrors the tree structure directly:
//!
//! - Node kind → tag name
//! - Name → text content (for simple attributes, the name is an attribute and the value
//!   is the text)
//! - Children → nested in a `<children>` tag
//!
//! ## Example
//!
//! ```text
//! <registry corpus="susanne">
//!   <simple name="ENCODING">utf8</simple>
//!   <posattr position="0">word</posattr>
//!   <struct>doc<children>
//!     <attribute>id<children>
//!       <simple name="DYNTYPE">plain</simple>
//!     </children></attribute>
//!   </children></struct>
//! </registry>
//! ```

use crate::registry::ast::{RegistryConf, RegistryItem, SimpleAttr, StructItem};

/// Serialize a tree to tag format
pub fn serialize_registry_tag<B>(conf: &RegistryConf<B>) -> String {
    let mut result = String::new();
    result.push_str(&format!("<registry corpus=\"{}\"", escape_xml(&conf.corpus_id)));
    if let Some(variant) = &conf.variant {
        result.push_str(&format!(" variant=\"{}\"", escape_xml(variant)));
    }
    result.push_str(">\n");
    for item in conf.items() {
        serialize_item(item, 1, &mut result);
    }
    result.push_str("</registry>");
    result
}

fn serialize_item(item: &RegistryItem, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);

    match item {
        RegistryItem::Simple(attr) => serialize_simple(attr, indent_level, output),
        RegistryItem::PosAttribute(attr) => {
            output.push_str(&format!(
                "{}<posattr position=\"{}\">{}</posattr>\n",
                indent,
                attr.position,
                escape_xml(&attr.name)
            ));
        }
        RegistryItem::Struct(s) => {
            output.push_str(&format!("{}<struct>{}", indent, escape_xml(&s.name)));
            if s.items.is_empty() {
                output.push_str("</struct>\n");
            } else {
                output.push_str("<children>\n");
                for child in &s.items {
                    serialize_struct_item(child, indent_level + 1, output);
                }
                output.push_str(&format!("{}</children></struct>\n", indent));
            }
        }
    }
}

fn serialize_struct_item(item: &StructItem, indent_level: usize, output: &mut String) {
    match item {
        StructItem::Simple(attr) => serialize_simple(attr, indent_level, output),
        StructItem::Attribute(attr) => {
            let indent = "  ".repeat(indent_level);
            output.push_str(&format!(
                "{}<attribute>{}",
                indent,
                escape_xml(attr.name().unwrap_or_default())
            ));
            if attr.items.is_empty() {
                output.push_str("</attribute>\n");
            } else {
                output.push_str("<children>\n");
                for child in &attr.items {
                    serialize_simple(child, indent_level + 1, output);
                }
                output.push_str(&format!("{}</children></attribute>\n", indent));
            }
        }
    }
}

fn serialize_simple(attr: &SimpleAttr, indent_level: usize, output: &mut String) {
    let indent = "  ".repeat(indent_level);
    match attr.value() {
        Some(value) => output.push_str(&format!(
            "{}<simple name=\"{}\">{}</simple>\n",
            indent,
            escape_xml(&attr.name),
            escape_xml(value)
        )),
        None => output.push_str(&format!(
            "{}<simple name=\"{}\"/>\n",
            indent,
            escape_xml(&attr.name)
        )),
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
