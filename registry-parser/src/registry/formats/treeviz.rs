//! Treeviz formatter for configuration trees

use crate::registry::ast::{RegistryConf, RegistryItem, RegistryNode, StructItem};

const DEFAULT_LABEL_WIDTH: usize = 30;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

pub fn to_treeviz_str<B>(conf: &RegistryConf<B>) -> String {
    to_treeviz_str_with_width(conf, DEFAULT_LABEL_WIDTH)
}

pub fn to_treeviz_str_with_width<B>(conf: &RegistryConf<B>, label_width: usize) -> String {
    let mut result = String::new();
    let items = conf.items();
    for (i, item) in items.iter().enumerate() {
        let is_last = i == items.len() - 1;
        append_item(&mut result, item, "", is_last, label_width);
    }
    result
}

fn append_line(
    result: &mut String,
    node: &dyn RegistryNode,
    prefix: &str,
    is_last: bool,
    label_width: usize,
) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!(
        "{}{} {}: {}\n",
        prefix,
        connector,
        node.node_type(),
        truncate(&node.display_label(), label_width)
    ));
    format!("{}{}", prefix, if is_last { "  " } else { "│ " })
}

fn append_item(
    result: &mut String,
    item: &RegistryItem,
    prefix: &str,
    is_last: bool,
    label_width: usize,
) {
    let new_prefix = append_line(result, item, prefix, is_last, label_width);

    if let RegistryItem::Struct(s) = item {
        for (i, child) in s.items.iter().enumerate() {
            let child_last = i == s.items.len() - 1;
            append_struct_item(result, child, &new_prefix, child_last, label_width);
        }
    }
}

fn append_struct_item(
    result: &mut String,
    item: &StructItem,
    prefix: &str,
    is_last: bool,
    label_width: usize,
) {
    let new_prefix = append_line(result, item, prefix, is_last, label_width);

    if let StructItem::Attribute(attr) = item {
        for (i, child) in attr.items.iter().enumerate() {
            let child_last = i == attr.items.len() - 1;
            append_line(result, child, &new_prefix, child_last, label_width);
        }
    }
}
