//! Registry text serializer
//!
//! Writes a tree back as registry text. For trees produced from well-formed input,
//! tokenizing and parsing the output yields an equal tree. Nodes whose value or name was
//! never set are written as a bare key.

use crate::registry::ast::{RegistryConf, RegistryItem, SimpleAttr, StructItem};
use crate::registry::token::{is_comment, ATTRIBUTE, END, STRUCTURE};

const INDENT: &str = "    ";

pub fn to_registry_string<B>(conf: &RegistryConf<B>) -> String {
    let mut output = String::new();
    for item in conf.items() {
        match item {
            RegistryItem::Simple(attr) => write_simple(attr, 0, &mut output),
            RegistryItem::PosAttribute(attr) => {
                write_statement(&mut output, 0, ATTRIBUTE, Some(&attr.name), false);
            }
            RegistryItem::Struct(s) => {
                let has_body = !s.items.is_empty();
                write_statement(&mut output, 0, STRUCTURE, Some(&s.name), has_body);
                if has_body {
                    for child in &s.items {
                        write_struct_item(child, &mut output);
                    }
                    output.push_str("}\n");
                }
            }
        }
    }
    output
}

fn write_struct_item(item: &StructItem, output: &mut String) {
    match item {
        StructItem::Simple(attr) => write_simple(attr, 1, output),
        StructItem::Attribute(attr) => {
            let has_body = !attr.items.is_empty();
            write_statement(output, 1, ATTRIBUTE, attr.name(), has_body);
            if has_body {
                for child in &attr.items {
                    write_simple(child, 2, output);
                }
                output.push_str(INDENT);
                output.push_str("}\n");
            }
        }
    }
}

fn write_simple(attr: &SimpleAttr, depth: usize, output: &mut String) {
    write_statement(output, depth, &attr.name, attr.value(), false);
}

fn write_statement(
    output: &mut String,
    depth: usize,
    key: &str,
    value: Option<&str>,
    opens_body: bool,
) {
    output.push_str(&INDENT.repeat(depth));
    output.push_str(key);
    if let Some(value) = value {
        output.push(' ');
        output.push_str(&quote_if_needed(value));
    }
    if opens_body {
        output.push_str(" {");
    }
    output.push('\n');
}

/// Quote a value unless the tokenizer would read it back as the same single word.
///
/// A `$` value is written bare: the parser takes `$` as a value right after a key. Values
/// the parser never produces (`{`, `}`, a leading `#`) are quoted as well, and the
/// tokenizer rejects them when the text is read back.
fn quote_if_needed(value: &str) -> String {
    let plain = value == END
        || (!value.is_empty()
            && !is_comment(value)
            && !value
                .contains(|c: char| c.is_whitespace() || matches!(c, '"' | '{' | '}' | '$' | '\\')));
    if plain {
        value.to_string()
    } else {
        let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{}\"", escaped)
    }
}
