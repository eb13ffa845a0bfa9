//! Integration tests for the parser.

use registry_parser::registry::ast::RegistryItem;
use registry_parser::registry::lexing::tokenize;
use registry_parser::registry::parsing::{parse, ParseError, State};
use registry_parser::registry::testing::assert_registry;
use registry_parser::{MemoryBackend, NullBackend};
use rstest::rstest;

fn parse_tokens(tokens: &[&str]) -> registry_parser::RegistryConf {
    parse("test", None, NullBackend, tokens).expect("parse failed")
}

#[test]
fn test_single_positional_attribute() {
    let conf = parse_tokens(&["ATTRIBUTE", "word", "$"]);

    assert_registry(&conf).item_count(1).item(0, |item| {
        item.assert_posattr().position(0).name("word");
    });
}

#[test]
fn test_single_simple_attribute() {
    let conf = parse_tokens(&["ENCODING", "utf8", "$"]);

    assert_registry(&conf).item_count(1).item(0, |item| {
        item.assert_simple().name("ENCODING").value("utf8");
    });
}

#[test]
fn test_structure_with_nested_attribute() {
    let conf = parse_tokens(&[
        "STRUCTURE", "doc", "{", "ATTRIBUTE", "id", "{", "DYNTYPE", "plain", "$", "}", "$", "}",
    ]);

    assert_registry(&conf).item_count(1).item(0, |item| {
        item.assert_struct()
            .name("doc")
            .child_count(1)
            .child(0, |child| {
                child
                    .assert_attribute()
                    .name("id")
                    .child_count(1)
                    .child(0, |sub| {
                        sub.name("DYNTYPE").value("plain");
                    });
            });
    });
}

#[test]
fn test_comment_is_skipped() {
    let with_comment = parse_tokens(&["#note", "ignored", "$", "ATTRIBUTE", "word", "$"]);
    let without = parse_tokens(&["ATTRIBUTE", "word", "$"]);

    assert_eq!(with_comment, without);
}

#[test]
fn test_unrecognized_top_level_token_is_a_syntax_error() {
    let result = parse("test", None, NullBackend, &["@@@"]);

    assert_eq!(
        result.unwrap_err(),
        ParseError::Syntax {
            state: State::TopLevel,
            index: 0,
            token: "@@@".to_string(),
        }
    );
}

#[test]
fn test_syntax_error_after_valid_items() {
    let result = parse(
        "test",
        None,
        NullBackend,
        &["ATTRIBUTE", "word", "$", "lowercase", "x", "$"],
    );

    let err = result.unwrap_err();
    assert_eq!(err.index(), Some(3));
    assert_eq!(err.to_string(), "in state 0 cannot process: lowercase (token #3)");
}

#[test]
fn test_bracket_instead_of_value_is_a_syntax_error() {
    let result = parse("test", None, NullBackend, &["STRUCTURE", "{", "}"]);

    assert!(matches!(
        result,
        Err(ParseError::Syntax {
            state: State::ItemValue,
            index: 1,
            ..
        })
    ));
}

#[test]
fn test_ending_mid_statement_is_not_an_error() {
    let conf = parse_tokens(&["ENCODING"]);

    assert_registry(&conf).item_count(1).item(0, |item| {
        item.assert_simple().name("ENCODING").no_value();
    });
}

#[test]
fn test_empty_input() {
    let conf = parse_tokens(&[]);
    assert!(conf.is_empty());
}

#[test]
fn test_placeholder_name_survives_when_value_is_missing() {
    // The introducing key is the node's initial name.
    let conf = parse_tokens(&["ATTRIBUTE"]);

    assert_registry(&conf).item(0, |item| {
        item.assert_posattr().position(0).name("ATTRIBUTE");
    });
}

#[test]
fn test_declaration_order_is_preserved() {
    let conf = parse_tokens(&[
        "ENCODING", "utf8", "$", "ATTRIBUTE", "word", "$", "LANGUAGE", "Czech", "$", "ATTRIBUTE",
        "lemma", "$",
    ]);

    let labels: Vec<String> = conf
        .items()
        .iter()
        .map(|item| match item {
            RegistryItem::Simple(a) => a.name.clone(),
            RegistryItem::PosAttribute(a) => a.name.clone(),
            RegistryItem::Struct(s) => s.name.clone(),
        })
        .collect();
    assert_eq!(labels, vec!["ENCODING", "word", "LANGUAGE", "lemma"]);
}

#[test]
fn test_nested_simple_attributes_and_comments() {
    let conf = parse_tokens(&[
        "STRUCTURE", "p", "{", "$", "#", "body", "comment", "$", "DISPLAYTAG", "0", "$",
        "ATTRIBUTE", "type", "{", "$", "#c", "$", "MULTIVALUE", "yes", "$", "MULTISEP", "|", "$",
        "}", "$", "}", "$",
    ]);

    assert_registry(&conf).item_count(1).item(0, |item| {
        item.assert_struct()
            .name("p")
            .child_count(2)
            .child(0, |child| {
                child.assert_simple().name("DISPLAYTAG").value("0");
            })
            .child(1, |child| {
                child
                    .assert_attribute()
                    .name("type")
                    .child_count(2)
                    .child(0, |sub| {
                        sub.name("MULTIVALUE").value("yes");
                    })
                    .child(1, |sub| {
                        sub.name("MULTISEP").value("|");
                    });
            });
    });
}

#[test]
fn test_positional_attribute_with_empty_body() {
    let conf = parse_tokens(&["ATTRIBUTE", "tag", "{", "}", "ATTRIBUTE", "lc", "$"]);

    assert_registry(&conf)
        .item_count(2)
        .item(0, |item| {
            item.assert_posattr().position(0).name("tag");
        })
        .item(1, |item| {
            item.assert_posattr().position(1).name("lc");
        });
}

#[test]
fn test_dollar_is_accepted_as_a_value() {
    // A statement cut short by its line break takes the `$` as its value.
    let conf = parse_tokens(&["ENCODING", "$", "$"]);

    assert_registry(&conf).item(0, |item| {
        item.assert_simple().name("ENCODING").value("$");
    });
}

#[test]
fn test_nested_attribute_without_name_is_unnamed() {
    let conf = parse_tokens(&["STRUCTURE", "doc", "{", "ATTRIBUTE"]);

    assert_registry(&conf).item(0, |item| {
        item.assert_struct().child(0, |child| {
            child.assert_attribute().unnamed().child_count(0);
        });
    });
}

#[rstest]
#[case(&["ATTRIBUTE", "word", "$"], 1)]
#[case(&["ATTRIBUTE", "word", "$", "ATTRIBUTE", "lemma", "$"], 2)]
#[case(&["STRUCTURE", "s", "$", "ENCODING", "x", "$"], 2)]
#[case(&["$", "$", "#x", "$", "$"], 0)]
#[case(&["A", "b", "B", "c", "C", "d"], 1)]
fn test_item_counts(#[case] tokens: &[&str], #[case] expected: usize) {
    assert_eq!(parse_tokens(tokens).len(), expected);
}

#[test]
fn test_backend_receives_each_top_level_node_once() {
    let tokens = ["ENCODING", "utf8", "$", "ATTRIBUTE", "word", "$", "STRUCTURE", "doc", "$"];
    let conf = parse("susanne", Some("omezeni"), MemoryBackend::new(), &tokens).unwrap();

    let calls = conf.backend().calls();
    assert_eq!(calls.len(), 3);
    assert!(calls.iter().all(|c| c.corpus_id == "susanne"));
    assert!(calls.iter().all(|c| c.variant.as_deref() == Some("omezeni")));
    let forwarded: Vec<&RegistryItem> = conf.backend().items().collect();
    let kept: Vec<&RegistryItem> = conf.items().iter().collect();
    assert_eq!(forwarded, kept);
}

#[test]
fn test_sample_registry_file() {
    let source = std::fs::read_to_string(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/susanne.registry"
    ))
    .expect("fixture to be readable");
    let tokens = tokenize(&source).expect("fixture to tokenize");
    let conf = parse("susanne", None, NullBackend, &tokens).unwrap();

    assert_eq!(conf.simple("NAME"), Some("Susanne"));
    assert_eq!(conf.simple("INFO"), Some("Sample corpus, tagged"));
    assert_eq!(conf.simple("SUBCDEF"), Some("/corpora/subc/susanne.subc"));
    assert_eq!(
        conf.posattrs()
            .map(|p| (p.position, p.name.as_str()))
            .collect::<Vec<_>>(),
        vec![(0, "word"), (1, "lemma"), (2, "tag"), (3, "lc")]
    );
    assert_eq!(
        conf.structs().map(|s| s.name.as_str()).collect::<Vec<_>>(),
        vec!["doc", "p", "g"]
    );

    let doc = conf.structure("doc").unwrap();
    assert_eq!(doc.attributes().count(), 4);
    assert_eq!(
        doc.attribute("wordcount").and_then(|a| a.simple("NUMERIC")),
        Some("yes")
    );
    assert_eq!(conf.structure("g").and_then(|g| g.simple("DISPLAYBEGIN")), Some("_EMPTY_"));
    assert_eq!(conf.simple("MAXDETAIL"), Some("100"));
}
