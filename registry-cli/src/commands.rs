//! Subcommand bodies
//!
//! Each command takes registry source text and returns what the binary prints, so the
//! work can be tested without spawning a process.

use registry_config::RegistryConfig;
use registry_parser::registry::formats::render;
use registry_parser::registry::loader::RegistryLoader;
use registry_parser::{NullBackend, ParserOptions};

/// Result of `registry check`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub summary: String,
    pub truncated: bool,
}

/// List the parser input, one token per line or as a JSON array.
pub fn tokens(source: &str, json: bool) -> Result<String, String> {
    let tokens = RegistryLoader::from_string(source)
        .tokenize()
        .map_err(|e| e.to_string())?;
    if json {
        let mut out = serde_json::to_string_pretty(&tokens)
            .map_err(|e| format!("JSON serialization failed: {}", e))?;
        out.push('\n');
        return Ok(out);
    }
    Ok(tokens.iter().map(|t| format!("{}\n", t)).collect())
}

/// Parse and render in the configured output format.
pub fn parse(source: &str, corpus_id: &str, config: &RegistryConfig) -> Result<String, String> {
    let report = RegistryLoader::from_string(source)
        .parse_with_report(
            corpus_id,
            config.corpus.variant.as_deref(),
            NullBackend,
            ParserOptions::from(&config.parser),
        )
        .map_err(|e| e.to_string())?;
    let mut out = render(&report.conf, config.output.format, config.output.label_width)
        .map_err(|e| e.to_string())?;
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Parse and describe how much of the input the parser consumed.
pub fn check(source: &str, corpus_id: &str, config: &RegistryConfig) -> Result<CheckOutcome, String> {
    let options = ParserOptions {
        strict: false,
        ..ParserOptions::from(&config.parser)
    };
    let report = RegistryLoader::from_string(source)
        .parse_with_report(corpus_id, config.corpus.variant.as_deref(), NullBackend, options)
        .map_err(|e| e.to_string())?;

    let mut summary = format!(
        "{}: {} items, {}/{} tokens consumed",
        corpus_id,
        report.conf.len(),
        report.consumed,
        report.total
    );
    if let Some(halt) = &report.halt {
        summary.push_str(&format!(
            "\nstopped in state {} at token #{}: {}",
            halt.state, halt.index, halt.token
        ));
    } else if !report.is_complete() {
        summary.push_str(&format!("\ninput ends in state {}", report.final_state));
    }
    Ok(CheckOutcome {
        summary,
        truncated: report.is_truncated(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_config::load_defaults;
    use registry_parser::registry::formats::OutputFormat;

    const SOURCE: &str = "ENCODING utf8\nATTRIBUTE word\n";

    #[test]
    fn test_tokens_plain() {
        assert_eq!(tokens(SOURCE, false).unwrap(), "ENCODING\nutf8\n$\nATTRIBUTE\nword\n$\n");
    }

    #[test]
    fn test_tokens_json() {
        let out = tokens("A b", true).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, vec!["A", "b", "$"]);
    }

    #[test]
    fn test_tokens_lex_error() {
        assert!(tokens("NAME \"open", false).is_err());
    }

    #[test]
    fn test_parse_json() {
        let mut config = load_defaults().unwrap();
        config.output.format = OutputFormat::Json;
        let out = parse(SOURCE, "susanne", &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["corpus_id"], "susanne");
        assert_eq!(value["items"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_parse_strict_fails_on_truncation() {
        let mut config = load_defaults().unwrap();
        config.parser.strict = true;
        assert!(parse("ENCODING utf8 extra\n", "c", &config).is_err());
        config.parser.strict = false;
        assert!(parse("ENCODING utf8 extra\n", "c", &config).is_ok());
    }

    #[test]
    fn test_check_complete() {
        let config = load_defaults().unwrap();
        let outcome = check(SOURCE, "susanne", &config).unwrap();
        assert!(!outcome.truncated);
        assert_eq!(outcome.summary, "susanne: 2 items, 6/6 tokens consumed");
    }

    #[test]
    fn test_check_truncated() {
        let mut config = load_defaults().unwrap();
        config.parser.strict = true;
        let outcome = check("ENCODING utf8 extra\nLANGUAGE cs\n", "c", &config).unwrap();
        assert!(outcome.truncated);
        assert_eq!(
            outcome.summary,
            "c: 1 items, 2/7 tokens consumed\nstopped in state 2 at token #2: extra"
        );
    }

    #[test]
    fn test_check_open_statement() {
        let config = load_defaults().unwrap();
        let outcome = check("STRUCTURE doc {\n", "c", &config).unwrap();
        assert!(!outcome.truncated);
        assert_eq!(
            outcome.summary,
            "c: 1 items, 4/4 tokens consumed\ninput ends in state 4"
        );
    }
}
