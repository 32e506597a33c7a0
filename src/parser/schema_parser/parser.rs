use crate::error_handling::Error::{InvalidSchema, MissingSchemaKey};
use crate::error_handling::Result;
use crate::lexer::{TokenTrie, TokenType};
use indexmap::IndexMap;
use serde_yaml::Value;
use std::io::Read;

/// The literals to register before scanning, in registration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SchemaConfig {
    keywords: Vec<String>,
    symbols: Vec<String>,
}

impl SchemaConfig {
    const KEYWORD_KEY: &'static str = "keywords";
    const SYMBOL_KEY: &'static str = "symbols";

    pub fn new(keywords: Vec<String>, symbols: Vec<String>) -> Self {
        Self { keywords, symbols }
    }

    pub fn get_keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn get_symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Registers keywords first and symbols second; a literal registered twice keeps its last
    /// category.
    pub fn build_trie(&self) -> Result<TokenTrie> {
        let mut trie = TokenTrie::new();
        let registrations = self
            .keywords
            .iter()
            .map(|k| (k, TokenType::Keyword))
            .chain(self.symbols.iter().map(|s| (s, TokenType::Symbol)));
        for (literal, token_type) in registrations {
            if let Some(previous) = trie.get(literal) {
                log::warn!(
                    "Literal {:?} already registered as {:?}; overwritten with {:?}",
                    literal,
                    previous[0],
                    token_type
                );
            }
            trie.insert(literal, vec![token_type])?;
        }
        log::info!(
            "Built token trie: {} keywords, {} symbols, {} distinct literals",
            self.keywords.len(),
            self.symbols.len(),
            trie.len()
        );
        Ok(trie)
    }

    pub fn parse_from_file(yaml_file_path: &str) -> Result<SchemaConfig> {
        let mut file = std::fs::File::open(yaml_file_path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let schema = Self::parse_from_str(contents.as_str())?;
        log::info!("Loaded schema from {}", yaml_file_path);
        Ok(schema)
    }

    pub fn parse_from_str(yaml_content: &str) -> Result<SchemaConfig> {
        let kv_pairs: IndexMap<String, Value> = serde_yaml::from_str(yaml_content)?;
        Self::load_from_kv_pairs(kv_pairs)
    }

    fn load_from_kv_pairs(kv_pairs: IndexMap<String, Value>) -> Result<Self> {
        let keywords = match kv_pairs.get(Self::KEYWORD_KEY) {
            Some(value) => Self::load_literals(value)?,
            None => return Err(MissingSchemaKey(Self::KEYWORD_KEY)),
        };
        let symbols = match kv_pairs.get(Self::SYMBOL_KEY) {
            Some(value) => Self::load_literals(value)?,
            None => Vec::new(),
        };
        Ok(Self { keywords, symbols })
    }

    fn load_literals(value: &Value) -> Result<Vec<String>> {
        let sequence = match value {
            Value::Sequence(sequence) => sequence,
            Value::Null => return Ok(Vec::new()),
            _ => return Err(InvalidSchema("literal lists must be sequences")),
        };
        sequence
            .iter()
            .map(|val| match val {
                Value::String(s) if s.is_empty() => Err(InvalidSchema("empty literal")),
                Value::String(s) => Ok(s.clone()),
                // Numbers and booleans would be re-rendered, not kept as written: quote them.
                _ => Err(InvalidSchema("literals must be strings")),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::Error;

    #[test]
    fn test_read_demo_schema_file() -> Result<()> {
        let project_root = env!("CARGO_MANIFEST_DIR");
        let schema_path = std::path::Path::new(project_root)
            .join("demos")
            .join("schema.yaml");
        let schema = SchemaConfig::parse_from_file(schema_path.to_str().unwrap())?;

        assert_eq!(schema.get_keywords().len(), 12);
        assert_eq!(schema.get_symbols().len(), 35);
        assert_eq!(schema.get_keywords()[0], "if");
        assert!(schema.get_symbols().contains(&"<<=".to_string()));

        let trie = schema.build_trie()?;
        assert_eq!(trie.get("while"), Some(&[TokenType::Keyword][..]));
        assert_eq!(trie.get("->"), Some(&[TokenType::Symbol][..]));
        assert_eq!(trie.len(), 47);
        Ok(())
    }

    #[test]
    fn test_missing_symbols_key() -> Result<()> {
        let schema = SchemaConfig::parse_from_str("keywords: [let, in]\n")?;
        assert_eq!(schema.get_keywords(), &["let".to_string(), "in".to_string()]);
        assert!(schema.get_symbols().is_empty());
        Ok(())
    }

    #[test]
    fn test_missing_keywords_key() {
        let result = SchemaConfig::parse_from_str("symbols: ['+']\n");
        assert!(matches!(result, Err(Error::MissingSchemaKey("keywords"))));
    }

    #[test]
    fn test_invalid_literals() {
        let not_a_sequence = SchemaConfig::parse_from_str("keywords: if\n");
        assert!(matches!(not_a_sequence, Err(Error::InvalidSchema(_))));

        let empty_literal = SchemaConfig::parse_from_str("keywords: ['']\n");
        assert!(matches!(empty_literal, Err(Error::InvalidSchema(_))));

        let nested = SchemaConfig::parse_from_str("keywords: [[a, b]]\n");
        assert!(matches!(nested, Err(Error::InvalidSchema(_))));

        let broken_yaml = SchemaConfig::parse_from_str("keywords: [if\n");
        assert!(matches!(broken_yaml, Err(Error::YamlParsingError(_))));
    }

    #[test]
    fn test_unquoted_scalars_are_rejected() -> Result<()> {
        for yaml in [
            "keywords: [0x10]\n",
            "keywords: [1e3]\n",
            "keywords: [true]\n",
            "keywords: []\nsymbols: [1.50]\n",
        ] {
            let result = SchemaConfig::parse_from_str(yaml);
            assert!(
                matches!(result, Err(Error::InvalidSchema("literals must be strings"))),
                "{}",
                yaml
            );
        }

        let quoted = SchemaConfig::parse_from_str("keywords: ['0x10', '007', 'true']\n")?;
        assert_eq!(quoted.get_keywords(), &["0x10", "007", "true"]);
        Ok(())
    }

    #[test]
    fn test_duplicate_literal_keeps_last_category() -> Result<()> {
        let schema = SchemaConfig::new(vec!["not".to_string()], vec!["not".to_string()]);
        let trie = schema.build_trie()?;
        assert_eq!(trie.get("not"), Some(&[TokenType::Symbol][..]));
        assert_eq!(trie.len(), 1);
        Ok(())
    }
}
