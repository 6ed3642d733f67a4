//! Front-matter parsing
//!
//! Posts carry a restricted YAML-like header: line-oriented `key: value`
//! pairs with optional bracketed, comma-separated lists. Nothing beyond
//! that is recognized: no nesting, numbers, or booleans.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `---` on its own line at the very start of the file, a non-greedy
    /// body, then a closing `---` line followed by a newline.
    static ref BLOCK_RE: Regex = Regex::new(r"(?s)\A---[ \t\r]*\n(.*?)\n---[ \t\r]*\n").unwrap();
}

/// A front-matter value: a plain string or a bracketed list of strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    List(Vec<String>),
}

impl Value {
    /// Get the scalar string, if this value is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            Value::List(_) => None,
        }
    }

    /// Get the list items, if this value is a list
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Scalar(_) => None,
            Value::List(items) => Some(items),
        }
    }
}

/// Parsed front-matter from a post file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, Value>,
}

impl FrontMatter {
    /// Extract and parse the front-matter block from file content.
    ///
    /// Returns `None` when the content does not open with a delimited
    /// block at position zero. A missing block is not an error.
    pub fn extract(content: &str) -> Option<Self> {
        let caps = BLOCK_RE.captures(content)?;
        Some(Self::parse(caps.get(1)?.as_str()))
    }

    /// Parse the text between the `---` delimiters.
    ///
    /// Lines without a colon are ignored. Keys and values are trimmed of
    /// whitespace and one matching pair of surrounding quotes. A value
    /// bracketed at both ends is split on commas into a list; anything
    /// else stays a scalar. Later occurrences of a key overwrite earlier
    /// ones.
    pub fn parse(text: &str) -> Self {
        let mut fields = IndexMap::new();

        for line in text.lines() {
            let line = line.trim();
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };

            let key = strip_quotes(key.trim()).to_string();
            let value = strip_quotes(value.trim());

            let value = if value.starts_with('[') && value.ends_with(']') {
                let items = value[1..value.len() - 1]
                    .split(',')
                    .map(|item| strip_quotes(item.trim()).to_string())
                    .collect();
                Value::List(items)
            } else {
                Value::Scalar(value.to_string())
            };

            fields.insert(key, value);
        }

        Self { fields }
    }

    /// Look up a field by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Look up a scalar field by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    /// Look up a list field by key
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.fields.get(key).and_then(Value::as_list)
    }

    /// Number of parsed fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Strip one matching pair of surrounding quotes (double or single)
fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && (bytes[0] == b'"' || bytes[0] == b'\'') && bytes[bytes.len() - 1] == bytes[0]
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}
