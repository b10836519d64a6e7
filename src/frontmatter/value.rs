//! Coerced frontmatter values

use std::collections::HashMap;
use std::fmt;

/// A single coerced frontmatter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontmatterValue {
    String(String),
    Bool(bool),
    List(Vec<String>),
}

impl FrontmatterValue {
    /// Name of the value's type as used in schema messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FrontmatterValue::String(_) => "string",
            FrontmatterValue::Bool(_) => "boolean",
            FrontmatterValue::List(_) => "array",
        }
    }
}

/// Renders the value back into the frontmatter syntax it is parsed from.
impl fmt::Display for FrontmatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontmatterValue::String(s) => write!(f, "\"{s}\""),
            FrontmatterValue::Bool(b) => write!(f, "{b}"),
            FrontmatterValue::List(items) => {
                let quoted: Vec<String> = items.iter().map(|i| format!("\"{i}\"")).collect();
                write!(f, "[{}]", quoted.join(", "))
            }
        }
    }
}

/// Flat key/value mapping parsed from a frontmatter block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontmatterRecord {
    fields: HashMap<String, FrontmatterValue>,
}

impl FrontmatterRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any earlier value for the same key
    pub fn insert(&mut self, key: impl Into<String>, value: FrontmatterValue) {
        self.fields.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.fields.get(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// Renders a frontmatter block, delimiters included, with keys in sorted order.
impl fmt::Display for FrontmatterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.fields.keys().collect();
        keys.sort();
        writeln!(f, "---")?;
        for key in keys {
            writeln!(f, "{key}: {}", self.fields[key])?;
        }
        writeln!(f, "---")
    }
}

impl FromIterator<(String, FrontmatterValue)> for FrontmatterRecord {
    fn from_iter<I: IntoIterator<Item = (String, FrontmatterValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
