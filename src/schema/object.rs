//! Declarative object schema over flat frontmatter records

use std::collections::HashSet;

use serde::Deserialize;
use url::Url;

use super::date::parse_date;
use super::{Issue, REQUIRED_MESSAGE, Schema};
use crate::error::{Result, config_invalid};
use crate::frontmatter::{FrontmatterRecord, FrontmatterValue};

/// Accepted shape of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    String,
    /// Absolute URL
    Url,
    /// String coerced to a date, see [`parse_date`]
    Date,
    Boolean,
    StringList,
}

impl FieldKind {
    /// Name used in type mismatch messages
    fn expected(self) -> &'static str {
        match self {
            FieldKind::String | FieldKind::Url => "string",
            FieldKind::Date => "date",
            FieldKind::Boolean => "boolean",
            FieldKind::StringList => "array",
        }
    }

    fn check(self, value: &FrontmatterValue) -> Option<String> {
        let mismatch = || format!("Expected {}, received {}", self.expected(), value.type_name());

        match (self, value) {
            (FieldKind::String, FrontmatterValue::String(_))
            | (FieldKind::Boolean, FrontmatterValue::Bool(_))
            | (FieldKind::StringList, FrontmatterValue::List(_)) => None,
            (FieldKind::Url, FrontmatterValue::String(s)) => {
                Url::parse(s).err().map(|_| "Invalid url".to_string())
            }
            (FieldKind::Date, FrontmatterValue::String(s)) => {
                parse_date(s).is_none().then(|| "Invalid date".to_string())
            }
            _ => Some(mismatch()),
        }
    }
}

/// One declared field of an [`ObjectSchema`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSpec {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: FieldKind,

    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl FieldSpec {
    pub fn required(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
        }
    }

    fn check(&self, record: &FrontmatterRecord) -> Option<Issue> {
        match record.get(&self.name) {
            None if self.required => Some(Issue::field(&self.name, REQUIRED_MESSAGE)),
            None => None,
            Some(value) => self
                .kind
                .check(value)
                .map(|message| Issue::field(&self.name, message)),
        }
    }
}

/// Ordered set of fields. Keys not declared here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectSchema {
    fields: Vec<FieldSpec>,
}

impl ObjectSchema {
    /// Build a schema from field specs, rejecting empty or repeated names
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if a field name is empty or declared twice.
    pub fn new(fields: Vec<FieldSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for field in &fields {
            if field.name.trim().is_empty() {
                return Err(config_invalid("schema field name must not be empty"));
            }
            if !seen.insert(field.name.as_str()) {
                return Err(config_invalid(format!(
                    "schema field '{}' is declared more than once",
                    field.name
                )));
            }
        }
        Ok(Self { fields })
    }

    /// Builder-style field addition for hand-written schemas
    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.retain(|f| f.name != spec.name);
        self.fields.push(spec);
        self
    }
}

impl Schema for ObjectSchema {
    fn validate(&self, record: &FrontmatterRecord) -> std::result::Result<(), Vec<Issue>> {
        let issues: Vec<Issue> = self
            .fields
            .iter()
            .filter_map(|field| field.check(record))
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }
}
