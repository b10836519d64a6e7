//! `frontcheck.yaml` registry file
//!
//! ```yaml
//! collections:
//!   - name: blog
//!     dir: ../posts
//!     schema: blog
//!   - name: notes
//!     dir: notes
//!     schema:
//!       fields:
//!         - { name: title, type: string }
//!         - { name: tags, type: string-list, required: false }
//! ```
//!
//! Relative `dir` values resolve against the directory holding the file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_yaml::Value;

use super::{Collection, SchemaRegistry};
use crate::error::{
    Result, config_invalid, config_not_found, config_parse_failed, config_read_failed,
    unknown_schema,
};
use crate::schema::{FieldSpec, ObjectSchema, Schema, builtin_schema};

/// Registry file looked up in the project base when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "frontcheck.yaml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    collections: Vec<CollectionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CollectionEntry {
    name: String,
    dir: PathBuf,
    schema: SchemaRef,
}

/// `schema:` value: a built-in name or an inline `fields:` list
#[derive(Debug)]
enum SchemaRef {
    Builtin(String),
    Inline { fields: Vec<FieldSpec> },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InlineSchema {
    fields: Vec<FieldSpec>,
}

impl<'de> Deserialize<'de> for SchemaRef {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(name) => Ok(SchemaRef::Builtin(name)),
            mapping @ Value::Mapping(_) => serde_yaml::from_value::<InlineSchema>(mapping)
                .map(|inline| SchemaRef::Inline {
                    fields: inline.fields,
                })
                .map_err(|e| de::Error::custom(format!("invalid inline schema: {e}"))),
            _ => Err(de::Error::custom(
                "schema must be a built-in name or a mapping with a `fields:` list",
            )),
        }
    }
}

impl SchemaRef {
    fn resolve(self) -> Result<Arc<dyn Schema>> {
        let schema = match self {
            SchemaRef::Builtin(name) => builtin_schema(&name).ok_or_else(|| unknown_schema(name))?,
            SchemaRef::Inline { fields } => ObjectSchema::new(fields)?,
        };
        Ok(Arc::new(schema))
    }
}

impl SchemaRegistry {
    /// Parse registry YAML; relative directories are joined onto `config_dir`
    ///
    /// # Errors
    ///
    /// Returns a parse error for malformed YAML and `ConfigInvalid` or
    /// `UnknownSchema` for well-formed files that declare nothing usable.
    pub fn from_yaml(yaml: &str, config_dir: &Path) -> Result<Self> {
        let file: RegistryFile = serde_yaml::from_str(yaml)?;
        if file.collections.is_empty() {
            return Err(config_invalid("no collections declared"));
        }

        let mut registry = SchemaRegistry::new();
        for entry in file.collections {
            let name = entry.name.trim().to_string();
            if name.is_empty() {
                return Err(config_invalid("collection name must not be empty"));
            }
            if registry.collections().iter().any(|c| c.name == name) {
                return Err(config_invalid(format!(
                    "collection '{name}' is declared more than once"
                )));
            }
            let root = config_dir.join(&entry.dir);
            let schema = entry.schema.resolve()?;
            tracing::debug!(collection = %name, root = %root.display(), "registered collection");
            registry.add(Collection::new(name, root, schema));
        }
        Ok(registry)
    }

    /// Read and parse a registry file
    ///
    /// # Errors
    ///
    /// See [`SchemaRegistry::from_yaml`]; read and parse failures carry the path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| config_read_failed(path.display().to_string(), e.to_string()))?;
        let config_dir = path.parent().unwrap_or_else(|| Path::new("."));

        Self::from_yaml(&yaml, config_dir).map_err(|err| match err {
            crate::error::FrontcheckError::ConfigParseFailed { reason, .. } => {
                config_parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }
}

/// Pick the registry for a run.
///
/// An explicit config path must exist. Without one, `<base>/frontcheck.yaml`
/// is used when present, and the built-in site layout otherwise.
///
/// # Errors
///
/// Returns `ConfigNotFound` for a missing explicit file, or any error from
/// [`SchemaRegistry::from_file`].
pub fn load_registry(config: Option<&Path>, base: &Path) -> Result<SchemaRegistry> {
    if let Some(path) = config {
        if !path.is_file() {
            return Err(config_not_found(path.display().to_string()));
        }
        tracing::debug!(config = %path.display(), "loading registry file");
        return SchemaRegistry::from_file(path);
    }

    let discovered = base.join(CONFIG_FILE_NAME);
    if discovered.is_file() {
        tracing::debug!(config = %discovered.display(), "found registry file in project base");
        return SchemaRegistry::from_file(&discovered);
    }

    tracing::debug!(base = %base.display(), "using built-in collections");
    Ok(SchemaRegistry::site_defaults(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrontcheckError;
    use crate::frontmatter::parse_frontmatter;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_and_inline_schemas() {
        let yaml = r"
collections:
  - name: blog
    dir: ../posts
    schema: blog
  - name: notes
    dir: notes
    schema:
      fields:
        - { name: title, type: string }
        - { name: tags, type: string-list, required: false }
";
        let registry = SchemaRegistry::from_yaml(yaml, Path::new("/site")).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.collections()[0].root, PathBuf::from("/site/../posts"));
        assert_eq!(registry.collections()[1].root, PathBuf::from("/site/notes"));

        let record = parse_frontmatter("---\ntitle: hi\n---\n").unwrap();
        assert!(registry.collections()[1].schema.validate(&record).is_ok());
        assert!(registry.collections()[0].schema.validate(&record).is_err());
    }

    #[test]
    fn test_absolute_dir_is_kept() {
        let yaml = "collections:\n  - { name: docs, dir: /content/docs, schema: examples }\n";
        let registry = SchemaRegistry::from_yaml(yaml, Path::new("/site")).unwrap();
        assert_eq!(registry.collections()[0].root, PathBuf::from("/content/docs"));
    }

    #[test]
    fn test_unknown_builtin_schema() {
        let yaml = "collections:\n  - { name: pages, dir: pages, schema: pages }\n";
        let err = SchemaRegistry::from_yaml(yaml, Path::new(".")).unwrap_err();
        assert!(matches!(err, FrontcheckError::UnknownSchema { name } if name == "pages"));
    }

    #[test]
    fn test_empty_collections_rejected() {
        let err = SchemaRegistry::from_yaml("collections: []\n", Path::new(".")).unwrap_err();
        assert!(matches!(err, FrontcheckError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_duplicate_collection_rejected() {
        let yaml = "collections:\n  - { name: a, dir: a, schema: blog }\n  - { name: a, dir: b, schema: blog }\n";
        let err = SchemaRegistry::from_yaml(yaml, Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("declared more than once"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let yaml = "collections:\n  - { name: a, dir: a, schema: blog, glob: '*.md' }\n";
        let err = SchemaRegistry::from_yaml(yaml, Path::new(".")).unwrap_err();
        assert!(matches!(err, FrontcheckError::ConfigParseFailed { .. }));
    }

    #[test]
    fn test_inline_field_typo_names_the_field_type() {
        let yaml = r"
collections:
  - name: notes
    dir: notes
    schema:
      fields:
        - { name: title, type: strng }
";
        let err = SchemaRegistry::from_yaml(yaml, Path::new(".")).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, FrontcheckError::ConfigParseFailed { .. }));
        assert!(message.contains("invalid inline schema"), "got: {message}");
        assert!(message.contains("strng"), "got: {message}");
        assert!(!message.contains("untagged"), "got: {message}");
    }

    #[test]
    fn test_schema_of_wrong_shape_rejected() {
        let yaml = "collections:\n  - { name: a, dir: a, schema: [blog] }\n";
        let err = SchemaRegistry::from_yaml(yaml, Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("must be a built-in name"));
    }

    #[test]
    fn test_from_file_reports_path_on_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "collections: [unclosed").unwrap();

        let err = SchemaRegistry::from_file(&path).unwrap_err();
        match err {
            FrontcheckError::ConfigParseFailed { path: reported, .. } => {
                assert!(reported.ends_with(CONFIG_FILE_NAME));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_registry_explicit_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yaml");
        let err = load_registry(Some(&missing), temp.path()).unwrap_err();
        assert!(matches!(err, FrontcheckError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_registry_discovers_base_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "collections:\n  - { name: docs, dir: docs, schema: examples }\n",
        )
        .unwrap();

        let registry = load_registry(None, temp.path()).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.collections()[0].root, temp.path().join("docs"));
    }

    #[test]
    fn test_load_registry_falls_back_to_site_defaults() {
        let temp = TempDir::new().unwrap();
        let registry = load_registry(None, temp.path()).unwrap();
        let names: Vec<&str> = registry.collections().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["blog", "examples"]);
    }
}
