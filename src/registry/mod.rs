//! Collection bindings: which schema applies to which content root
//!
//! The registry is an ordered list; collections are validated in the order
//! they were added. It comes either from the built-in site layout
//! ([`SchemaRegistry::site_defaults`]) or from a `frontcheck.yaml` file
//! (see [`file`]).

pub mod file;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::schema::{Schema, blog_schema, examples_schema};

pub use file::load_registry;

/// A named, schema-bound set of content files rooted at one directory
#[derive(Clone)]
pub struct Collection {
    pub name: String,
    pub root: PathBuf,
    pub schema: Arc<dyn Schema>,
}

impl Collection {
    pub fn new(name: impl Into<String>, root: impl Into<PathBuf>, schema: Arc<dyn Schema>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            schema,
        }
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Ordered list of collection bindings
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    collections: Vec<Collection>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in layout for a site directory `base`:
    /// blog posts live in `<base>/../posts`, examples in `<base>/src/data/examples`.
    pub fn site_defaults(base: &Path) -> Self {
        let repo_root = base.join("..");
        Self::new()
            .with(Collection::new(
                "blog",
                repo_root.join("posts"),
                Arc::new(blog_schema()),
            ))
            .with(Collection::new(
                "examples",
                base.join("src").join("data").join("examples"),
                Arc::new(examples_schema()),
            ))
    }

    /// Append a collection, keeping insertion order
    pub fn add(&mut self, collection: Collection) {
        self.collections.push(collection);
    }

    #[must_use]
    pub fn with(mut self, collection: Collection) -> Self {
        self.add(collection);
        self
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }
}
