//! Schemas for the site's built-in content collections

use super::object::{FieldKind, FieldSpec, ObjectSchema};

/// Blog posts. `draft` is optional; an absent value means not a draft.
pub fn blog_schema() -> ObjectSchema {
    use FieldKind::{Boolean, Date, String, StringList, Url};

    ObjectSchema::default()
        .field(FieldSpec::required("title", String))
        .field(FieldSpec::required("slug", String))
        .field(FieldSpec::required("description", String))
        .field(FieldSpec::required("pubDatetime", Date))
        .field(FieldSpec::optional("modDatetime", Date))
        .field(FieldSpec::optional("tags", StringList))
        .field(FieldSpec::optional("draft", Boolean))
        .field(FieldSpec::optional("featured", Boolean))
        .field(FieldSpec::optional("canonicalURL", Url))
        .field(FieldSpec::optional("examples", StringList))
}

/// Example projects linked from posts
pub fn examples_schema() -> ObjectSchema {
    use FieldKind::{Date, String, StringList, Url};

    ObjectSchema::default()
        .field(FieldSpec::required("title", String))
        .field(FieldSpec::required("slug", String))
        .field(FieldSpec::required("description", String))
        .field(FieldSpec::optional("tags", StringList))
        .field(FieldSpec::required("createdDate", Date))
        .field(FieldSpec::optional("updatedDate", Date))
        .field(FieldSpec::required("repoPath", String))
        .field(FieldSpec::optional("githubUrl", Url))
        .field(FieldSpec::optional("postSlugs", StringList))
}

/// Look up a built-in schema by name
pub fn builtin_schema(name: &str) -> Option<ObjectSchema> {
    match name {
        "blog" => Some(blog_schema()),
        "examples" => Some(examples_schema()),
        _ => None,
    }
}
