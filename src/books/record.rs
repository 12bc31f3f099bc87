//! Book record and request body types
//!
//! Bodies are deliberately lax: title/author/year are not validated or typed,
//! and unknown fields persist as given. Only `id` is structural: the server
//! assigns it on creation and it can never be changed afterwards, so any `id`
//! a client sends in a body is discarded.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// The sole domain entity: a book record.
///
/// `id` is the server-assigned unique identifier. Everything else, including
/// the conventional title/author/year attributes, lives in `fields` exactly
/// as the client sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Book {
    /// Create a record with a freshly generated id.
    ///
    /// A client-supplied `id` field is dropped; the generated one wins.
    pub fn create(mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self {
            id: Uuid::new_v4().to_string(),
            fields,
        }
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// Body of a create request: any JSON object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBook {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// Body of an update request: a partial record.
///
/// Fields present here overwrite the existing record's; fields absent are
/// preserved. `id` is never merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookPatch {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl BookPatch {
    /// Shallow-merge this patch over an existing record
    pub fn apply(&self, book: &mut Book) {
        for (key, value) in &self.fields {
            if key == "id" {
                continue;
            }
            book.fields.insert(key.clone(), value.clone());
        }
    }
}
