use super::{Document, DocumentStore, StoreError, StoreResult};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing a document. Path separators in ids are flattened.
    pub fn document_path(&self, id: &str) -> PathBuf {
        let name: String = id
            .chars()
            .map(|c| if c == '/' || c == '\\' { '-' } else { c })
            .collect();
        self.root.join(format!("{}.json", name))
    }

    /// Writes `content` to a temp file in the root, then renames it over
    /// `target`. The temp file is removed if either step fails.
    fn write_atomic(&self, target: &Path, content: &str) -> StoreResult<()> {
        let tmp = self.root.join(format!(".doc-{}.tmp", Uuid::new_v4()));
        let written = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, target));
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp);
            return Err(err.into());
        }
        Ok(())
    }

    fn ensure_dir(&self) -> StoreResult<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn fetch_document(&self, id: &str) -> StoreResult<Option<Document>> {
        let path = self.document_path(id);
        if !path.exists() {
            tracing::debug!(document = id, "document not found");
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(document) => Ok(Some(document)),
            other => Err(StoreError::Malformed {
                document: id.to_string(),
                reason: format!("expected an object, found {}", json_kind(&other)),
            }),
        }
    }

    fn overwrite_field(&mut self, id: &str, field: &str, sequence: Value) -> StoreResult<()> {
        self.ensure_dir()?;

        let mut document = self.fetch_document(id)?.unwrap_or_default();
        document.insert(field.to_string(), sequence);
        let content = serde_json::to_string_pretty(&document)?;

        let target = self.document_path(id);
        self.write_atomic(&target, &content)?;

        tracing::debug!(document = id, field, path = %target.display(), "document written");
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
