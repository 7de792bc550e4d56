use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::store::query::RELATED_POSTS_LIMIT;
use crate::store::{ContentStore, Query, StoreError, StoreResult};

/// In-process store over already projected documents.
pub struct MemoryStore {
    documents: Vec<Value>,
    failing: bool,
    issued: Mutex<Vec<Query>>,
}

impl MemoryStore {
    pub fn new(documents: Vec<Value>) -> Self {
        MemoryStore {
            documents,
            failing: false,
            issued: Mutex::new(vec![]),
        }
    }

    pub fn unreachable() -> Self {
        MemoryStore {
            documents: vec![],
            failing: true,
            issued: Mutex::new(vec![]),
        }
    }

    pub fn issued(&self) -> Vec<Query> {
        self.issued.lock().unwrap().clone()
    }

    fn slug_of(doc: &Value) -> Option<&str> {
        doc.pointer("/slug/current").and_then(Value::as_str)
    }

    fn category_of(doc: &Value) -> Option<&str> {
        doc.pointer("/category/slug/current").and_then(Value::as_str)
    }

    fn created_at(doc: &Value) -> &str {
        doc.get("_createdAt").and_then(Value::as_str).unwrap_or("")
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn fetch(&self, query: &Query) -> StoreResult<Value> {
        self.issued.lock().unwrap().push(query.clone());
        if self.failing {
            return Err(StoreError::Status {
                status: 503,
                description: "store unavailable".to_string(),
            });
        }

        let result = match query {
            Query::LatestPosts { window, .. } => {
                let mut docs: Vec<&Value> = self.documents.iter().collect();
                docs.sort_by(|a, b| Self::created_at(b).cmp(Self::created_at(a)));
                let docs = docs
                    .into_iter()
                    .skip(window.offset as usize)
                    .take(window.limit as usize)
                    .cloned()
                    .collect();
                Value::Array(docs)
            }
            Query::PostBySlug { slug } => self
                .documents
                .iter()
                .find(|doc| Self::slug_of(doc) == Some(slug.as_str()))
                .cloned()
                .unwrap_or(Value::Null),
            Query::PostsByCategory { category_slug } => Value::Array(
                self.documents
                    .iter()
                    .filter(|doc| Self::category_of(doc) == Some(category_slug.as_str()))
                    .cloned()
                    .collect(),
            ),
            Query::RelatedPosts { category_slug, exclude_slug } => Value::Array(
                self.documents
                    .iter()
                    .filter(|doc| Self::category_of(doc) == Some(category_slug.as_str()))
                    .filter(|doc| Self::slug_of(doc) != Some(exclude_slug.as_str()))
                    .take(RELATED_POSTS_LIMIT as usize)
                    .cloned()
                    .collect(),
            ),
        };

        Ok(result)
    }
}
