//! Stored content lookup for reusable blocks.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::BlockResult;

/// Post type of shared, reusable block content.
pub const REUSABLE_POST_TYPE: &str = "wp_block";

/// A post as returned by the content store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPost {
    #[serde(default = "default_post_type")]
    pub post_type: String,
    pub content: String,
}

fn default_post_type() -> String {
    REUSABLE_POST_TYPE.to_string()
}

impl StoredPost {
    pub fn reusable(content: impl Into<String>) -> Self {
        Self {
            post_type: default_post_type(),
            content: content.into(),
        }
    }

    pub fn is_reusable(&self) -> bool {
        self.post_type == REUSABLE_POST_TYPE
    }
}

/// Resolves the `ref` of a reusable block to its stored post.
pub trait ContentStore {
    fn fetch(&self, id: &str) -> Option<StoredPost>;
}

/// A store with nothing in it; every reference is unresolvable.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyStore;

impl ContentStore for EmptyStore {
    fn fetch(&self, _id: &str) -> Option<StoredPost> {
        None
    }
}

/// In-memory posts keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    posts: HashMap<String, StoredPost>,
}

#[derive(Deserialize)]
struct StoreRecord {
    id: RecordId,
    #[serde(flatten)]
    post: StoredPost,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordId {
    Number(u64),
    Text(String),
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, post: StoredPost) {
        self.posts.insert(id.into(), post);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Load a list of posts:
    ///
    /// ```yaml
    /// - id: 12
    ///   content: '<!-- wp:kadence/advancedheading {"uniqueID":"_h"} /-->'
    /// - id: 13
    ///   post_type: page
    ///   content: ''
    /// ```
    pub fn from_yaml(yaml: &str) -> BlockResult<Self> {
        let records: Vec<StoreRecord> = serde_yaml::from_str(yaml)?;
        let mut store = Self::new();
        for record in records {
            let id = match record.id {
                RecordId::Number(n) => n.to_string(),
                RecordId::Text(s) => s,
            };
            store.insert(id, record.post);
        }
        Ok(store)
    }
}

impl ContentStore for MemoryStore {
    fn fetch(&self, id: &str) -> Option<StoredPost> {
        self.posts.get(id).cloned()
    }
}
