//! Magazine entity

use super::article::ArticleId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a magazine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MagazineId(Uuid);

impl MagazineId {
    /// Create a new random MagazineId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a MagazineId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for MagazineId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MagazineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A publication that articles appear in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    /// Published articles in publication order
    articles: Vec<ArticleId>,
}

impl Magazine {
    /// `name` and `category` must already be validated
    pub(crate) fn new(name: String, category: String) -> Self {
        Self {
            id: MagazineId::new(),
            name,
            category,
            articles: Vec::new(),
        }
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Articles published here, oldest first
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn set_category(&mut self, category: String) {
        self.category = category;
    }

    pub(crate) fn register(&mut self, article: ArticleId) {
        self.articles.push(article);
    }
}
