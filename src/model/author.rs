//! Author entity

use super::article::ArticleId;
use super::magazine::MagazineId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for an author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(Uuid);

impl AuthorId {
    /// Create a new random AuthorId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an AuthorId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for AuthorId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A writer of articles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
    /// Authored articles in authorship order
    articles: Vec<ArticleId>,
    /// Magazines contributed to, grown as articles are registered
    magazines: HashSet<MagazineId>,
}

impl Author {
    /// `name` must already be validated
    pub(crate) fn new(name: String) -> Self {
        Self {
            id: AuthorId::new(),
            name,
            articles: Vec::new(),
            magazines: HashSet::new(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Articles written by this author, oldest first
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Distinct magazines this author has been published in
    pub fn magazines(&self) -> &HashSet<MagazineId> {
        &self.magazines
    }

    /// Record a new article and the magazine it appeared in
    pub(crate) fn register(&mut self, article: ArticleId, magazine: MagazineId) {
        self.articles.push(article);
        self.magazines.insert(magazine);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_keeps_order_and_dedupes_magazines() {
        let mut author = Author::new("Jane Doe".into());
        let magazine = MagazineId::new();
        let first = ArticleId::new();
        let second = ArticleId::new();

        author.register(first, magazine);
        author.register(second, magazine);

        assert_eq!(author.articles(), &[first, second]);
        assert_eq!(author.magazines().len(), 1);
        assert!(author.magazines().contains(&magazine));
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(AuthorId::new(), AuthorId::new());
    }
}
