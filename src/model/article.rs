//! Article: the edge joining an author to a magazine

use super::author::AuthorId;
use super::magazine::MagazineId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(Uuid);

impl ArticleId {
    /// Create a new random ArticleId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ArticleId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An article written by one author and published in one magazine
///
/// Articles are only created through [`Catalog::create_article`], which
/// registers them with both endpoints.
///
/// [`Catalog::create_article`]: super::Catalog::create_article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    title: String,
    author: AuthorId,
    magazine: MagazineId,
    created_at: DateTime<Utc>,
}

impl Article {
    pub(crate) fn new(title: String, author: AuthorId, magazine: MagazineId) -> Self {
        Self {
            id: ArticleId::new(),
            title,
            author,
            magazine,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The current author; may differ from the author whose list holds this
    /// article if it was reassigned
    pub fn author(&self) -> AuthorId {
        self.author
    }

    /// The current magazine; same reassignment caveat as [`Article::author`]
    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    pub(crate) fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}
