//! Untyped references across entity kinds

use super::article::ArticleId;
use super::author::AuthorId;
use super::magazine::MagazineId;
use serde::{Deserialize, Serialize};

/// A reference to any catalog entity
///
/// Operations that link entities accept `impl Into<EntityRef>`, then check
/// that the reference has the expected kind and resolves in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum EntityRef {
    Author(AuthorId),
    Magazine(MagazineId),
    Article(ArticleId),
}

impl std::fmt::Display for EntityRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityRef::Author(id) => write!(f, "author {}", id),
            EntityRef::Magazine(id) => write!(f, "magazine {}", id),
            EntityRef::Article(id) => write!(f, "article {}", id),
        }
    }
}

impl From<AuthorId> for EntityRef {
    fn from(id: AuthorId) -> Self {
        EntityRef::Author(id)
    }
}

impl From<MagazineId> for EntityRef {
    fn from(id: MagazineId) -> Self {
        EntityRef::Magazine(id)
    }
}

impl From<ArticleId> for EntityRef {
    fn from(id: ArticleId) -> Self {
        EntityRef::Article(id)
    }
}
