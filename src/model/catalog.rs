//! Catalog: owns every author, magazine and article

use super::article::{Article, ArticleId};
use super::author::{Author, AuthorId};
use super::magazine::{Magazine, MagazineId};
use super::reference::EntityRef;
use super::value::{self, Field, FieldValue};
use crate::config::Limits;
use crate::query::{AuthorView, MagazineView};
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// A field value violated its constraint
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} must be a string, got {found}")]
    NotAString { field: Field, found: &'static str },

    #[error("{field} must be a non-empty string")]
    Empty { field: Field },

    #[error("{field} must be between {min} and {max} characters inclusive, got {len}")]
    Length {
        field: Field,
        min: usize,
        max: usize,
        len: usize,
    },
}

/// A cross-entity reference did not resolve to the expected kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeMismatchError {
    #[error("author must be an Author in this catalog, got {0}")]
    NotAnAuthor(EntityRef),

    #[error("magazine must be a Magazine in this catalog, got {0}")]
    NotAMagazine(EntityRef),
}

/// Errors that can occur in catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),

    #[error("Magazine not found: {0}")]
    MagazineNotFound(MagazineId),

    #[error("Article not found: {0}")]
    ArticleNotFound(ArticleId),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Arena holding the author/magazine/article graph
///
/// Entities refer to each other by id only. The article list doubles as the
/// registry of every article ever constructed: it is append-only and is
/// emptied only by [`Catalog::reset`].
#[derive(Debug, Default, Serialize)]
pub struct Catalog {
    limits: Limits,
    authors: HashMap<AuthorId, Author>,
    magazines: HashMap<MagazineId, Magazine>,
    articles: Vec<Article>,
}

impl Catalog {
    /// Create an empty catalog with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with the given limits
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Default::default()
        }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    // === Construction ===

    /// Add an author; the name must be a non-empty string
    pub fn add_author(&mut self, name: impl Into<FieldValue>) -> CatalogResult<AuthorId> {
        let name = value::non_empty(Field::AuthorName, name.into())?;
        let author = Author::new(name);
        let id = author.id();
        tracing::debug!(author = %id, name = author.name(), "author added");
        self.authors.insert(id, author);
        Ok(id)
    }

    /// Add a magazine; the name must fit the configured length range and the
    /// category must be a non-empty string
    pub fn add_magazine(
        &mut self,
        name: impl Into<FieldValue>,
        category: impl Into<FieldValue>,
    ) -> CatalogResult<MagazineId> {
        let name = value::bounded(Field::MagazineName, name.into(), self.limits.magazine_name)?;
        let category = value::non_empty(Field::MagazineCategory, category.into())?;
        let magazine = Magazine::new(name, category);
        let id = magazine.id();
        tracing::debug!(
            magazine = %id,
            name = magazine.name(),
            category = magazine.category(),
            "magazine added"
        );
        self.magazines.insert(id, magazine);
        Ok(id)
    }

    /// Construct an article and link it to its author and magazine
    ///
    /// The title, author and magazine are all validated, in that order, before
    /// anything is registered, so a failure leaves the catalog untouched. On
    /// success the article is appended to the author's list (and its magazine
    /// to the author's magazine set), to the magazine's list, and to the
    /// registry.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn create_article(
        &mut self,
        author: impl Into<EntityRef>,
        magazine: impl Into<EntityRef>,
        title: impl Into<FieldValue>,
    ) -> CatalogResult<ArticleId> {
        let title = value::bounded(Field::ArticleTitle, title.into(), self.limits.title)?;
        let author = lookup_author(&mut self.authors, author.into())?;
        let magazine = lookup_magazine(&mut self.magazines, magazine.into())?;

        let article = Article::new(title, author.id(), magazine.id());
        let id = article.id();
        author.register(id, magazine.id());
        magazine.register(id);
        tracing::debug!(
            article = %id,
            author = %article.author(),
            magazine = %article.magazine(),
            title = article.title(),
            "article registered"
        );
        self.articles.push(article);
        Ok(id)
    }

    /// Write a new article as `author` in `magazine`
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: impl Into<EntityRef>,
        title: impl Into<FieldValue>,
    ) -> CatalogResult<ArticleId> {
        self.create_article(author, magazine, title)
    }

    // === Mutation ===

    /// Rename a magazine
    ///
    /// Non-string values are ignored and leave the current name in place.
    /// String values outside the configured length range are rejected.
    pub fn set_magazine_name(
        &mut self,
        id: MagazineId,
        name: impl Into<FieldValue>,
    ) -> CatalogResult<()> {
        let range = self.limits.magazine_name;
        let magazine = self
            .magazines
            .get_mut(&id)
            .ok_or(CatalogError::MagazineNotFound(id))?;
        let name = name.into();
        if name.as_str().is_none() {
            tracing::trace!(magazine = %id, found = name.kind(), "ignoring non-string magazine name");
            return Ok(());
        }
        let name = value::bounded(Field::MagazineName, name, range)?;
        tracing::trace!(magazine = %id, name = %name, "magazine renamed");
        magazine.set_name(name);
        Ok(())
    }

    /// Change a magazine's category; must be a non-empty string
    pub fn set_magazine_category(
        &mut self,
        id: MagazineId,
        category: impl Into<FieldValue>,
    ) -> CatalogResult<()> {
        let magazine = self
            .magazines
            .get_mut(&id)
            .ok_or(CatalogError::MagazineNotFound(id))?;
        let category = value::non_empty(Field::MagazineCategory, category.into())?;
        tracing::trace!(magazine = %id, category = %category, "magazine category changed");
        magazine.set_category(category);
        Ok(())
    }

    /// Point an article at a different author
    ///
    /// Only the article's own reference changes. The previous author keeps the
    /// article in its list and the new author does not gain it.
    pub fn set_article_author(
        &mut self,
        article: ArticleId,
        author: impl Into<EntityRef>,
    ) -> CatalogResult<()> {
        let author = lookup_author(&mut self.authors, author.into())?.id();
        let article = self.article_mut(article)?;
        tracing::trace!(article = %article.id(), from = %article.author(), to = %author, "article author reassigned");
        article.set_author(author);
        Ok(())
    }

    /// Point an article at a different magazine
    ///
    /// Same caveat as [`Catalog::set_article_author`]: neither magazine's list
    /// nor the author's magazine set is updated.
    pub fn set_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: impl Into<EntityRef>,
    ) -> CatalogResult<()> {
        let magazine = lookup_magazine(&mut self.magazines, magazine.into())?.id();
        let article = self.article_mut(article)?;
        tracing::trace!(article = %article.id(), from = %article.magazine(), to = %magazine, "article magazine reassigned");
        article.set_magazine(magazine);
        Ok(())
    }

    /// Drop every entity, including the article registry
    pub fn reset(&mut self) {
        tracing::debug!(articles = self.articles.len(), "catalog reset");
        self.authors.clear();
        self.magazines.clear();
        self.articles.clear();
    }

    // === Lookup ===

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.get(&id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.magazines.get(&id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id() == id)
    }

    /// Query view over an author
    pub fn author_view(&self, id: AuthorId) -> Option<AuthorView<'_>> {
        AuthorView::new(self, id)
    }

    /// Query view over a magazine
    pub fn magazine_view(&self, id: MagazineId) -> Option<MagazineView<'_>> {
        MagazineView::new(self, id)
    }

    /// All authors, in no particular order
    pub fn authors(&self) -> impl Iterator<Item = &Author> {
        self.authors.values()
    }

    /// All magazines, in no particular order
    pub fn magazines(&self) -> impl Iterator<Item = &Magazine> {
        self.magazines.values()
    }

    /// Every article ever constructed, in construction order
    pub fn all_articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Render the whole catalog as pretty-printed JSON
    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn article_mut(&mut self, id: ArticleId) -> CatalogResult<&mut Article> {
        self.articles
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(CatalogError::ArticleNotFound(id))
    }
}

fn lookup_author(
    authors: &mut HashMap<AuthorId, Author>,
    reference: EntityRef,
) -> Result<&mut Author, TypeMismatchError> {
    let found = match reference {
        EntityRef::Author(id) => authors.get_mut(&id),
        _ => None,
    };
    found.ok_or(TypeMismatchError::NotAnAuthor(reference))
}

fn lookup_magazine(
    magazines: &mut HashMap<MagazineId, Magazine>,
    reference: EntityRef,
) -> Result<&mut Magazine, TypeMismatchError> {
    let found = match reference {
        EntityRef::Magazine(id) => magazines.get_mut(&id),
        _ => None,
    };
    found.ok_or(TypeMismatchError::NotAMagazine(reference))
}
