//! Read-side queries over a single magazine

use crate::model::{Article, AuthorId, Catalog, Magazine, MagazineId};
use std::collections::HashSet;

/// Borrowed view of a magazine within its catalog
///
/// Every query resolves each listed article's *current* author, so an
/// article reassigned to another author counts for that author here.
#[derive(Debug, Clone, Copy)]
pub struct MagazineView<'a> {
    catalog: &'a Catalog,
    magazine: &'a Magazine,
}

impl<'a> MagazineView<'a> {
    /// Create a view, or `None` if the magazine is not in the catalog
    pub fn new(catalog: &'a Catalog, id: MagazineId) -> Option<Self> {
        let magazine = catalog.magazine(id)?;
        Some(Self { catalog, magazine })
    }

    pub fn id(&self) -> MagazineId {
        self.magazine.id()
    }

    pub fn name(&self) -> &'a str {
        self.magazine.name()
    }

    pub fn category(&self) -> &'a str {
        self.magazine.category()
    }

    /// Articles published here, oldest first
    pub fn articles(&self) -> Vec<&'a Article> {
        self.magazine
            .articles()
            .iter()
            .filter_map(|id| self.catalog.article(*id))
            .collect()
    }

    /// Titles of published articles in publication order, or `None` if
    /// nothing has been published
    pub fn article_titles(&self) -> Option<Vec<&'a str>> {
        if self.magazine.articles().is_empty() {
            return None;
        }
        Some(self.articles().into_iter().map(Article::title).collect())
    }

    /// Distinct authors of the published articles
    pub fn contributors(&self) -> HashSet<AuthorId> {
        self.articles().into_iter().map(Article::author).collect()
    }

    /// Article count per distinct author, in order of first appearance
    pub fn article_counts(&self) -> Vec<(AuthorId, usize)> {
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for article in self.articles() {
            match counts.iter_mut().find(|(author, _)| *author == article.author()) {
                Some((_, count)) => *count += 1,
                None => counts.push((article.author(), 1)),
            }
        }
        counts
    }

    /// One slot per distinct author, in order of first appearance
    ///
    /// A slot holds the author when their article count here is above the
    /// catalog's contributor threshold, and `None` otherwise; slots are not
    /// filtered out. Returns `None` if nothing has been published.
    pub fn contributing_authors(&self) -> Option<Vec<Option<AuthorId>>> {
        if self.magazine.articles().is_empty() {
            return None;
        }
        let threshold = self.catalog.limits().contributor_threshold;
        Some(
            self.article_counts()
                .into_iter()
                .map(|(author, count)| (count > threshold).then_some(author))
                .collect(),
        )
    }
}
