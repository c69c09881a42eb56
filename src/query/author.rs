//! Read-side queries over a single author

use crate::model::{Article, Author, AuthorId, Catalog, MagazineId};
use std::collections::{BTreeSet, HashSet};

/// Borrowed view of an author within its catalog
#[derive(Debug, Clone, Copy)]
pub struct AuthorView<'a> {
    catalog: &'a Catalog,
    author: &'a Author,
}

impl<'a> AuthorView<'a> {
    /// Create a view, or `None` if the author is not in the catalog
    pub fn new(catalog: &'a Catalog, id: AuthorId) -> Option<Self> {
        let author = catalog.author(id)?;
        Some(Self { catalog, author })
    }

    pub fn id(&self) -> AuthorId {
        self.author.id()
    }

    pub fn name(&self) -> &'a str {
        self.author.name()
    }

    /// Articles written by this author, oldest first
    pub fn articles(&self) -> Vec<&'a Article> {
        self.author
            .articles()
            .iter()
            .filter_map(|id| self.catalog.article(*id))
            .collect()
    }

    /// Distinct magazines this author has been published in
    pub fn magazines(&self) -> HashSet<MagazineId> {
        self.author.magazines().clone()
    }

    /// Distinct categories across the author's magazines
    ///
    /// Returns `None` rather than an empty set when the author has not been
    /// published anywhere yet. Categories are read at call time, so a
    /// magazine's category change is reflected immediately.
    pub fn topic_areas(&self) -> Option<BTreeSet<&'a str>> {
        if self.author.magazines().is_empty() {
            return None;
        }
        Some(
            self.author
                .magazines()
                .iter()
                .filter_map(|id| self.catalog.magazine(*id))
                .map(|m| m.category())
                .collect(),
        )
    }
}
