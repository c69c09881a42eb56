//! Catalog builders for integration tests

use periodical::{AuthorId, Catalog, Limits, MagazineId};
use std::collections::HashMap;

/// A populated catalog plus name lookups for its entities
pub struct Seeded {
    pub catalog: Catalog,
    pub authors: HashMap<&'static str, AuthorId>,
    pub magazines: HashMap<&'static str, MagazineId>,
}

impl Seeded {
    pub fn author(&self, name: &str) -> AuthorId {
        self.authors[name]
    }

    pub fn magazine(&self, name: &str) -> MagazineId {
        self.magazines[name]
    }
}

/// Declarative builder for test catalogs
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    limits: Limits,
    authors: Vec<&'static str>,
    magazines: Vec<(&'static str, &'static str)>,
    articles: Vec<(&'static str, &'static str, String)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn author(mut self, name: &'static str) -> Self {
        self.authors.push(name);
        self
    }

    pub fn magazine(mut self, name: &'static str, category: &'static str) -> Self {
        self.magazines.push((name, category));
        self
    }

    /// Queue `count` articles by `author` in `magazine`, with generated titles
    pub fn articles(mut self, author: &'static str, magazine: &'static str, count: usize) -> Self {
        for i in 0..count {
            let title = format!("{} in {} #{}", author, magazine, i + 1);
            self.articles.push((author, magazine, title));
        }
        self
    }

    pub fn build(self) -> Seeded {
        let mut catalog = Catalog::with_limits(self.limits);
        let authors: HashMap<_, _> = self
            .authors
            .into_iter()
            .map(|name| (name, catalog.add_author(name).expect("valid author name")))
            .collect();
        let magazines: HashMap<_, _> = self
            .magazines
            .into_iter()
            .map(|(name, category)| {
                let id = catalog
                    .add_magazine(name, category)
                    .expect("valid magazine name and category");
                (name, id)
            })
            .collect();
        for (author, magazine, title) in self.articles {
            catalog
                .add_article(authors[author], magazines[magazine], title)
                .expect("valid article");
        }
        Seeded {
            catalog,
            authors,
            magazines,
        }
    }
}
