//! Periodical: Author / Magazine / Article Relationship Model
//!
//! An in-memory model of authors writing articles for magazines, with the
//! links kept consistent in both directions and aggregate queries over them.
//!
//! # Core Concepts
//!
//! - **Catalog**: Owns every entity and hands out typed ids
//! - **Author**: Writes articles; tracks the magazines contributed to
//! - **Magazine**: Publishes articles under a name and category
//! - **Article**: The edge joining one author to one magazine
//!
//! # Example
//!
//! ```
//! use periodical::Catalog;
//!
//! let mut catalog = Catalog::new();
//! let jane = catalog.add_author("Jane Doe").unwrap();
//! let tech = catalog.add_magazine("TechWeekly", "Tech").unwrap();
//! catalog.add_article(jane, tech, "A Study On Systems").unwrap();
//!
//! let titles = catalog.magazine_view(tech).unwrap().article_titles();
//! assert_eq!(titles, Some(vec!["A Study On Systems"]));
//! ```

pub mod config;
mod model;
pub mod query;

pub use config::{ConfigError, LengthRange, Limits};
pub use model::{
    Article, ArticleId, Author, AuthorId, Catalog, CatalogError, CatalogResult, EntityRef, Field,
    FieldValue, Magazine, MagazineId, TypeMismatchError, ValidationError,
};
pub use query::{AuthorView, MagazineView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
