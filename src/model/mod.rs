//! Core entity types and the catalog that owns them

mod article;
mod author;
mod catalog;
mod magazine;
mod reference;
mod value;


pub use article::{Article, ArticleId};
pub use author::{Author, AuthorId};
pub use catalog::{Catalog, CatalogError, CatalogResult, TypeMismatchError, ValidationError};
pub use magazine::{Magazine, MagazineId};
pub use reference::EntityRef;
pub use value::{Field, FieldValue};
