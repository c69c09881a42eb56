//! Aggregate queries over the catalog
//!
//! Views borrow the catalog and recompute every result on each call; nothing
//! is cached.

mod author;
mod magazine;

pub use author::AuthorView;
pub use magazine::MagazineView;
