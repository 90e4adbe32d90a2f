pub mod config;
pub mod error;
pub mod models;

pub use error::{CatalogError, Result};
pub use models::{Author, Book, CatalogEntry, Member, NewAuthor, NewBook, NewMember};
