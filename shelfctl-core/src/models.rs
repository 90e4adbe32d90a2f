//! Catalog data models
//!
//! Row structs mirror the catalog schema:
//! - Authors: people who write books
//! - Books: titles referencing an author
//! - Members: library members, independent of the other two
//!
//! Each row type has a matching payload struct for inserts, so callers never
//! hand-pick generated ids.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An author row from the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i32,
    pub name: String,
    /// Unique across the authors table
    pub email: String,
}

/// Insert payload for an author
#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
    pub email: String,
}

impl NewAuthor {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A book row from the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    /// References an existing `authors.id`, enforced by the database
    pub author_id: i32,
    pub published_year: i32,
    pub genre: String,
}

/// Insert payload for a book
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author_id: i32,
    pub published_year: i32,
    pub genre: String,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        author_id: i32,
        published_year: i32,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author_id,
            published_year,
            genre: genre.into(),
        }
    }
}

/// A member row from the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Defaulted by the database to the current date on insert
    pub join_date: NaiveDate,
}

/// Insert payload for a member
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub email: String,
}

impl NewMember {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Rows produced by one transactional catalog entry
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub author: Author,
    pub book: Book,
    pub member: Member,
}
