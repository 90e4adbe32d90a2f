//! Catalog client - the six operations the tool performs
//!
//! Holds a `PgPool` passed in at construction, never a process-wide global,
//! so tests can point a client at a disposable database.

use sqlx::PgPool;
use tracing::debug;

use shelfctl_core::{
    Author, Book, CatalogEntry, CatalogError, Member, NewAuthor, NewBook, NewMember, Result,
};

/// Catalog client over a pooled PostgreSQL connection
#[derive(Debug, Clone)]
pub struct CatalogClient {
    pool: PgPool,
}

impl CatalogClient {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Insert an author, ignoring the insert when the email already exists.
    ///
    /// Always returns the surviving row: the freshly inserted one, or the
    /// pre-existing row for that email when the conflict suppressed the
    /// insert. Seeding the same email twice leaves exactly one row.
    pub async fn seed_author(&self, author: NewAuthor) -> Result<Author> {
        let inserted: Option<Author> = sqlx::query_as(
            r#"
            INSERT INTO authors (name, email)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, name, email
            "#,
        )
        .bind(&author.name)
        .bind(&author.email)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = inserted {
            debug!(author_id = row.id, "seeded author");
            return Ok(row);
        }

        // Conflict path: the row for this email already exists.
        let existing: Author =
            sqlx::query_as("SELECT id, name, email FROM authors WHERE email = $1")
                .bind(&author.email)
                .fetch_one(&self.pool)
                .await?;
        debug!(author_id = existing.id, "author already seeded");
        Ok(existing)
    }

    /// Insert an author, a book, and a member in one transaction.
    ///
    /// All three rows persist or none do. Any failure returns the error and
    /// the dropped transaction rolls back; success requires the explicit
    /// commit at the end. Generated ids come back via RETURNING so callers
    /// never guess at sequence values.
    pub async fn record_catalog_entry(
        &self,
        author: NewAuthor,
        book: NewBook,
        member: NewMember,
    ) -> Result<CatalogEntry> {
        let mut tx = self.pool.begin().await?;

        let author: Author = sqlx::query_as(
            r#"
            INSERT INTO authors (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(&author.name)
        .bind(&author.email)
        .fetch_one(&mut *tx)
        .await?;

        let book: Book = sqlx::query_as(
            r#"
            INSERT INTO books (title, author_id, published_year, genre)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author_id, published_year, genre
            "#,
        )
        .bind(&book.title)
        .bind(book.author_id)
        .bind(book.published_year)
        .bind(&book.genre)
        .fetch_one(&mut *tx)
        .await?;

        let member: Member = sqlx::query_as(
            r#"
            INSERT INTO members (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email, join_date
            "#,
        )
        .bind(&member.name)
        .bind(&member.email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!(
            author_id = author.id,
            book_id = book.id,
            member_id = member.id,
            "catalog entry committed"
        );

        Ok(CatalogEntry {
            author,
            book,
            member,
        })
    }

    /// List all authors, materialized before returning.
    ///
    /// Ordered by id so repeated runs print the same sequence.
    pub async fn list_authors(&self) -> Result<Vec<Author>> {
        let authors = sqlx::query_as("SELECT id, name, email FROM authors ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    /// Find one book by exact title.
    ///
    /// With duplicate titles the lowest id wins; zero matches is a NotFound
    /// error rather than whatever row the engine happens to return first.
    pub async fn find_book_by_title(&self, title: &str) -> Result<Book> {
        sqlx::query_as(
            r#"
            SELECT id, title, author_id, published_year, genre
            FROM books
            WHERE title = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| CatalogError::not_found("book", title))
    }

    /// Rename an author by id.
    ///
    /// Unconditional update; a missing id affects zero rows and is not an
    /// error. Returns the number of rows changed.
    pub async fn rename_author(&self, id: i32, new_name: &str) -> Result<u64> {
        let result = sqlx::query("UPDATE authors SET name = $1 WHERE id = $2")
            .bind(new_name)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a book by id.
    ///
    /// Same no-op-on-missing-id contract as [`rename_author`].
    ///
    /// [`rename_author`]: CatalogClient::rename_author
    pub async fn delete_book(&self, id: i32) -> Result<u64> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MIGRATOR;

    // Provisioned per-test by sqlx against DATABASE_URL
    // Run with: DATABASE_URL=postgres://... cargo test -p shelfctl-db -- --ignored

    fn rowling() -> NewAuthor {
        NewAuthor::new("J.K. Rowling", "jk.rowling@codeheim.io")
    }

    async fn table_counts(pool: &PgPool) -> (i64, i64, i64) {
        let authors: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM authors")
            .fetch_one(pool)
            .await
            .unwrap();
        let books: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(pool)
            .await
            .unwrap();
        let members: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM members")
            .fetch_one(pool)
            .await
            .unwrap();
        (authors.0, books.0, members.0)
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn seed_author_is_idempotent(pool: PgPool) {
        let client = CatalogClient::new(pool.clone());

        let first = client.seed_author(rowling()).await.unwrap();
        let second = client.seed_author(rowling()).await.unwrap();

        assert_eq!(first.id, second.id);
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM authors WHERE email = $1")
            .bind("jk.rowling@codeheim.io")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn catalog_entry_commits_all_three_rows(pool: PgPool) {
        let client = CatalogClient::new(pool.clone());
        let seeded = client.seed_author(rowling()).await.unwrap();

        let entry = client
            .record_catalog_entry(
                NewAuthor::new("George R.R. Martin", "george.martin@codeheim.io"),
                NewBook::new("Harry Potter", seeded.id, 1997, "Fantasy"),
                NewMember::new("John Doe", "john.doe@example.com"),
            )
            .await
            .unwrap();

        assert_eq!(entry.book.author_id, seeded.id);
        let (authors, books, members) = table_counts(&pool).await;
        assert_eq!((authors, books, members), (2, 1, 1));
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn catalog_entry_rolls_back_on_failure(pool: PgPool) {
        let client = CatalogClient::new(pool.clone());

        // Book references an author id that does not exist, so the second
        // insert violates the foreign key mid-transaction.
        let result = client
            .record_catalog_entry(
                NewAuthor::new("George R.R. Martin", "george.martin@codeheim.io"),
                NewBook::new("Harry Potter", 9999, 1997, "Fantasy"),
                NewMember::new("John Doe", "john.doe@example.com"),
            )
            .await;

        assert!(matches!(result, Err(CatalogError::Database { .. })));
        let (authors, books, members) = table_counts(&pool).await;
        assert_eq!((authors, books, members), (0, 0, 0));
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn list_authors_matches_table_count(pool: PgPool) {
        let client = CatalogClient::new(pool.clone());
        client.seed_author(rowling()).await.unwrap();
        client
            .seed_author(NewAuthor::new(
                "George R.R. Martin",
                "george.martin@codeheim.io",
            ))
            .await
            .unwrap();

        let authors = client.list_authors().await.unwrap();
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM authors")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(authors.len() as i64, count.0);
        assert!(authors.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn find_book_returns_seeded_author_reference(pool: PgPool) {
        let client = CatalogClient::new(pool.clone());
        let seeded = client.seed_author(rowling()).await.unwrap();
        client
            .record_catalog_entry(
                NewAuthor::new("George R.R. Martin", "george.martin@codeheim.io"),
                NewBook::new("Harry Potter", seeded.id, 1997, "Fantasy"),
                NewMember::new("John Doe", "john.doe@example.com"),
            )
            .await
            .unwrap();

        let book = client.find_book_by_title("Harry Potter").await.unwrap();
        assert_eq!(book.author_id, seeded.id);
        assert_eq!(book.published_year, 1997);
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn rename_author_round_trips(pool: PgPool) {
        let client = CatalogClient::new(pool.clone());
        let seeded = client.seed_author(rowling()).await.unwrap();

        let changed = client.rename_author(seeded.id, "X").await.unwrap();
        assert_eq!(changed, 1);

        let authors = client.list_authors().await.unwrap();
        let renamed = authors.iter().find(|a| a.id == seeded.id).unwrap();
        assert_eq!(renamed.name, "X");

        // Missing id: completes without error, changes nothing.
        let changed = client.rename_author(seeded.id + 1000, "Y").await.unwrap();
        assert_eq!(changed, 0);
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires database"]
    async fn delete_book_then_find_is_not_found(pool: PgPool) {
        let client = CatalogClient::new(pool.clone());
        let seeded = client.seed_author(rowling()).await.unwrap();
        let entry = client
            .record_catalog_entry(
                NewAuthor::new("George R.R. Martin", "george.martin@codeheim.io"),
                NewBook::new("Harry Potter", seeded.id, 1997, "Fantasy"),
                NewMember::new("John Doe", "john.doe@example.com"),
            )
            .await
            .unwrap();

        let removed = client.delete_book(entry.book.id).await.unwrap();
        assert_eq!(removed, 1);

        let result = client.find_book_by_title("Harry Potter").await;
        assert!(matches!(result, Err(CatalogError::NotFound { .. })));

        // Deleting again is a no-op, not an error.
        let removed = client.delete_book(entry.book.id).await.unwrap();
        assert_eq!(removed, 0);
    }
}
