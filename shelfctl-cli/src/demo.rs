//! The fixed demo sequence
//!
//! Strictly sequential and fail-fast: each step runs only if the previous
//! one succeeded, and any error propagates straight out to main. Generated
//! ids are captured from the insert results instead of assuming fresh
//! sequence values.

use anyhow::Result;
use tracing::info;

use shelfctl_core::{NewAuthor, NewBook, NewMember};
use shelfctl_db::CatalogClient;

pub async fn run(client: &CatalogClient) -> Result<()> {
    // Seed insert: a no-op when this email is already present.
    let seeded = client
        .seed_author(NewAuthor::new("J.K. Rowling", "jk.rowling@codeheim.io"))
        .await?;
    info!(author_id = seeded.id, "seed author in place");

    // One transaction: second author, a book referencing the seeded author,
    // and a member. All three commit or none persist.
    let entry = client
        .record_catalog_entry(
            NewAuthor::new("George R.R. Martin", "george.martin@codeheim.io"),
            NewBook::new("Harry Potter", seeded.id, 1997, "Fantasy"),
            NewMember::new("John Doe", "john.doe@example.com"),
        )
        .await?;

    let authors = client.list_authors().await?;
    println!("Authors: {}", serde_json::to_string(&authors)?);

    let book = client.find_book_by_title("Harry Potter").await?;
    println!("Book Details: {}", serde_json::to_string(&book)?);

    client
        .rename_author(seeded.id, "J.K. Rowling Updated")
        .await?;
    println!("Author updated successfully");

    client.delete_book(entry.book.id).await?;
    println!("Book deleted successfully");

    Ok(())
}
