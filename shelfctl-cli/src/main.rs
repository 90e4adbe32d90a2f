//! shelfctl - library catalog demo client
//!
//! Runs a fixed sequence of relational operations against a PostgreSQL
//! catalog (authors, books, members): a conflict-ignoring seed insert, one
//! transactional three-row write, two reads, an update, and a delete.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

mod demo;
mod tracing_setup;

use shelfctl_core::config;
use shelfctl_db::{create_pool, CatalogClient, MIGRATOR};

#[derive(Parser, Debug)]
#[command(
    name = "shelfctl",
    author,
    version,
    about = "Library catalog demo client for PostgreSQL"
)]
struct Cli {
    /// PostgreSQL connection string (falls back to DATABASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full demo sequence (seed, transaction, queries, update, delete)
    Demo,
    /// Apply the catalog schema to the target database
    Migrate,
    /// List all authors
    Authors,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.debug).ok();
    config::load_dotenv();

    let url = config::database_url(cli.database_url.clone())?;
    let pool = create_pool(&url).await?;
    let client = CatalogClient::new(pool);

    match cli.command {
        Commands::Demo => demo::run(&client).await?,
        Commands::Migrate => {
            MIGRATOR.run(client.pool()).await?;
            info!("catalog schema applied");
        }
        Commands::Authors => {
            for author in client.list_authors().await? {
                println!("{:>4}  {}  <{}>", author.id, author.name, author.email);
            }
        }
    }

    Ok(())
}
