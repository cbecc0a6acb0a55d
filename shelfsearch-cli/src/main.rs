//! ShelfSearch CLI - for exercising the retrieval library
//!
//! # Commands
//!
//! ```bash
//! # Show the canonical content built for each book in a catalog file
//! shelfsearch content catalog.json
//!
//! # Embed text and show vector stats
//! shelfsearch embed "melancholy coming-of-age novel"
//!
//! # Index a catalog file and search it
//! shelfsearch search catalog.json "desert planet politics"
//! ```
//!
//! Catalog files are JSON: `{ "books": [...], "reviews": [...] }`.

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use shelfsearch_lib::{
    catalog::{Book, Catalog, MemoryCatalog, Review},
    content::build_content,
    embed::{Embedder, MiniLmEmbedder},
    search::{CatalogSearch, IndexOutcome, DEFAULT_TOP_K},
    store::MemoryIndex,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shelfsearch")]
#[command(about = "Semantic retrieval for a library catalog")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the canonical content built for books in a catalog file
    Content {
        /// Catalog JSON file
        catalog: String,

        /// Only show this book id
        #[arg(long)]
        id: Option<i64>,
    },

    /// Embed text and show vector info
    Embed {
        /// Text to embed
        text: String,
    },

    /// Index a catalog file and search it
    Search {
        /// Catalog JSON file
        catalog: String,

        /// Query to search for
        query: String,

        /// Number of results to return
        #[arg(short, long, default_value_t = DEFAULT_TOP_K)]
        k: usize,
    },
}

/// On-disk catalog shape
#[derive(Deserialize)]
struct CatalogFile {
    books: Vec<Book>,
    #[serde(default)]
    reviews: Vec<Review>,
}

fn load_catalog(path: &str) -> Result<(MemoryCatalog, Vec<i64>)> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading catalog '{path}'"))?;
    let file: CatalogFile =
        serde_json::from_str(&raw).with_context(|| format!("parsing catalog '{path}'"))?;

    let ids = file.books.iter().map(|b| b.id).collect();
    Ok((MemoryCatalog::from_records(file.books, file.reviews), ids))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Content { catalog, id } => {
            let (catalog, ids) = load_catalog(&catalog)?;

            let selected: Vec<i64> = match id {
                Some(id) => vec![id],
                None => ids,
            };

            for id in selected {
                match catalog.book(id)? {
                    Some(book) => {
                        let reviews = catalog.reviews(id)?;
                        println!("--- Book {id} ---");
                        println!("{}\n", build_content(&book, &reviews));
                    }
                    None => println!("--- Book {id} not in catalog ---\n"),
                }
            }
        }

        Commands::Embed { text } => {
            println!("Loading MiniLM model (first run downloads ~90MB)...");
            let embedder = MiniLmEmbedder::new();

            println!("Embedding: {text}");
            let embedding = embedder.embed(&text)?;

            println!("\nEmbedding stats:");
            println!("  Model: {}", embedder.model_name());
            println!("  Dimensions: {}", embedding.len());
            println!("  First 5 values: {:?}", &embedding[..5]);
            println!("  Min: {:.4}", embedding.iter().cloned().fold(f32::INFINITY, f32::min));
            println!("  Max: {:.4}", embedding.iter().cloned().fold(f32::NEG_INFINITY, f32::max));
        }

        Commands::Search { catalog, query, k } => {
            println!("Loading '{catalog}'...");
            let (catalog, ids) = load_catalog(&catalog)?;
            println!("Catalog contains {} books", catalog.len());

            println!("\nLoading MiniLM model (first run downloads ~90MB)...");
            let embedder = MiniLmEmbedder::new();
            let index = MemoryIndex::new(embedder.dimension());
            let engine = CatalogSearch::new(catalog, embedder, index);

            println!("Indexing {} books...", ids.len());
            let mut skipped = 0;
            for id in ids {
                if engine.index_book(id)? == IndexOutcome::SkippedMissing {
                    skipped += 1;
                }
            }
            println!("Done! Index contains {} books ({skipped} skipped)", engine.len());

            println!("\nSearching: '{query}' (k={k})");
            let results = engine.search(&query, k)?;

            println!("\n=== Results ===\n");
            for (i, result) in results.iter().enumerate() {
                println!("#{} {} (id: {}, score: {:.4})", i + 1, result.metadata.title, result.book_id, result.score);
                println!("---");
                let preview: String = result.content.chars().take(300).collect();
                let ellipsis = if result.content.len() > 300 { "..." } else { "" };
                println!("{preview}{ellipsis}\n");
            }
        }
    }

    Ok(())
}
