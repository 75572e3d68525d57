//! VEXA CLI
//!
//! Sequential CRUD demonstration against a hosted vector index:
//! upsert, query, re-upsert with modified metadata, delete.

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use vexa::{ClientConfig, Vector, VectorStoreClient};

/// VEXA - Vector Index CRUD Demo
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the vector index (falls back to VEXA_INDEX_URL)
    #[arg(long)]
    index_url: Option<String>,

    /// API key for the Api-Key header (falls back to VEXA_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = 30_000)]
    timeout_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("vexa=info".parse()?))
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::from_env();
    if let Some(index_url) = args.index_url {
        config.index_url = index_url;
    }
    if let Some(api_key) = args.api_key {
        config.api_key = api_key;
    }
    config = config.with_timeout_ms(args.timeout_ms);

    let client = VectorStoreClient::new(config)?;
    info!(index_url = %client.config().index_url, "running CRUD demo");

    let vector = Vector::new("example-vector-1", vec![0.1, 0.2, 0.3])
        .with_metadata_entry("name", "example")
        .with_metadata_entry("type", "demo");

    // 1. Create (upsert) a vector
    let body = client.upsert(vector.clone()).await?;
    println!("Upsert response: {}", body);

    // 2. Read (query) the nearest neighbors
    let response = client.query_values(vec![0.1, 0.2, 0.3], 3).await?;
    println!("Query returned {} match(es):", response.matches.len());
    for m in &response.matches {
        println!(
            "  {}  score={:.4}  metadata={}",
            m.id,
            m.score,
            serde_json::to_string(&m.metadata)?
        );
    }

    // 3. Update (re-upsert with modified metadata)
    let updated = vector.with_metadata_entry("type", "updated-demo");
    let body = client.upsert(updated).await?;
    println!("Upsert response: {}", body);

    // 4. Delete the vector
    let body = client.delete("example-vector-1").await?;
    println!("Delete response: {}", body);

    Ok(())
}
