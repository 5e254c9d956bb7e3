use std::net::SocketAddr;
use std::sync::Arc;

use phonebook::api;
use phonebook::storage::{ContactStore, MemoryStore, MongoStore};

const DEFAULT_PORT: u16 = 3001;
const DB_NAME: &str = "phonebook";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut backend = "memory".to_string();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--backend" => {
                if i + 1 >= args.len() {
                    eprintln!("--backend requires a value: memory | mongo");
                    std::process::exit(1);
                }
                backend = args[i + 1].clone();
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!("Usage: {} [--backend memory|mongo]", args[0]);
                eprintln!("  PORT         listening port (default {})", DEFAULT_PORT);
                eprintln!("  MONGODB_URI  connection string, required for --backend mongo");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    let store: Arc<dyn ContactStore> = match backend.as_str() {
        "memory" => {
            tracing::info!("Using in-memory backend");
            Arc::new(MemoryStore::new())
        }
        "mongo" => {
            let uri = match std::env::var("MONGODB_URI") {
                Ok(uri) => uri,
                Err(_) => {
                    eprintln!("MONGODB_URI must be set for the mongo backend");
                    std::process::exit(1);
                }
            };
            tracing::info!("Connecting to MongoDB");
            let store = MongoStore::connect(&uri, DB_NAME).await?;
            tracing::info!("Connected to MongoDB");
            Arc::new(store)
        }
        other => {
            eprintln!("Unknown backend: {} (expected memory | mongo)", other);
            std::process::exit(1);
        }
    };

    let app = api::router(store);

    let port = match std::env::var("PORT") {
        Ok(value) => value.parse()?,
        Err(_) => DEFAULT_PORT,
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
