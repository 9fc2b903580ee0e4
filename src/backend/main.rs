/**
 * Ennoea Server Entry Point
 *
 * This is the main entry point for the Ennoea architecture server.
 * It parses the command line, prepares the save directory and serves the
 * architecture API alongside the viewer's static files.
 */

#[cfg(feature = "ssr")]
use clap::Parser;

#[cfg(feature = "ssr")]
use ennoea::shared::config::{AppConfig, DEFAULT_PORT, DEFAULT_SAVE_DIR, DEFAULT_STATIC_DIR};

/// Command line arguments
#[cfg(feature = "ssr")]
#[derive(Parser, Debug)]
#[command(name = "ennoea-server", version, about = "Ennoea architecture server")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory with the viewer's static files
    #[arg(long = "static", env = "STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    static_dir: std::path::PathBuf,

    /// Directory where architectures are saved
    #[arg(long, env = "SAVE_DIR", default_value = DEFAULT_SAVE_DIR)]
    save_dir: std::path::PathBuf,
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let args = Args::parse();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("[STARTUP] Server initialization started");

    let config = AppConfig::builder()
        .port(args.port)
        .static_dir(args.static_dir)
        .save_dir(args.save_dir)
        .build()?;

    tracing::info!(
        "[STARTUP] Static files from {}, saves in {}",
        config.static_dir.display(),
        config.save_dir.display()
    );

    // Create the Axum app
    let app = ennoea::backend::server::init::create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("[STARTUP] Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("Server requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin ennoea-server --features ssr");
    std::process::exit(1);
}
