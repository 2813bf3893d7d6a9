use filecast::config::Config;
use filecast::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let program = std::env::args()
                .next()
                .unwrap_or_else(|| "filecast".to_string());
            eprintln!("error: {e:#}");
            eprintln!("Usage: {program} <port>");
            std::process::exit(1);
        }
    };

    let server = Server::bind(&cfg.listen_addr(), cfg.root.clone()).await?;

    server
        .run_until(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
            }
        })
        .await
}
