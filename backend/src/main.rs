use std::sync::Arc;

use clap::Parser;
use log::info;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use blog_backend::config::{Args, Config};
use blog_backend::context::BackendContext;
use blog_backend::db::{prepare_db, sqlite_url, DbStore};
use blog_backend::server;

fn init_tracing(args: &Args) {
    let filter = args
        .log_level
        .as_deref()
        .and_then(|l| EnvFilter::try_new(l).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    if args.log_json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();
    init_tracing(&args);

    let config = Config::from(&args);
    std::fs::create_dir_all(&config.data)?;

    let db = prepare_db(&sqlite_url(&config.data)).await?;
    let store = Arc::new(DbStore::new(db));

    let listener = TcpListener::bind(config.listen).await?;
    // the real port when 0 was asked for
    let local_addr = listener.local_addr()?;
    info!("Listening on: {}", local_addr);
    info!(
        "page size {}, window radius {}, out of range: {}",
        config.paginator.page_size, config.paginator.radius, config.paginator.out_of_range
    );

    let ctx = Arc::new(BackendContext::new(store, config));
    server::serve(listener, ctx, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    })
    .await
}
