use foodshare_portal::{
    AppState,
    config::{AppConfig, Env},
    create_router,
    routes::page_table,
};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Entry point: loads configuration, initializes logging, builds the page
/// table and serves the navigation shell.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Configuration (fail-fast on missing production secrets)
    dotenv::dotenv().ok();
    let config = AppConfig::load()?;

    // 2. Logging: RUST_LOG first, development defaults otherwise.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "foodshare_portal=debug,tower_http=info,axum=trace".into());

    // 3. Pretty output locally, JSON in production for log aggregation.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Page table. A construction error is a declaration bug; refuse to start.
    let table = page_table()?;
    tracing::info!(
        routes = table.entries().len(),
        default_path = table.default_path(),
        login_path = table.login_path(),
        "Page table built"
    );

    // 5. Router and server
    let bind_address = config.bind_address.clone();
    let app = create_router(AppState::new(table, config));

    let listener = TcpListener::bind(&bind_address).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);
    tracing::info!("API Documentation (Swagger UI) available at /swagger-ui");

    axum::serve(listener, app).await?;
    Ok(())
}
