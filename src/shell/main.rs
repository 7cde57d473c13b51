use tracing_subscriber::{EnvFilter, fmt};

use activities::shell::config::Config;
use activities::shell::http::app;
use activities::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let app = app(AppState::seeded(), &config);

    let addr = config.socket_addr();
    tracing::info!("Activities API: http://{}/activities", addr);
    tracing::info!("GraphQL endpoint: http://{}/graphql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
