use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use recipe_share_api::{
    app::build_app,
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,recipe_share_api=debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let addr = SocketAddr::new(config.host.parse::<IpAddr>()?, config.port);

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;
    let app = build_app(AppState::new(orm, config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "recipe-share-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
