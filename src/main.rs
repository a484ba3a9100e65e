use ncnews::{config::Config, make_router, run_app};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ncnews=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Error: {error:#}");
            std::process::exit(1);
        }
    };
    let addr = config.address();
    let router = make_router();
    tracing::info!("Server starting on {}", addr);
    if let Err(error) = run_app(router, &config).await {
        tracing::error!("Error: {error:#}");
        std::process::exit(1);
    }
}
