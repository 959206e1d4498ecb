mod app;
mod auth;
mod checklist;
mod config;
mod daily_meals;
mod db;
mod error;
mod exercise;
mod meals;
mod settings;
mod shopping;
mod state;
mod types;
mod weight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "fitplan=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = state::AppState::init().await?;
    tracing::info!(database = %state.config.database_url, "database ready");

    app::serve(app::build_app(state)).await
}
