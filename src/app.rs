use std::{net::SocketAddr, path::PathBuf};

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{
    auth::{
        self,
        extractors::{require_page_session, SessionUser},
    },
    checklist, daily_meals, exercise, meals, settings, shopping,
    state::AppState,
    weight,
};

pub fn build_app(state: AppState) -> Router {
    let static_dir = PathBuf::from(&state.config.static_dir);

    let api = Router::new()
        .merge(meals::routes())
        .merge(daily_meals::routes())
        .merge(shopping::routes())
        .merge(weight::routes())
        .merge(checklist::routes())
        .merge(exercise::routes())
        .merge(settings::routes())
        .route_layer(middleware::from_extractor_with_state::<SessionUser, _>(
            state.clone(),
        ))
        .merge(auth::handlers::api_routes())
        .route("/health", get(|| async { "ok" }));

    let pages = Router::new()
        .fallback_service(ServeDir::new(&static_dir))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_page_session,
        ));

    Router::new()
        .nest("/api", api)
        .merge(auth::handlers::page_routes(ServeFile::new(
            static_dir.join("login.html"),
        )))
        .merge(pages)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri)
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router) -> anyhow::Result<()> {
    let addr: SocketAddr = format!(
        "{}:{}",
        std::env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".into()),
        std::env::var("APP_PORT").unwrap_or_else(|_| "5000".into())
    )
    .parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
