use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use wealth_core::advisory::AdvisoryInput;
use wealth_core::domain::metrics::MetricsBatch;
use wealth_core::domain::recommendation::ScoreResult;
use wealth_core::scoring::{analyze_companies, error::MissingIdentifierError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = wealth_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let state = AppState {
        advisory_top_n: settings.advisory_top_n,
    };

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!(%addr, advisory_top_n = state.advisory_top_n, "api listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/v1/analyze", post(analyze))
        .route("/api/v1/advisory-input", post(advisory_input))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Clone)]
struct AppState {
    advisory_top_n: usize,
}

#[derive(Debug, Serialize)]
struct ApiAnalysis {
    success: bool,
    analysis_id: Uuid,
    count: usize,
    analysis: Vec<ScoreResult>,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct ApiAdvisoryInput {
    success: bool,
    analysis_id: Uuid,
    advisory: AdvisoryInput,
    prompt: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<MissingIdentifierError> for ApiError {
    fn from(err: MissingIdentifierError) -> Self {
        tracing::warn!(position = err.position, error = %err, "rejected metrics batch");
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        sentry_anyhow::capture_anyhow(&err);
        tracing::error!(error = %err, "advisory payload failed");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("{err:#}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "success": false,
            "error": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

async fn analyze(Json(batch): Json<MetricsBatch>) -> Result<Json<ApiAnalysis>, ApiError> {
    let analysis = analyze_companies(&batch.companies)?;
    let analysis_id = Uuid::new_v4();

    tracing::info!(%analysis_id, count = analysis.len(), "analyzed metrics batch");

    Ok(Json(ApiAnalysis {
        success: true,
        analysis_id,
        count: analysis.len(),
        analysis,
        timestamp: Utc::now(),
    }))
}

async fn advisory_input(
    State(state): State<AppState>,
    Json(batch): Json<MetricsBatch>,
) -> Result<Json<ApiAdvisoryInput>, ApiError> {
    let analysis = analyze_companies(&batch.companies)?;
    let analysis_id = Uuid::new_v4();

    let advisory = AdvisoryInput::try_new(Utc::now(), &analysis, state.advisory_top_n)?;
    let prompt = advisory.prompt()?;

    tracing::info!(
        %analysis_id,
        scored = analysis.len(),
        handed_off = advisory.top.len(),
        "built advisory input"
    );

    Ok(Json(ApiAdvisoryInput {
        success: true,
        analysis_id,
        advisory,
        prompt,
    }))
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

fn init_sentry(settings: &wealth_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn batch(v: serde_json::Value) -> Json<MetricsBatch> {
        Json(serde_json::from_value(v).unwrap())
    }

    fn state(advisory_top_n: usize) -> State<AppState> {
        State(AppState { advisory_top_n })
    }

    #[tokio::test]
    async fn analyze_ranks_and_counts() {
        let Json(res) = analyze(batch(json!({
            "companies": [
                {"ticker": "UPST", "peRatio": 80, "currentRatio": 0.7},
                null,
                {"ticker": "MSFT", "name": "Microsoft", "profit_margin": 0.36, "roe": 0.38},
            ]
        })))
        .await
        .unwrap();

        assert!(res.success);
        assert_eq!(res.count, 2);
        assert_eq!(res.analysis[0].ticker, "MSFT");
        assert_eq!(res.analysis[1].ticker, "UPST");
    }

    #[tokio::test]
    async fn analyze_rejects_missing_ticker() {
        let err = analyze(batch(json!({"companies": [{"name": "Nameless"}]})))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.message.contains("missing a ticker"));
    }

    #[tokio::test]
    async fn analyze_accepts_empty_batch() {
        let Json(res) = analyze(batch(json!({"companies": []}))).await.unwrap();
        assert_eq!(res.count, 0);
    }

    #[tokio::test]
    async fn advisory_input_limits_to_top_n() {
        let companies: Vec<_> = (0..7).map(|i| json!({"ticker": format!("T{i}")})).collect();
        let Json(res) = advisory_input(state(3), batch(json!({"companies": companies})))
            .await
            .unwrap();

        assert_eq!(res.advisory.top.len(), 3);
        assert_eq!(res.advisory.top[0].ticker, "T0");
        assert!(res.prompt.contains("TOP OPPORTUNITIES:"));
    }

    #[tokio::test]
    async fn error_response_is_json() {
        let res = ApiError {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: "metrics record at position 0 is missing a ticker".to_string(),
        }
        .into_response();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            json!({
                "success": false,
                "error": "metrics record at position 0 is missing a ticker",
            })
        );
    }
}
