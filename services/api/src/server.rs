use crate::cli::ServeArgs;
use crate::infra::{resolve_quiz, AppState};
use crate::routes::with_quiz_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fitness_quiz::config::AppConfig;
use fitness_quiz::error::AppError;
use fitness_quiz::quiz::QuizState;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    config.quiz = resolve_quiz(config.quiz, args.quiz.variant, args.quiz.strict);

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let quiz_state = Arc::new(QuizState::new(config.quiz.variant, config.quiz.strict));
    let app = with_quiz_routes(quiz_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        variant = %config.quiz.variant,
        strict = config.quiz.strict,
        "fitness quiz service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
