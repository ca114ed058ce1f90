use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::answers::AnswerSet;
use super::catalog::CatalogEntry;
use super::engine::{Recommendation, RecommendationEngine};
use super::plan::{render_plan, PLAN_FILE_NAME};
use super::questions::{question_set, QuestionDefinition, QuizVariant};
use crate::error::AppError;

/// Shared handler state. The engine is immutable, so one instance serves
/// every request.
#[derive(Debug, Clone, Copy)]
pub struct QuizState {
    pub engine: RecommendationEngine<'static>,
    pub strict: bool,
}

impl QuizState {
    pub fn new(variant: QuizVariant, strict: bool) -> Self {
        Self {
            engine: RecommendationEngine::new(variant),
            strict,
        }
    }

    /// Scores the answers, validating them first when strict mode is on.
    pub fn recommend(&self, answers: &AnswerSet) -> Result<Recommendation, AppError> {
        let variant = self.engine.variant();
        if self.strict {
            if let Err(error) = answers.validate(variant) {
                warn!(%variant, %error, "rejected answers in strict mode");
                return Err(error.into());
            }
        }

        let recommendation = self.engine.recommend(answers);
        debug!(
            %variant,
            classes = recommendation.recommended_classes.len(),
            tips = recommendation.key_recommendations.len(),
            "recommendation built"
        );
        Ok(recommendation)
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionsView {
    pub variant: QuizVariant,
    pub questions: Vec<QuestionDefinition>,
}

#[derive(Debug, Serialize)]
pub struct CatalogView<'c> {
    pub version: &'c str,
    pub classes: &'c [CatalogEntry],
}

#[derive(Debug, Default, Deserialize)]
pub struct PlanQuery {
    pub generated_on: Option<String>,
}

/// HTTP endpoints for the questionnaire, catalog, and scoring.
pub fn quiz_router(state: Arc<QuizState>) -> Router {
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler))
        .route("/api/v1/catalog", get(catalog_handler))
        .route("/api/v1/recommendations", post(recommendation_handler))
        .route("/api/v1/plan", post(plan_handler))
        .with_state(state)
}

pub(crate) async fn questions_handler(State(state): State<Arc<QuizState>>) -> Json<QuestionsView> {
    let variant = state.engine.variant();
    Json(QuestionsView {
        variant,
        questions: question_set(variant),
    })
}

pub(crate) async fn catalog_handler(State(state): State<Arc<QuizState>>) -> Response {
    let catalog = state.engine.catalog();
    Json(CatalogView {
        version: catalog.version(),
        classes: catalog.entries(),
    })
    .into_response()
}

pub(crate) async fn recommendation_handler(
    State(state): State<Arc<QuizState>>,
    Json(answers): Json<AnswerSet>,
) -> Result<Json<Recommendation>, AppError> {
    state.recommend(&answers).map(Json)
}

pub(crate) async fn plan_handler(
    State(state): State<Arc<QuizState>>,
    Query(query): Query<PlanQuery>,
    Json(answers): Json<AnswerSet>,
) -> Result<Response, AppError> {
    let generated_on = match query.generated_on.as_deref() {
        Some(raw) => parse_plan_date(raw)?,
        None => Local::now().date_naive(),
    };

    let recommendation = state.recommend(&answers)?;
    let plan = render_plan(&recommendation, &answers, generated_on);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PLAN_FILE_NAME}\""),
            ),
        ],
        plan,
    )
        .into_response())
}

pub fn parse_plan_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Input(format!("expected a YYYY-MM-DD date, found '{raw}'")))
}
