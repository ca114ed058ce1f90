use chrono::NaiveDate;
use fitness_quiz::config::QuizConfig;
use fitness_quiz::error::AppError;
use fitness_quiz::quiz::{AnswerSet, QuizVariant};
use metrics_exporter_prometheus::PrometheusHandle;
use std::fs;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_variant(raw: &str) -> Result<QuizVariant, String> {
    QuizVariant::parse(raw).ok_or_else(|| format!("unknown quiz variant '{raw}'"))
}

/// Command-line overrides applied on top of the environment settings.
pub(crate) fn resolve_quiz(
    config: QuizConfig,
    variant: Option<QuizVariant>,
    strict: bool,
) -> QuizConfig {
    QuizConfig {
        variant: variant.unwrap_or(config.variant),
        strict: strict || config.strict,
    }
}

/// Builds an answer set from an optional JSON file and `key=value` pairs.
/// Pairs are applied after the file, so they win on conflicts.
pub(crate) fn load_answers(
    file: Option<&Path>,
    assignments: &[String],
) -> Result<AnswerSet, AppError> {
    let mut answers = match file {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            serde_json::from_str::<AnswerSet>(&raw)?
        }
        None => AnswerSet::new(),
    };

    for raw in assignments {
        let (key, value) = AnswerSet::parse_assignment(raw)?;
        answers.set(key, value);
    }
    Ok(answers)
}
