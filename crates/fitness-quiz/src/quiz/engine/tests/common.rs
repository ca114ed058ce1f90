use crate::quiz::answers::AnswerSet;
use crate::quiz::catalog::{Catalog, CatalogEntry, Tag};
use crate::quiz::engine::RecommendationEngine;
use crate::quiz::questions::{QuestionKey, QuizVariant};

pub(super) fn engine() -> RecommendationEngine<'static> {
    RecommendationEngine::new(QuizVariant::MultiGoal)
}

pub(super) fn classic_engine() -> RecommendationEngine<'static> {
    RecommendationEngine::new(QuizVariant::Classic)
}

/// Beginner looking for flexibility on a tight schedule.
pub(super) fn flexibility_beginner() -> AnswerSet {
    AnswerSet::new()
        .with(QuestionKey::FitnessLevel, "beginner")
        .with(QuestionKey::PrimaryGoal, "flexibility")
        .with(QuestionKey::TimeAvailability, "4-5")
        .with(QuestionKey::TrainingStyle, "gym_alone")
        .with(QuestionKey::DaysPerWeek, "1-2")
        .with(QuestionKey::ActivityLevel, "sedentary")
        .with(QuestionKey::Motivation, "stress_relief")
        .with(QuestionKey::Timeline, "1_month")
}

pub(super) fn advanced_weight_loss() -> AnswerSet {
    AnswerSet::new()
        .with(QuestionKey::FitnessLevel, "advanced")
        .with(QuestionKey::PrimaryGoal, "weight_loss")
        .with(QuestionKey::TimeAvailability, "6-8")
        .with(QuestionKey::TrainingStyle, "coach_led")
        .with(QuestionKey::DaysPerWeek, "5+")
        .with(QuestionKey::ActivityLevel, "very_active")
        .with(QuestionKey::Motivation, "performance")
        .with(QuestionKey::Timeline, "1_year")
}

/// Answers that match nothing and carry the flat gym penalty.
pub(super) fn penalised_unknowns() -> AnswerSet {
    AnswerSet::new()
        .with(QuestionKey::FitnessLevel, "expert")
        .with(QuestionKey::PrimaryGoal, "sleep")
        .with(QuestionKey::TrainingStyle, "gym_alone")
        .with(QuestionKey::Motivation, "money")
}

pub(super) fn twin_catalog() -> Catalog {
    Catalog::new(
        "test",
        vec![
            CatalogEntry {
                id: "first_twin",
                name: "FIRST TWIN",
                description: "Defined first.",
                tags: &[Tag::Cardio, Tag::Variety],
            },
            CatalogEntry {
                id: "outsider",
                name: "OUTSIDER",
                description: "Matches nothing.",
                tags: &[Tag::Premium],
            },
            CatalogEntry {
                id: "second_twin",
                name: "SECOND TWIN",
                description: "Defined second, same tags.",
                tags: &[Tag::Variety, Tag::Cardio],
            },
        ],
    )
}
