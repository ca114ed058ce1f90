mod rules;
mod text;
mod tips;

#[cfg(test)]
mod tests;

pub use rules::{Criterion, ScoreComponent};

use super::answers::AnswerSet;
use super::catalog::{Catalog, CatalogEntry};
use super::questions::{QuestionKey, QuizVariant};
use serde::Serialize;

pub const MAX_RECOMMENDED_CLASSES: usize = 6;
pub const MAX_KEY_RECOMMENDATIONS: usize = 4;

/// Pure mapping from answers to a recommendation. Holds no mutable state,
/// so one instance can serve any number of callers.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationEngine<'c> {
    variant: QuizVariant,
    catalog: &'c Catalog,
}

impl RecommendationEngine<'static> {
    pub fn new(variant: QuizVariant) -> Self {
        Self::with_catalog(variant, Catalog::standard())
    }
}

impl<'c> RecommendationEngine<'c> {
    pub fn with_catalog(variant: QuizVariant, catalog: &'c Catalog) -> Self {
        Self { variant, catalog }
    }

    pub fn variant(&self) -> QuizVariant {
        self.variant
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn recommend(&self, answers: &AnswerSet) -> Recommendation {
        Recommendation {
            variant: self.variant,
            primary_goal: text::goal_text(self.variant, answers),
            schedule: text::schedule_text(answers),
            workout_types: text::workout_types_text(self.variant, answers),
            duration: text::duration_text(answers),
            motivation_focus: text::motivation_text(self.variant, answers),
            recommended_classes: self.rank_classes(answers),
            key_recommendations: tips::prioritized_tips(answers, MAX_KEY_RECOMMENDATIONS),
            personal_training_spotlight: matches!(
                answers.single(QuestionKey::TrainingStyle),
                Some("with_trainer" | "with_friend")
            ),
        }
    }

    /// Scores for every catalog entry, in catalog order.
    pub fn score_catalog(&self, answers: &AnswerSet) -> Vec<ClassScore> {
        self.catalog
            .entries()
            .iter()
            .map(|entry| {
                let (components, score) = rules::score_entry(entry, answers);
                ClassScore {
                    entry: *entry,
                    score,
                    components,
                }
            })
            .collect()
    }

    /// Highest scores first, catalog order on ties; the top slots are taken
    /// before non-positive scores are dropped.
    pub fn rank_classes(&self, answers: &AnswerSet) -> Vec<ClassScore> {
        let mut scored = self.score_catalog(answers);
        scored.sort_by(|left, right| right.score.cmp(&left.score));
        scored.truncate(MAX_RECOMMENDED_CLASSES);
        scored.retain(|class| class.score > 0);
        scored
    }

    /// The full, untruncated tip list.
    pub fn candidate_tips(&self, answers: &AnswerSet) -> Vec<&'static str> {
        tips::collect_tips(answers)
    }
}

/// A catalog entry with its score and the components that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassScore {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    pub score: i32,
    pub components: Vec<ScoreComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub variant: QuizVariant,
    pub primary_goal: String,
    pub schedule: String,
    pub workout_types: String,
    pub duration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivation_focus: Option<String>,
    pub recommended_classes: Vec<ClassScore>,
    pub key_recommendations: Vec<&'static str>,
    pub personal_training_spotlight: bool,
}

impl Recommendation {
    pub fn class_names(&self) -> Vec<&'static str> {
        self.recommended_classes
            .iter()
            .map(|class| class.entry.name)
            .collect()
    }
}
