use super::super::answers::AnswerSet;
use super::super::catalog::{CatalogEntry, Tag};
use super::super::questions::QuestionKey;
use serde::Serialize;

/// Answer dimension a score component came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    FitnessLevel,
    PrimaryGoal,
    TrainingStyle,
    DaysPerWeek,
    Motivation,
    ActivityLevel,
}

impl Criterion {
    pub const fn question(self) -> QuestionKey {
        match self {
            Self::FitnessLevel => QuestionKey::FitnessLevel,
            Self::PrimaryGoal => QuestionKey::PrimaryGoal,
            Self::TrainingStyle => QuestionKey::TrainingStyle,
            Self::DaysPerWeek => QuestionKey::DaysPerWeek,
            Self::Motivation => QuestionKey::Motivation,
            Self::ActivityLevel => QuestionKey::ActivityLevel,
        }
    }
}

/// Discrete contribution to a class score, kept for audits.
/// `tag` is `None` for flat adjustments that apply to every class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub criterion: Criterion,
    pub tag: Option<Tag>,
    pub points: i32,
}

type TagWeights = &'static [(Tag, i32)];

fn fitness_level_weights(level: &str) -> TagWeights {
    match level {
        "beginner" => &[
            (Tag::BeginnerFriendly, 3),
            (Tag::Advanced, -2),
            (Tag::Challenging, -1),
        ],
        "intermediate" => &[
            (Tag::Intermediate, 3),
            (Tag::BeginnerFriendly, 1),
            (Tag::Advanced, 1),
        ],
        "advanced" => &[
            (Tag::Advanced, 3),
            (Tag::Challenging, 2),
            (Tag::HighIntensity, 2),
        ],
        _ => &[],
    }
}

fn primary_goal_weights(goal: &str) -> TagWeights {
    match goal {
        "weight_loss" => &[
            (Tag::Cardio, 3),
            (Tag::WeightLoss, 3),
            (Tag::HighIntensity, 2),
        ],
        "muscle_gain" => &[(Tag::Strength, 3), (Tag::MuscleGain, 3), (Tag::Toning, 2)],
        "endurance" => &[(Tag::Cardio, 3), (Tag::HighIntensity, 2)],
        "flexibility" => &[(Tag::Flexibility, 3), (Tag::Yoga, 2)],
        "general_health" => &[(Tag::FullBody, 2), (Tag::BeginnerFriendly, 1)],
        _ => &[],
    }
}

fn days_per_week_weights(days: &str) -> TagWeights {
    match days {
        "1-2" => &[(Tag::TimeEfficient, 2), (Tag::FullBody, 1)],
        "3-4" => &[(Tag::Variety, 1)],
        "5+" => &[(Tag::Specialized, 1)],
        _ => &[],
    }
}

fn motivation_weights(motivation: &str) -> TagWeights {
    match motivation {
        "health" => &[(Tag::Mindfulness, 2), (Tag::Recovery, 1)],
        "appearance" => &[(Tag::Toning, 2), (Tag::Strength, 1)],
        "performance" => &[(Tag::HighIntensity, 2), (Tag::Challenging, 2)],
        "stress_relief" => &[
            (Tag::StressRelief, 3),
            (Tag::Flexibility, 1),
            (Tag::Mindfulness, 1),
        ],
        _ => &[],
    }
}

fn activity_level_weights(activity: &str) -> TagWeights {
    match activity {
        "sedentary" | "lightly_active" => &[(Tag::LowImpact, 2), (Tag::BeginnerFriendly, 1)],
        "very_active" => &[(Tag::HighIntensity, 1)],
        _ => &[],
    }
}

/// Flat adjustment applied to every class regardless of tags.
fn training_style_adjustment(style: &str) -> Option<i32> {
    match style {
        "coach_led" => Some(2),
        "gym_alone" => Some(-1),
        "mix_both" | "combination" => Some(1),
        _ => None,
    }
}

/// Sums every criterion's contribution for one class.
///
/// Each criterion reads its answer as a plain single value; a multi-select
/// answer never matches a branch and contributes nothing.
pub(crate) fn score_entry(entry: &CatalogEntry, answers: &AnswerSet) -> (Vec<ScoreComponent>, i32) {
    let mut components = Vec::new();

    let tag_criteria: [(Criterion, fn(&str) -> TagWeights); 5] = [
        (Criterion::FitnessLevel, fitness_level_weights),
        (Criterion::PrimaryGoal, primary_goal_weights),
        (Criterion::DaysPerWeek, days_per_week_weights),
        (Criterion::Motivation, motivation_weights),
        (Criterion::ActivityLevel, activity_level_weights),
    ];

    for (criterion, weights) in tag_criteria {
        let Some(answer) = answers.single(criterion.question()) else {
            continue;
        };
        for &(tag, points) in weights(answer) {
            if entry.has_tag(tag) {
                components.push(ScoreComponent {
                    criterion,
                    tag: Some(tag),
                    points,
                });
            }
        }
    }

    if let Some(points) = answers
        .single(QuestionKey::TrainingStyle)
        .and_then(training_style_adjustment)
    {
        components.push(ScoreComponent {
            criterion: Criterion::TrainingStyle,
            tag: None,
            points,
        });
    }

    let total = components.iter().map(|component| component.points).sum();
    (components, total)
}
