use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on selections for a multi-select question.
pub const MAX_MULTI_SELECTIONS: usize = 2;

/// Fixed question identifiers, declared in questionnaire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    FitnessLevel,
    PrimaryGoal,
    TimeAvailability,
    TrainingStyle,
    DaysPerWeek,
    ActivityLevel,
    Motivation,
    Timeline,
}

impl QuestionKey {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::FitnessLevel,
            Self::PrimaryGoal,
            Self::TimeAvailability,
            Self::TrainingStyle,
            Self::DaysPerWeek,
            Self::ActivityLevel,
            Self::Motivation,
            Self::Timeline,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FitnessLevel => "fitness_level",
            Self::PrimaryGoal => "primary_goal",
            Self::TimeAvailability => "time_availability",
            Self::TrainingStyle => "training_style",
            Self::DaysPerWeek => "days_per_week",
            Self::ActivityLevel => "activity_level",
            Self::Motivation => "motivation",
            Self::Timeline => "timeline",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::FitnessLevel => "Current Fitness Level",
            Self::PrimaryGoal => "Primary Goal",
            Self::TimeAvailability => "Time Availability",
            Self::TrainingStyle => "Training Style",
            Self::DaysPerWeek => "Days Per Week",
            Self::ActivityLevel => "Current Activity Level",
            Self::Motivation => "Motivation Style",
            Self::Timeline => "Timeline",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|key| key.as_str() == needle)
            .ok_or_else(|| needle.to_string())
    }
}

/// Which questionnaire script is active.
///
/// `Classic` asks every question as single-select. `MultiGoal` lets the
/// respondent pick up to two goals and two motivations and offers the extended
/// training style list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizVariant {
    Classic,
    #[default]
    MultiGoal,
}

impl QuizVariant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::MultiGoal => "multi_goal",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "classic" | "single" => Some(Self::Classic),
            "multi_goal" | "multi" => Some(Self::MultiGoal),
            _ => None,
        }
    }

    pub const fn selection_mode(self, key: QuestionKey) -> SelectionMode {
        match (self, key) {
            (Self::MultiGoal, QuestionKey::PrimaryGoal | QuestionKey::Motivation) => {
                SelectionMode::Multiple {
                    max: MAX_MULTI_SELECTIONS,
                }
            }
            _ => SelectionMode::Single,
        }
    }

    pub const fn allows_multiple(self, key: QuestionKey) -> bool {
        matches!(self.selection_mode(key), SelectionMode::Multiple { .. })
    }
}

impl fmt::Display for QuizVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionMode {
    Single,
    Multiple { max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
}

const fn option(value: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption { value, label }
}

/// A rendered question: title, selection rules, and the allowed options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionDefinition {
    pub key: QuestionKey,
    pub title: &'static str,
    pub mode: SelectionMode,
    pub options: &'static [QuestionOption],
}

impl QuestionDefinition {
    pub fn option(&self, value: &str) -> Option<&'static QuestionOption> {
        self.options.iter().find(|candidate| candidate.value == value)
    }

    pub fn accepts(&self, value: &str) -> bool {
        self.option(value).is_some()
    }
}

const FITNESS_LEVEL_OPTIONS: &[QuestionOption] = &[
    option("beginner", "Beginner"),
    option("intermediate", "Intermediate"),
    option("advanced", "Advanced"),
];

const PRIMARY_GOAL_OPTIONS: &[QuestionOption] = &[
    option("weight_loss", "Weight Loss"),
    option("muscle_gain", "Muscle Building"),
    option("endurance", "Endurance & Stamina"),
    option("flexibility", "Flexibility & Mobility"),
    option("general_health", "General Health"),
];

const TIME_AVAILABILITY_OPTIONS: &[QuestionOption] = &[
    option("2-3", "2-3 hours"),
    option("4-5", "4-5 hours"),
    option("6-8", "6-8 hours"),
    option("8+", "8+ hours"),
];

const CLASSIC_TRAINING_STYLE_OPTIONS: &[QuestionOption] = &[
    option("coach_led", "Coach-led Group Classes"),
    option("gym_alone", "Gym on My Own"),
    option("mix_both", "A Mix of Both"),
];

const MULTI_GOAL_TRAINING_STYLE_OPTIONS: &[QuestionOption] = &[
    option("coach_led", "Coach-led Group Classes"),
    option("gym_alone", "Gym on My Own"),
    option("combination", "Combination of Classes and Solo"),
    option("with_trainer", "With a Trainer"),
    option("with_friend", "With a Friend"),
];

const DAYS_PER_WEEK_OPTIONS: &[QuestionOption] = &[
    option("1-2", "1-2 Days"),
    option("3-4", "3-4 Days"),
    option("5+", "5+ Days"),
];

const ACTIVITY_LEVEL_OPTIONS: &[QuestionOption] = &[
    option("sedentary", "Mostly Sedentary"),
    option("lightly_active", "Lightly Active"),
    option("moderately_active", "Moderately Active"),
    option("very_active", "Very Active"),
];

const MOTIVATION_OPTIONS: &[QuestionOption] = &[
    option("health", "Health & Longevity"),
    option("appearance", "Physical Appearance"),
    option("performance", "Performance & Competition"),
    option("stress_relief", "Stress Relief & Mental Health"),
];

const TIMELINE_OPTIONS: &[QuestionOption] = &[
    option("1_month", "1 Month"),
    option("3_months", "3 Months"),
    option("6_months", "6 Months"),
    option("1_year", "1 Year+"),
];

fn options_for(variant: QuizVariant, key: QuestionKey) -> &'static [QuestionOption] {
    match key {
        QuestionKey::FitnessLevel => FITNESS_LEVEL_OPTIONS,
        QuestionKey::PrimaryGoal => PRIMARY_GOAL_OPTIONS,
        QuestionKey::TimeAvailability => TIME_AVAILABILITY_OPTIONS,
        QuestionKey::TrainingStyle => match variant {
            QuizVariant::Classic => CLASSIC_TRAINING_STYLE_OPTIONS,
            QuizVariant::MultiGoal => MULTI_GOAL_TRAINING_STYLE_OPTIONS,
        },
        QuestionKey::DaysPerWeek => DAYS_PER_WEEK_OPTIONS,
        QuestionKey::ActivityLevel => ACTIVITY_LEVEL_OPTIONS,
        QuestionKey::Motivation => MOTIVATION_OPTIONS,
        QuestionKey::Timeline => TIMELINE_OPTIONS,
    }
}

pub fn question(variant: QuizVariant, key: QuestionKey) -> QuestionDefinition {
    QuestionDefinition {
        key,
        title: key.title(),
        mode: variant.selection_mode(key),
        options: options_for(variant, key),
    }
}

/// The ordered questionnaire for a variant.
pub fn question_set(variant: QuizVariant) -> Vec<QuestionDefinition> {
    QuestionKey::ordered()
        .into_iter()
        .map(|key| question(variant, key))
        .collect()
}
