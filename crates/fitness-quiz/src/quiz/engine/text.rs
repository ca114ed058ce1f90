use super::super::answers::{AnswerSet, AnswerValue};
use super::super::questions::{QuestionKey, QuizVariant};

const GENERAL_HEALTH_GOAL: &str =
    "Maintain overall wellness through balanced exercise, stress management, and healthy habits.";
const GENERAL_HEALTH_WORKOUT_TYPES: &str = "Resistance, Cardio, Flexibility, Core";
const DEFAULT_SCHEDULE: &str = "3-4 sessions per week with balanced strength and cardio training";
const DEFAULT_DURATION: &str = "45-60 minutes per session";

fn goal_description(goal: &str) -> Option<&'static str> {
    match goal {
        "weight_loss" => Some("Focus on cardio activities and strength exercises to help you feel stronger and more energetic."),
        "muscle_gain" => Some("Focus on strength training exercises that work multiple muscle groups to build muscle safely."),
        "endurance" => Some("Build your stamina through consistent cardio activities and gradually increase your workout intensity."),
        "flexibility" => Some("Improve your movement and prevent injury through regular stretching, yoga, and gentle exercises."),
        "general_health" => Some(GENERAL_HEALTH_GOAL),
        _ => None,
    }
}

fn workout_types(goal: &str) -> Option<&'static str> {
    match goal {
        "weight_loss" => Some("Cardio, Resistance, Flexibility, Core"),
        "muscle_gain" => Some("Resistance, Plyometric, Flexibility, Core"),
        "endurance" => Some("Cardio, Speed Agility & Quickness, Plyometric, Resistance"),
        "flexibility" => Some("Flexibility, Balance, Core"),
        "general_health" => Some(GENERAL_HEALTH_WORKOUT_TYPES),
        _ => None,
    }
}

fn schedule_description(days: &str) -> Option<&'static str> {
    match days {
        "1-2" => Some(
            "3 sessions per week minimum, focusing on full-body workouts and efficient training",
        ),
        "3-4" => Some(DEFAULT_SCHEDULE),
        "5+" => Some("5-6 sessions per week with dedicated recovery and variety"),
        _ => None,
    }
}

fn duration_description(hours: &str) -> Option<&'static str> {
    match hours {
        "2-3" => Some("30-45 minutes per session"),
        "4-5" => Some(DEFAULT_DURATION),
        "6-8" => Some("60-75 minutes per session"),
        "8+" => Some("60-90 minutes per session"),
        _ => None,
    }
}

fn motivation_description(motivation: &str) -> Option<&'static str> {
    match motivation {
        "health" => Some("Prioritizing your health and well-being through regular exercise."),
        "appearance" => Some("Focusing on how exercise helps you look and feel your best."),
        "performance" => Some("Improving your physical performance and capabilities."),
        "stress_relief" => Some("Using exercise as a way to manage stress and feel more relaxed."),
        _ => None,
    }
}

/// How an answer should be read for text lookups under a variant.
enum Reading<'a> {
    Absent,
    Single(&'a str),
    Multiple(&'a [String]),
}

fn read(variant: QuizVariant, answers: &AnswerSet, key: QuestionKey) -> Reading<'_> {
    match answers.get(key) {
        Some(AnswerValue::Single(value)) => Reading::Single(value),
        Some(AnswerValue::Multiple(values)) if variant.allows_multiple(key) => {
            Reading::Multiple(values)
        }
        _ => Reading::Absent,
    }
}

pub(crate) fn goal_text(variant: QuizVariant, answers: &AnswerSet) -> String {
    match read(variant, answers, QuestionKey::PrimaryGoal) {
        Reading::Multiple(goals) => goals
            .iter()
            .filter_map(|goal| goal_description(goal))
            .collect::<Vec<_>>()
            .join(" "),
        Reading::Single(goal) => goal_description(goal)
            .unwrap_or(GENERAL_HEALTH_GOAL)
            .to_string(),
        Reading::Absent => GENERAL_HEALTH_GOAL.to_string(),
    }
}

/// Workout types for the selected goals. Multiple goals merge their tokens,
/// first occurrence wins the position.
pub(crate) fn workout_types_text(variant: QuizVariant, answers: &AnswerSet) -> String {
    match read(variant, answers, QuestionKey::PrimaryGoal) {
        Reading::Multiple(goals) => {
            let mut merged: Vec<&'static str> = Vec::new();
            for types in goals.iter().filter_map(|goal| workout_types(goal)) {
                for token in types.split(", ") {
                    if !merged.contains(&token) {
                        merged.push(token);
                    }
                }
            }
            merged.join(", ")
        }
        Reading::Single(goal) => workout_types(goal)
            .unwrap_or(GENERAL_HEALTH_WORKOUT_TYPES)
            .to_string(),
        Reading::Absent => GENERAL_HEALTH_WORKOUT_TYPES.to_string(),
    }
}

pub(crate) fn schedule_text(answers: &AnswerSet) -> String {
    answers
        .single(QuestionKey::DaysPerWeek)
        .and_then(schedule_description)
        .unwrap_or(DEFAULT_SCHEDULE)
        .to_string()
}

pub(crate) fn duration_text(answers: &AnswerSet) -> String {
    answers
        .single(QuestionKey::TimeAvailability)
        .and_then(duration_description)
        .unwrap_or(DEFAULT_DURATION)
        .to_string()
}

pub(crate) fn motivation_text(variant: QuizVariant, answers: &AnswerSet) -> Option<String> {
    let text = match read(variant, answers, QuestionKey::Motivation) {
        Reading::Multiple(motivations) => motivations
            .iter()
            .filter_map(|motivation| motivation_description(motivation))
            .collect::<Vec<_>>()
            .join(" "),
        Reading::Single(motivation) => motivation_description(motivation)?.to_string(),
        Reading::Absent => return None,
    };

    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_answers_use_named_defaults() {
        let answers = AnswerSet::new();
        assert_eq!(goal_text(QuizVariant::MultiGoal, &answers), GENERAL_HEALTH_GOAL);
        assert_eq!(schedule_text(&answers), DEFAULT_SCHEDULE);
        assert_eq!(duration_text(&answers), DEFAULT_DURATION);
        assert_eq!(
            workout_types_text(QuizVariant::Classic, &answers),
            GENERAL_HEALTH_WORKOUT_TYPES
        );
        assert_eq!(motivation_text(QuizVariant::MultiGoal, &answers), None);
    }

    #[test]
    fn unrecognized_answers_fall_back() {
        let answers = AnswerSet::new()
            .with(QuestionKey::PrimaryGoal, "sleep_more")
            .with(QuestionKey::DaysPerWeek, "7")
            .with(QuestionKey::TimeAvailability, "0");
        assert_eq!(goal_text(QuizVariant::Classic, &answers), GENERAL_HEALTH_GOAL);
        assert_eq!(schedule_text(&answers), DEFAULT_SCHEDULE);
        assert_eq!(duration_text(&answers), DEFAULT_DURATION);
    }

    #[test]
    fn multiple_goals_join_descriptions_and_skip_unknowns() {
        let answers = AnswerSet::new().with_multiple(
            QuestionKey::PrimaryGoal,
            ["flexibility", "unknown", "weight_loss"],
        );
        let text = goal_text(QuizVariant::MultiGoal, &answers);
        assert_eq!(
            text,
            format!(
                "{} {}",
                goal_description("flexibility").expect("known goal"),
                goal_description("weight_loss").expect("known goal")
            )
        );
    }

    #[test]
    fn multiple_unknown_goals_produce_empty_text() {
        let answers = AnswerSet::new().with_multiple(QuestionKey::PrimaryGoal, ["nap"]);
        assert_eq!(goal_text(QuizVariant::MultiGoal, &answers), "");
        assert_eq!(workout_types_text(QuizVariant::MultiGoal, &answers), "");
    }

    #[test]
    fn workout_types_merge_in_first_seen_order() {
        let answers = AnswerSet::new()
            .with_multiple(QuestionKey::PrimaryGoal, ["endurance", "muscle_gain"]);
        assert_eq!(
            workout_types_text(QuizVariant::MultiGoal, &answers),
            "Cardio, Speed Agility & Quickness, Plyometric, Resistance, Flexibility, Core"
        );
    }

    #[test]
    fn classic_variant_ignores_multi_values() {
        let answers = AnswerSet::new()
            .with_multiple(QuestionKey::PrimaryGoal, ["endurance", "muscle_gain"])
            .with_multiple(QuestionKey::Motivation, ["health"]);
        assert_eq!(goal_text(QuizVariant::Classic, &answers), GENERAL_HEALTH_GOAL);
        assert_eq!(
            workout_types_text(QuizVariant::Classic, &answers),
            GENERAL_HEALTH_WORKOUT_TYPES
        );
        assert_eq!(motivation_text(QuizVariant::Classic, &answers), None);
    }

    #[test]
    fn motivation_focus_joins_selected_motivations() {
        let answers = AnswerSet::new()
            .with_multiple(QuestionKey::Motivation, ["health", "stress_relief"]);
        assert_eq!(
            motivation_text(QuizVariant::MultiGoal, &answers).as_deref(),
            Some(
                "Prioritizing your health and well-being through regular exercise. \
                 Using exercise as a way to manage stress and feel more relaxed."
            )
        );

        let unknown = AnswerSet::new().with(QuestionKey::Motivation, "money");
        assert_eq!(motivation_text(QuizVariant::MultiGoal, &unknown), None);
    }
}
