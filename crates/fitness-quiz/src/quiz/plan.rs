//! Plain-text export of a recommendation.

use super::answers::AnswerSet;
use super::engine::Recommendation;
use super::questions::QuestionKey;
use chrono::NaiveDate;

pub const PLAN_FILE_NAME: &str = "my-fitness-plan.txt";
pub const PLAN_DATE_FORMAT: &str = "%-m/%-d/%Y";

const UNANSWERED: &str = "not answered";

/// Echo lines in document order. `Time Availability` carries a unit suffix.
const ANSWER_LINES: [(QuestionKey, &str, &str); 8] = [
    (QuestionKey::FitnessLevel, "Current Fitness Level", ""),
    (QuestionKey::PrimaryGoal, "Primary Goal", ""),
    (QuestionKey::TimeAvailability, "Time Availability", " hours/week"),
    (QuestionKey::TrainingStyle, "Training Style", ""),
    (QuestionKey::DaysPerWeek, "Days Per Week", ""),
    (QuestionKey::ActivityLevel, "Current Activity Level", ""),
    (QuestionKey::Motivation, "Motivation", ""),
    (QuestionKey::Timeline, "Timeline", ""),
];

pub fn format_plan_date(date: NaiveDate) -> String {
    date.format(PLAN_DATE_FORMAT).to_string()
}

/// The goal line carries the motivation focus, when there is one, after the
/// goal text.
pub fn render_plan(
    recommendation: &Recommendation,
    answers: &AnswerSet,
    generated_on: NaiveDate,
) -> String {
    let primary_goal = match &recommendation.motivation_focus {
        Some(focus) => format!("{} {}", recommendation.primary_goal, focus),
        None => recommendation.primary_goal.clone(),
    };

    let mut plan = String::from("MY PERSONALIZED FITNESS PLAN\n");
    plan.push_str(&format!("Generated on: {}\n\n", format_plan_date(generated_on)));
    plan.push_str(&format!("PRIMARY GOAL: {primary_goal}\n\n"));
    plan.push_str(&format!("RECOMMENDED SCHEDULE: {}\n\n", recommendation.schedule));
    plan.push_str(&format!("WORKOUT TYPES: {}\n\n", recommendation.workout_types));
    plan.push_str(&format!("SESSION DURATION: {}\n\n", recommendation.duration));

    plan.push_str("RECOMMENDED CLASSES FOR YOU:\n");
    for class in &recommendation.recommended_classes {
        plan.push_str(&format!("• {}: {}\n", class.entry.name, class.entry.description));
    }
    plan.push('\n');

    plan.push_str("KEY RECOMMENDATIONS:\n");
    for tip in &recommendation.key_recommendations {
        plan.push_str(&format!("• {tip}\n"));
    }
    plan.push('\n');

    plan.push_str("YOUR ANSWERS:\n");
    for (key, label, suffix) in ANSWER_LINES {
        let value = answers
            .get(key)
            .map(|answer| answer.echo())
            .unwrap_or_else(|| UNANSWERED.to_string());
        plan.push_str(&format!("• {label}: {value}{suffix}\n"));
    }
    plan.push('\n');

    plan.push_str(
        "Remember: Consistency is key! Start where you are, use what you have, do what you can.\n",
    );
    plan.push_str("Good luck on your fitness journey!");
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::engine::RecommendationEngine;
    use crate::quiz::questions::QuizVariant;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).expect("valid date")
    }

    #[test]
    fn date_has_no_zero_padding() {
        assert_eq!(format_plan_date(date()), "3/7/2024");
        let december = NaiveDate::from_ymd_opt(2025, 12, 25).expect("valid date");
        assert_eq!(format_plan_date(december), "12/25/2025");
    }

    #[test]
    fn empty_plan_follows_template() {
        let answers = AnswerSet::new();
        let recommendation = RecommendationEngine::new(QuizVariant::Classic).recommend(&answers);

        let plan = render_plan(&recommendation, &answers, date());

        let expected = "\
MY PERSONALIZED FITNESS PLAN
Generated on: 3/7/2024

PRIMARY GOAL: Maintain overall wellness through balanced exercise, stress management, and healthy habits.

RECOMMENDED SCHEDULE: 3-4 sessions per week with balanced strength and cardio training

WORKOUT TYPES: Resistance, Cardio, Flexibility, Core

SESSION DURATION: 45-60 minutes per session

RECOMMENDED CLASSES FOR YOU:

KEY RECOMMENDATIONS:

YOUR ANSWERS:
• Current Fitness Level: not answered
• Primary Goal: not answered
• Time Availability: not answered hours/week
• Training Style: not answered
• Days Per Week: not answered
• Current Activity Level: not answered
• Motivation: not answered
• Timeline: not answered

Remember: Consistency is key! Start where you are, use what you have, do what you can.
Good luck on your fitness journey!";
        assert_eq!(plan, expected);
    }

    #[test]
    fn answers_and_classes_are_echoed() {
        let answers = AnswerSet::new()
            .with(QuestionKey::FitnessLevel, "beginner")
            .with_multiple(QuestionKey::PrimaryGoal, ["flexibility", "endurance"])
            .with(QuestionKey::TimeAvailability, "4-5")
            .with(QuestionKey::Motivation, "stress_relief");
        let recommendation = RecommendationEngine::new(QuizVariant::MultiGoal).recommend(&answers);

        let plan = render_plan(&recommendation, &answers, date());

        assert!(plan.contains("• Primary Goal: flexibility,endurance\n"));
        assert!(plan.contains("• Time Availability: 4-5 hours/week\n"));
        assert!(plan.contains("• Training Style: not answered\n"));
        let first = &recommendation.recommended_classes[0];
        assert!(plan.contains(&format!(
            "RECOMMENDED CLASSES FOR YOU:\n• {}: {}\n",
            first.entry.name, first.entry.description
        )));
        assert!(plan.contains(&format!(
            "KEY RECOMMENDATIONS:\n• {}\n",
            recommendation.key_recommendations[0]
        )));
    }

    #[test]
    fn motivation_focus_follows_the_goal() {
        let answers = AnswerSet::new()
            .with(QuestionKey::PrimaryGoal, "flexibility")
            .with(QuestionKey::Motivation, "stress_relief");
        let recommendation = RecommendationEngine::new(QuizVariant::MultiGoal).recommend(&answers);

        let plan = render_plan(&recommendation, &answers, date());

        assert!(plan.contains(
            "PRIMARY GOAL: Improve your movement and prevent injury through regular \
             stretching, yoga, and gentle exercises. Using exercise as a way to manage \
             stress and feel more relaxed.\n\n"
        ));
        assert!(plan.contains("• Motivation: stress_relief\n"));
    }
}
