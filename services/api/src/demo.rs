use crate::commands::render_summary;
use crate::infra::parse_date;
use chrono::{Local, NaiveDate};
use clap::Args;
use fitness_quiz::error::AppError;
use fitness_quiz::quiz::router::QuizState;
use fitness_quiz::quiz::{render_plan, QuestionKey, QuizSession, QuizVariant};
use std::io::Write;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Date printed on the plan preview (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Print the full plan document for every respondent
    #[arg(long)]
    pub(crate) show_plans: bool,
}

/// A scripted respondent. Each step is one option value, or several values
/// for a multi-select question.
struct Respondent {
    name: &'static str,
    variant: QuizVariant,
    steps: [&'static [&'static str]; 8],
}

const RESPONDENTS: [Respondent; 3] = [
    Respondent {
        name: "Stressed desk worker starting out",
        variant: QuizVariant::Classic,
        steps: [
            &["beginner"],
            &["flexibility"],
            &["4-5"],
            &["gym_alone"],
            &["1-2"],
            &["sedentary"],
            &["stress_relief"],
            &["1_month"],
        ],
    },
    Respondent {
        name: "Advanced athlete cutting weight",
        variant: QuizVariant::Classic,
        steps: [
            &["advanced"],
            &["weight_loss"],
            &["6-8"],
            &["coach_led"],
            &["5+"],
            &["very_active"],
            &["performance"],
            &["3_months"],
        ],
    },
    Respondent {
        name: "Two goals, training with a friend",
        variant: QuizVariant::MultiGoal,
        steps: [
            &["intermediate"],
            &["muscle_gain", "endurance"],
            &["2-3"],
            &["with_friend"],
            &["3-4"],
            &["lightly_active"],
            &["health", "appearance"],
            &["1_year"],
        ],
    },
];

fn complete_session(respondent: &Respondent) -> Result<QuizSession, AppError> {
    let mut session = QuizSession::new(respondent.variant);
    session.start();
    for step in respondent.steps {
        let allows_multiple = session
            .current_question()
            .map(|question| respondent.variant.allows_multiple(question.key))
            .unwrap_or(false);
        if allows_multiple {
            for value in step {
                session.toggle(value)?;
            }
            session.continue_multi()?;
        } else {
            for value in step {
                session.select(value)?;
            }
        }
    }
    Ok(session)
}

pub(crate) fn run_demo<W: Write>(args: &DemoArgs, out: &mut W) -> Result<(), AppError> {
    let generated_on = args.date.unwrap_or_else(|| Local::now().date_naive());

    writeln!(out, "Fitness quiz demo")?;
    for respondent in &RESPONDENTS {
        let session = complete_session(respondent)?;
        let state = QuizState::new(respondent.variant, true);
        let answers = session.into_answers();
        let recommendation = state.recommend(&answers)?;

        writeln!(
            out,
            "\n=== {} ({} questionnaire) ===",
            respondent.name, respondent.variant
        )?;
        for key in QuestionKey::ordered() {
            if let Some(answer) = answers.get(key) {
                writeln!(out, "  {}: {}", key.title(), answer.values().join(" + "))?;
            }
        }
        writeln!(out)?;
        out.write_all(render_summary(&recommendation).as_bytes())?;

        if args.show_plans {
            writeln!(out, "\n--- plan ---")?;
            writeln!(out, "{}", render_plan(&recommendation, &answers, generated_on))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_respondent_completes_and_validates() {
        for respondent in &RESPONDENTS {
            let session = complete_session(respondent).expect("scripted answers are valid");
            assert!(session.is_complete(), "{}", respondent.name);
            assert_eq!(session.answers().len(), 8);
            assert!(session.answers().validate(respondent.variant).is_ok());
        }
    }

    #[test]
    fn demo_prints_each_respondent() {
        let args = DemoArgs {
            date: NaiveDate::from_ymd_opt(2025, 6, 1),
            show_plans: true,
        };
        let mut buffer = Vec::new();

        run_demo(&args, &mut buffer).expect("demo runs");

        let output = String::from_utf8(buffer).expect("utf-8 output");
        assert_eq!(output.matches("=== ").count(), RESPONDENTS.len());
        assert_eq!(output.matches("Generated on: 6/1/2025").count(), 3);
        assert!(output.contains("Primary Goal: muscle_gain + endurance"));
        assert!(output.contains("Personal training"));
    }
}
