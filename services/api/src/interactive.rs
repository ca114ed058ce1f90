use crate::cli::QuizOptions;
use crate::commands::{quiz_state, render_summary, write_plan};
use crate::infra::{parse_date, parse_variant};
use chrono::{Local, NaiveDate};
use clap::Args;
use fitness_quiz::config::AppConfig;
use fitness_quiz::error::AppError;
use fitness_quiz::quiz::session::SelectionEffect;
use fitness_quiz::quiz::{
    render_plan, QuestionDefinition, QuizSession, QuizVariant, SelectionMode, ToggleOutcome,
};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug, Default)]
pub(crate) struct QuizArgs {
    /// Questionnaire variant: classic or multi_goal
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<QuizVariant>,
    /// Save the plan to this file or directory once the quiz is complete
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Date printed on the saved plan (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

enum Input {
    Quit,
    Restart,
    Continue,
    Number(usize),
    Value(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "q" | "quit" => Self::Quit,
            "r" | "restart" => Self::Restart,
            "" | "c" | "continue" => Self::Continue,
            lowered => match lowered.parse::<usize>() {
                Ok(number) => Self::Number(number),
                Err(_) => Self::Value(trimmed.to_string()),
            },
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt<W: Write>(
    session: &QuizSession,
    question: &QuestionDefinition,
    out: &mut W,
) -> Result<(), AppError> {
    let progress = session.progress();
    writeln!(out, "\n{} ({:.0}%)", progress.label, progress.percent)?;
    match question.mode {
        SelectionMode::Single => writeln!(out, "{}", question.title)?,
        SelectionMode::Multiple { max } => writeln!(
            out,
            "{} (choose up to {max}, press Enter to continue)",
            question.title
        )?,
    }

    let selected = session
        .answers()
        .get(question.key)
        .map(|answer| answer.values())
        .unwrap_or_default();
    for (index, option) in question.options.iter().enumerate() {
        match question.mode {
            SelectionMode::Single => writeln!(out, "  {}) {}", index + 1, option.label)?,
            SelectionMode::Multiple { .. } => {
                let mark = if selected.contains(&option.value) { "x" } else { " " };
                writeln!(out, "  {}) [{}] {}", index + 1, mark, option.label)?
            }
        }
    }
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Runs the questionnaire over line-based input. Options are picked by
/// number or by value; `r` restarts and `q` quits.
pub(crate) fn run_quiz<R: BufRead, W: Write>(
    config: &AppConfig,
    args: &QuizArgs,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let state = quiz_state(
        config,
        QuizOptions {
            variant: args.variant,
            strict: false,
        },
    );
    let variant = state.engine.variant();
    let mut session = QuizSession::new(variant);

    writeln!(out, "Fitness quiz ({variant}). Press Enter to start or q to quit.")?;
    match read_line(input)?.as_deref().map(Input::parse) {
        None | Some(Input::Quit) => return Ok(()),
        Some(_) => {}
    }
    session.start();

    while let Some(question) = session.current_question().copied() {
        prompt(&session, &question, out)?;
        let Some(line) = read_line(input)? else {
            return Err(AppError::Input(
                "input ended before every question was answered".to_string(),
            ));
        };

        let outcome = match (Input::parse(&line), question.mode) {
            (Input::Quit, _) => {
                writeln!(out, "Quiz abandoned.")?;
                return Ok(());
            }
            (Input::Restart, _) => {
                session.restart();
                session.start();
                writeln!(out, "Starting over.")?;
                continue;
            }
            (Input::Continue, SelectionMode::Single) => continue,
            (Input::Continue, SelectionMode::Multiple { .. }) => {
                session.continue_multi().map(|_| None)
            }
            (Input::Number(number), _) => session.select_index(number).map(|effect| match effect {
                SelectionEffect::Toggled(toggle) => Some(toggle),
                SelectionEffect::Advanced(_) => None,
            }),
            (Input::Value(value), SelectionMode::Single) => session.select(&value).map(|_| None),
            (Input::Value(value), SelectionMode::Multiple { .. }) => {
                session.toggle(&value).map(Some)
            }
        };

        match outcome {
            Ok(Some(ToggleOutcome::LimitReached)) => {
                if let SelectionMode::Multiple { max } = question.mode {
                    writeln!(out, "You can pick up to {max} options.")?;
                }
            }
            Ok(_) => {}
            Err(error) => {
                debug!(%error, "quiz input rejected");
                writeln!(out, "{error}")?;
            }
        }
    }

    let answers = session.into_answers();
    let recommendation = state.recommend(&answers)?;
    writeln!(out)?;
    out.write_all(render_summary(&recommendation).as_bytes())?;

    if let Some(path) = &args.output {
        let generated_on = args.date.unwrap_or_else(|| Local::now().date_naive());
        let written = write_plan(path, &render_plan(&recommendation, &answers, generated_on))?;
        writeln!(out, "\nPlan saved to {}", written.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_quiz::config::{AppEnvironment, QuizConfig, ServerConfig, TelemetryConfig};

    fn config() -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            telemetry: TelemetryConfig {
                log_level: "warn".to_string(),
            },
            quiz: QuizConfig::default(),
        }
    }

    fn play(variant: QuizVariant, script: &str) -> (Result<(), AppError>, String) {
        let args = QuizArgs {
            variant: Some(variant),
            ..QuizArgs::default()
        };
        let mut input = script.as_bytes();
        let mut buffer = Vec::new();
        let result = run_quiz(&config(), &args, &mut input, &mut buffer);
        (result, String::from_utf8(buffer).expect("utf-8 output"))
    }

    #[test]
    fn classic_run_by_number_prints_summary() {
        let (result, output) = play(QuizVariant::Classic, "\n1\n4\n2\n2\n1\n1\n4\n1\n");

        assert!(result.is_ok());
        assert!(output.contains("Question 1 of 8 ("));
        assert!(output.contains("Question 8 of 8 (100%)"));
        assert!(output.contains("Primary goal: Improve your movement"));
        assert!(output.contains("1. LUNCHTIME YOGA (score 12)"));
    }

    #[test]
    fn multi_goal_run_caps_toggles_and_spotlights_trainers() {
        let script = "\n2\n1\n3\n4\n\n1\n5\n2\n3\nhealth\n\n2\n";
        let (result, output) = play(QuizVariant::MultiGoal, script);

        assert!(result.is_ok());
        assert!(output.contains("You can pick up to 2 options."));
        assert!(output.contains("  1) [x] Weight Loss"));
        assert!(output.contains("Personal training"));
        assert!(output.contains("Motivation focus: Prioritizing your health"));
    }

    #[test]
    fn bad_input_reprompts_the_same_question() {
        let (result, output) = play(QuizVariant::Classic, "\n9\nelite\nq\n");

        assert!(result.is_ok());
        assert!(output.contains("fitness_level has no option number 9"));
        assert!(output.contains("'elite' is not an option for fitness_level"));
        assert_eq!(output.matches("Question 1 of 8").count(), 3);
        assert!(output.ends_with("Quiz abandoned.\n"));
    }

    #[test]
    fn restart_clears_previous_answers() {
        let (result, output) = play(QuizVariant::Classic, "\n3\nr\nq\n");

        assert!(result.is_ok());
        assert!(output.contains("Starting over."));
        assert_eq!(output.matches("Question 1 of 8").count(), 2);
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let (result, _) = play(QuizVariant::Classic, "\n1\n");
        assert!(matches!(result, Err(AppError::Input(_))));
    }

    #[test]
    fn quitting_on_welcome_prints_nothing_else() {
        let (result, output) = play(QuizVariant::MultiGoal, "q\n");
        assert!(result.is_ok());
        assert_eq!(
            output,
            "Fitness quiz (multi_goal). Press Enter to start or q to quit.\n"
        );
    }
}
