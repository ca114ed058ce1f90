use crate::cli::{OutputFormat, QuizOptions};
use crate::infra::{load_answers, parse_date, parse_variant, resolve_quiz};
use chrono::{Local, NaiveDate};
use clap::Args;
use fitness_quiz::config::AppConfig;
use fitness_quiz::error::AppError;
use fitness_quiz::quiz::router::QuizState;
use fitness_quiz::quiz::{
    question_set, render_plan, AnswerSet, Catalog, QuestionDefinition, QuizVariant,
    Recommendation, SelectionMode, PLAN_FILE_NAME,
};
use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Questionnaire variant: classic or multi_goal
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<QuizVariant>,
    #[command(flatten)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct AnswerArgs {
    /// Answer as key=value, or key=a,b for a multi-select question. Repeatable.
    #[arg(short, long = "answer", value_name = "KEY=VALUE")]
    pub(crate) answers: Vec<String>,
    /// JSON file holding an answer object
    #[arg(long)]
    pub(crate) answers_file: Option<PathBuf>,
}

impl AnswerArgs {
    pub(crate) fn load(&self) -> Result<AnswerSet, AppError> {
        load_answers(self.answers_file.as_deref(), &self.answers)
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    #[command(flatten)]
    pub(crate) answers: AnswerArgs,
    #[command(flatten)]
    pub(crate) quiz: QuizOptions,
    #[command(flatten)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct PlanArgs {
    #[command(flatten)]
    pub(crate) answers: AnswerArgs,
    #[command(flatten)]
    pub(crate) quiz: QuizOptions,
    /// Date printed on the plan (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Write the plan to this file, or into this directory as my-fitness-plan.txt
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn quiz_state(config: &AppConfig, options: QuizOptions) -> QuizState {
    let quiz = resolve_quiz(config.quiz, options.variant, options.strict);
    QuizState::new(quiz.variant, quiz.strict)
}

pub(crate) fn run_questions<W: Write>(
    config: &AppConfig,
    args: &QuestionsArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let variant = args.variant.unwrap_or(config.quiz.variant);
    let questions = question_set(variant);

    if args.format.json {
        let payload = json!({ "variant": variant, "questions": questions });
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
    } else {
        out.write_all(render_questions(variant, &questions).as_bytes())?;
    }
    Ok(())
}

pub(crate) fn run_catalog<W: Write>(format: OutputFormat, out: &mut W) -> Result<(), AppError> {
    let catalog = Catalog::standard();

    if format.json {
        let payload = json!({ "version": catalog.version(), "classes": catalog.entries() });
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
    } else {
        out.write_all(render_catalog(catalog).as_bytes())?;
    }
    Ok(())
}

pub(crate) fn run_recommend<W: Write>(
    config: &AppConfig,
    args: &RecommendArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let answers = args.answers.load()?;
    let recommendation = quiz_state(config, args.quiz).recommend(&answers)?;

    if args.format.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&recommendation)?)?;
    } else {
        out.write_all(render_summary(&recommendation).as_bytes())?;
    }
    Ok(())
}

pub(crate) fn run_plan<W: Write>(
    config: &AppConfig,
    args: &PlanArgs,
    out: &mut W,
) -> Result<(), AppError> {
    let answers = args.answers.load()?;
    let recommendation = quiz_state(config, args.quiz).recommend(&answers)?;
    let generated_on = args.date.unwrap_or_else(|| Local::now().date_naive());
    let plan = render_plan(&recommendation, &answers, generated_on);

    match &args.output {
        Some(path) => {
            let written = write_plan(path, &plan)?;
            writeln!(out, "Plan written to {}", written.display())?;
        }
        None => writeln!(out, "{plan}")?,
    }
    Ok(())
}

/// Writes the plan and returns the file it landed in.
pub(crate) fn write_plan(path: &Path, plan: &str) -> Result<PathBuf, AppError> {
    let target = if path.is_dir() {
        path.join(PLAN_FILE_NAME)
    } else {
        path.to_path_buf()
    };
    fs::write(&target, plan)?;
    info!(path = %target.display(), "plan exported");
    Ok(target)
}

pub(crate) fn render_questions(variant: QuizVariant, questions: &[QuestionDefinition]) -> String {
    let mut text = format!(
        "Questionnaire ({}, {} questions)\n",
        variant,
        questions.len()
    );
    for (number, question) in questions.iter().enumerate() {
        let rule = match question.mode {
            SelectionMode::Single => "choose one".to_string(),
            SelectionMode::Multiple { max } => format!("choose up to {max}"),
        };
        text.push_str(&format!(
            "\n{}. {} [{}] ({})\n",
            number + 1,
            question.title,
            rule,
            question.key
        ));
        for (index, option) in question.options.iter().enumerate() {
            text.push_str(&format!(
                "   {}) {} = {}\n",
                index + 1,
                option.value,
                option.label
            ));
        }
    }
    text
}

pub(crate) fn render_catalog(catalog: &Catalog) -> String {
    let mut text = format!(
        "Class catalog {} ({} classes)\n",
        catalog.version(),
        catalog.len()
    );
    for entry in catalog.entries() {
        let tags: Vec<&str> = entry.tags.iter().map(|tag| tag.as_str()).collect();
        text.push_str(&format!(
            "\n{} ({})\n  {}\n  tags: {}\n",
            entry.name,
            entry.id,
            entry.description,
            tags.join(", ")
        ));
    }
    text
}

pub(crate) fn render_summary(recommendation: &Recommendation) -> String {
    let mut text = String::from("Your personalized fitness plan\n");
    text.push_str(&format!("\nPrimary goal: {}\n", recommendation.primary_goal));
    if let Some(focus) = &recommendation.motivation_focus {
        text.push_str(&format!("Motivation focus: {focus}\n"));
    }
    text.push_str(&format!("Schedule: {}\n", recommendation.schedule));
    text.push_str(&format!("Workout types: {}\n", recommendation.workout_types));
    text.push_str(&format!("Session duration: {}\n", recommendation.duration));

    text.push_str("\nRecommended classes:\n");
    if recommendation.recommended_classes.is_empty() {
        text.push_str("  (no class matched your answers)\n");
    }
    for (rank, class) in recommendation.recommended_classes.iter().enumerate() {
        text.push_str(&format!(
            "  {}. {} (score {})\n     {}\n",
            rank + 1,
            class.entry.name,
            class.score,
            class.entry.description
        ));
    }

    text.push_str("\nKey recommendations:\n");
    for tip in &recommendation.key_recommendations {
        text.push_str(&format!("  - {tip}\n"));
    }

    if recommendation.personal_training_spotlight {
        text.push_str(
            "\nPersonal training: ask about one-on-one and partner sessions with our coaches.\n",
        );
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_quiz::config::{AppEnvironment, QuizConfig, ServerConfig, TelemetryConfig};
    use serde_json::Value;

    fn config(variant: QuizVariant) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            telemetry: TelemetryConfig {
                log_level: "warn".to_string(),
            },
            quiz: QuizConfig {
                variant,
                strict: false,
            },
        }
    }

    fn answer_args(pairs: &[&str]) -> AnswerArgs {
        AnswerArgs {
            answers: pairs.iter().map(|pair| pair.to_string()).collect(),
            answers_file: None,
        }
    }

    fn output(buffer: Vec<u8>) -> String {
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn questions_text_marks_multi_select() {
        let mut buffer = Vec::new();
        run_questions(
            &config(QuizVariant::MultiGoal),
            &QuestionsArgs::default(),
            &mut buffer,
        )
        .expect("questions render");

        let text = output(buffer);
        assert!(text.starts_with("Questionnaire (multi_goal, 8 questions)"));
        assert!(text.contains("2. Primary Goal [choose up to 2] (primary_goal)"));
        assert!(text.contains("   4) with_trainer = With a Trainer"));
    }

    #[test]
    fn catalog_json_lists_every_class() {
        let mut buffer = Vec::new();
        run_catalog(OutputFormat { json: true }, &mut buffer).expect("catalog renders");

        let payload: Value = serde_json::from_slice(&buffer).expect("json");
        assert_eq!(payload["classes"].as_array().map(Vec::len), Some(22));
        assert_eq!(payload["classes"][0]["id"], "align_flow_yoga");
    }

    #[test]
    fn recommend_prints_ranked_summary() {
        let args = RecommendArgs {
            answers: answer_args(&[
                "fitness_level=beginner",
                "primary_goal=flexibility",
                "motivation=stress_relief",
            ]),
            ..RecommendArgs::default()
        };
        let mut buffer = Vec::new();
        run_recommend(&config(QuizVariant::Classic), &args, &mut buffer).expect("recommends");

        let text = output(buffer);
        assert!(text.contains("Primary goal: Improve your movement"));
        assert!(text.contains("Motivation focus: Using exercise as a way to manage stress"));
        assert!(text.contains("  1. "));
        assert!(!text.contains("Personal training"));
    }

    #[test]
    fn strict_flag_rejects_options_from_other_variant() {
        let args = RecommendArgs {
            answers: answer_args(&["training_style=with_friend"]),
            quiz: QuizOptions {
                variant: Some(QuizVariant::Classic),
                strict: true,
            },
            format: OutputFormat { json: true },
        };
        let mut buffer = Vec::new();
        let error = run_recommend(&config(QuizVariant::MultiGoal), &args, &mut buffer)
            .expect_err("strict mode rejects");
        assert!(matches!(error, AppError::Answers(_)));
        assert!(buffer.is_empty());
    }

    #[test]
    fn plan_is_written_into_a_directory() {
        let directory = std::env::temp_dir().join(format!("fitness-quiz-plan-{}", std::process::id()));
        fs::create_dir_all(&directory).expect("temp dir");
        let args = PlanArgs {
            answers: answer_args(&["primary_goal=endurance,weight_loss"]),
            date: NaiveDate::from_ymd_opt(2024, 11, 2),
            output: Some(directory.clone()),
            ..PlanArgs::default()
        };
        let mut buffer = Vec::new();

        run_plan(&config(QuizVariant::MultiGoal), &args, &mut buffer).expect("plan written");

        let written = directory.join(PLAN_FILE_NAME);
        let plan = fs::read_to_string(&written).expect("plan file");
        fs::remove_dir_all(&directory).ok();
        assert!(output(buffer).contains("my-fitness-plan.txt"));
        assert!(plan.contains("Generated on: 11/2/2024"));
        assert!(plan.contains("• Primary Goal: endurance,weight_loss"));
    }
}
