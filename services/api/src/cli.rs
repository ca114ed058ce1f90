use crate::commands::{
    run_catalog, run_plan, run_questions, run_recommend, PlanArgs, QuestionsArgs, RecommendArgs,
};
use crate::demo::{run_demo, DemoArgs};
use crate::infra::parse_variant;
use crate::interactive::{run_quiz, QuizArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use fitness_quiz::config::AppConfig;
use fitness_quiz::error::AppError;
use fitness_quiz::quiz::QuizVariant;
use fitness_quiz::telemetry::{self, LogTarget};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(
    name = "Fitness Quiz",
    about = "Serve or run the fitness questionnaire and class recommendation engine",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the questionnaire for a variant
    Questions(QuestionsArgs),
    /// Print the class catalog
    Catalog(OutputFormat),
    /// Score a set of answers and print the recommendation
    Recommend(RecommendArgs),
    /// Render the plain-text plan for a set of answers
    Plan(PlanArgs),
    /// Answer the questionnaire interactively
    Quiz(QuizArgs),
    /// Walk through sample respondents end to end
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) quiz: QuizOptions,
}

/// Overrides for `QUIZ_VARIANT` and `QUIZ_STRICT`.
#[derive(Args, Debug, Default, Clone, Copy)]
pub(crate) struct QuizOptions {
    /// Questionnaire variant: classic or multi_goal
    #[arg(long, value_parser = parse_variant)]
    pub(crate) variant: Option<QuizVariant>,
    /// Reject answers that are not valid for the variant
    #[arg(long)]
    pub(crate) strict: bool,
}

#[derive(Args, Debug, Default, Clone, Copy)]
pub(crate) struct OutputFormat {
    /// Print JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;

    if let Command::Serve(args) = command {
        telemetry::init(&config.telemetry, LogTarget::Stdout)?;
        return server::run(config, args).await;
    }

    // Command output owns stdout.
    telemetry::init(&config.telemetry, LogTarget::Stderr)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = match command {
        Command::Serve(_) => Ok(()),
        Command::Questions(args) => run_questions(&config, &args, &mut out),
        Command::Catalog(format) => run_catalog(format, &mut out),
        Command::Recommend(args) => run_recommend(&config, &args, &mut out),
        Command::Plan(args) => run_plan(&config, &args, &mut out),
        Command::Quiz(args) => {
            let stdin = io::stdin();
            run_quiz(&config, &args, &mut stdin.lock(), &mut out)
        }
        Command::Demo(args) => run_demo(&args, &mut out),
    };
    outcome?;
    out.flush()?;
    Ok(())
}
