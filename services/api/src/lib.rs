mod cli;
mod commands;
mod demo;
mod infra;
mod interactive;
mod routes;
mod server;

use fitness_quiz::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
