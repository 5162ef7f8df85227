mod cli;
mod infra;
mod render;
mod routes;
mod server;

use triage_rules::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
