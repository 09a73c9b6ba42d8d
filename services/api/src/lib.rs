mod cli;
mod infra;
mod preview;
mod routes;
mod server;

use repricer::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
