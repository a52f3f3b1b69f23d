mod cli;
pub mod config;
pub mod error;
pub mod registry;
mod server;
pub mod telemetry;

use error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
