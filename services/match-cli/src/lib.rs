mod cli;
mod commands;
mod demo;
mod infra;

use talent_match::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
