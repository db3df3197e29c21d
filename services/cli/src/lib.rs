mod cli;
mod commands;
mod infra;

use talent_fit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
