use std::process::ExitCode;
use task_timer::{commands::Cli, libs::logging, msg_error};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
