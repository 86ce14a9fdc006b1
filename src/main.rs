//! GL Pong entry point
//!
//! Sets up logging and runs the game loop. Any fatal error ends the process
//! with a non-zero exit code.

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("GL Pong starting...");

    match gl_pong::app::run() {
        Ok(()) => {
            log::info!("GL Pong exited");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Fatal: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
