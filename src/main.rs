use std::process::ExitCode;

use flappy::app::App;
use flappy::constants::LOOP_TIME;
use flappy::platform;
use tracing::{error, info};

/// The main entry point of the application.
///
/// Initializes SDL, the window, the game state, and then enters the main
/// game loop.
pub fn main() -> ExitCode {
    if let Err(e) = platform::init_console() {
        eprintln!("Could not initialize console: {e}");
        return ExitCode::FAILURE;
    }

    let mut app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            error!("Could not create app: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(loop_time = ?LOOP_TIME, "Starting game loop");

    loop {
        if !app.run() {
            break;
        }
    }

    ExitCode::SUCCESS
}
