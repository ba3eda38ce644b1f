#[cfg(target_os = "macos")]
mod macos_main;

use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    sitewrap::logging::init();

    // Initialize the global event bus before any UI is created
    sitewrap::events::init_event_bus();

    #[cfg(target_os = "macos")]
    {
        if let Err(err) = macos_main::run() {
            error!(%err, "startup failed");
            return ExitCode::FAILURE;
        }
        ExitCode::SUCCESS
    }

    #[cfg(not(target_os = "macos"))]
    {
        error!("sitewrap only runs on macOS");
        ExitCode::FAILURE
    }
}
