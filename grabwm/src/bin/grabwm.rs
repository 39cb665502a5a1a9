use anyhow::Context;
use grabwm_core::Manager;
use std::process::ExitCode;
use xlib_display_server::{XlibDisplayServer, XlibWindowHandle};

fn main() -> ExitCode {
    if let Err(err) = grabwm::utils::log::setup_logging() {
        eprintln!("Couldn't set up logging: {err:?}");
    }
    tracing::info!("grabwm booting...");

    match run() {
        Ok(()) => {
            tracing::info!("Completed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("Completed with error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let config = grabwm::load();

    tracing::info!("Loading XLib backend");
    let manager = Manager::<XlibWindowHandle, grabwm::Config, XlibDisplayServer>::new(config)
        .context("couldn't start the display server")?;

    manager.register_child_hook();
    manager
        .start_event_loop()
        .context("event loop stopped unexpectedly")
}
