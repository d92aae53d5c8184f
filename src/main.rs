//! Course Registry entry point
//!
//! Loads the enrollment file and runs the registration menu on stdin/stdout.

use std::io;

use course_registry::{App, Settings};

fn main() -> io::Result<()> {
    // Diagnostics go to stderr and stay silent unless RUST_LOG asks for them
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let settings = Settings::default();
    log::info!("Course Registry starting with {}", settings.data_file().display());

    let mut app = App::new(settings, io::stdin().lock(), io::stdout());
    if !app.load()? {
        // The enrollment file is never repaired automatically
        return Ok(());
    }

    let exit = app.run()?;
    log::debug!("Exiting after {exit:?}");
    Ok(())
}
