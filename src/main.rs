use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::Path;

use freelook::cli::{Cli, Command};
use freelook::config::Settings;
use freelook::script::InputScript;
use freelook::viewer;

fn replay(path: &Path, settings: &Settings) -> Result<()> {
    let script = InputScript::load(path)?;
    let report = script.run(&settings.camera);
    let transform = report.camera.transform();

    log::info!("Final eye:         {}", report.camera.eye());
    log::info!("Final direction:   {}", report.camera.direction());
    log::info!("Final orientation: {}", transform.orientation);
    log::info!(
        "Keys:              {} handled, {} unhandled",
        report.handled_keys, report.unhandled_keys
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = cli.settings()?;

    match cli.selected_command() {
        Command::View => {
            log::info!("Controls: drag to look, WASD to move, arrow keys for analog, Escape to quit");
            viewer::run(&settings)
        }
        Command::Replay { script } => replay(&script, &settings),
    }
}
