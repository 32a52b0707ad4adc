// cli.rs - Command-line interface configuration
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Settings;

#[derive(Parser, Debug, Clone)]
#[command(name = "freelook")]
#[command(about = "Free-look camera controller demo harness", long_about = None)]
pub struct Cli {
    /// JSON settings file (camera and input tuning)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the keyboard translation speed
    #[arg(long, global = true)]
    pub speed: Option<f32>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a window and fly the camera interactively (default)
    View,
    /// Replay a JSON input script headlessly and report the final pose
    Replay {
        /// Path to the input script
        script: PathBuf,
    },
}

impl Cli {
    /// Settings file contents with command-line overrides applied
    pub fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = Settings::load_or_default(self.config.as_deref())?;
        if let Some(speed) = self.speed {
            settings.camera.speed = speed;
        }
        Ok(settings)
    }

    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::View)
    }
}
