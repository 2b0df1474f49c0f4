use std::path::PathBuf;

use clap::Parser;

use desk::app::App;
use desk::config::Config;
use desk::directory::Directory;
use desk::error::{AppError, AppResult};
use desk::logging;

/// Booking desk with suggestion pickers for guests, suppliers and airports.
#[derive(Debug, Parser)]
#[command(name = "desk", version)]
struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// JSON file with guests, suppliers and airports.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,
    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// Characters typed before suggestions open.
    #[arg(long, value_name = "N")]
    min_chars: Option<usize>,
    /// Keymap preset: `default` or `emacs`.
    #[arg(long, value_name = "NAME")]
    keymap: Option<String>,
}

impl Cli {
    fn load_config(&self) -> AppResult<Config> {
        let mut config = match &self.config {
            Some(path) if !path.is_file() => {
                return Err(AppError::invalid_argument(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            Some(path) => Config::load_from_path(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut Config) {
        if let Some(min_chars) = self.min_chars {
            config.picker.min_chars = min_chars.max(1);
        }
        if let Some(keymap) = &self.keymap {
            config.keymap.preset = keymap.clone();
        }
        if let Some(path) = &self.log_file {
            config.log.file = Some(path.clone());
        }
    }
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = cli.load_config()?;
    logging::init(&config.log)?;

    let directory = match &cli.data {
        Some(path) => Directory::load_from_path(path)?,
        None => Directory::builtin(),
    };
    let mut app = App::new_with_config(&directory, config)?;

    app.run().await
}
