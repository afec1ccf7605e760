use clap::Parser;
use relm4::prelude::*;
use spider::config;
use spider::gui::app::{APP_ID, AppModel};
use spider::sys::runtime;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spider", version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of the per-user one
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write the default configuration file (if missing), print its path and exit
    #[arg(long)]
    write_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if cli.write_config {
        let path = config::write_default_config(&config_path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);
    log::debug!("Loaded configuration from {}", config_path.display());

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(config_path.clone(), tx);

    // arguments were already consumed by clap
    let app = RelmApp::new(APP_ID).with_args(Vec::new());

    app.run::<AppModel>((config, config_path, rx));
    Ok(())
}
