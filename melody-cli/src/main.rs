pub mod app;
pub mod cli;
pub mod config;
pub mod init;
pub mod utils;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::{app::App, cli::AppArgs, config::Settings};

fn main() -> Result<()> {
    init::init()?;

    let args = AppArgs::parse();
    let settings = Settings::load()?;
    let app = App::new(args, settings);
    app.run(&mut std::io::stdout().lock())?;

    Ok(())
}
