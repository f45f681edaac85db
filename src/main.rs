#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic)]

mod app;
mod config;
mod logging;

use app::App;
use clap::Parser;
use confy::ConfyError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config")]
    Load(#[from] ConfyError),

    #[error("failed to open ledger")]
    Ledger(#[from] sarvodaya_lib::Error),

    #[error("failed to render response")]
    Render(#[from] serde_yaml::Error),

    #[error("operation rejected: {0}")]
    Rejected(String),
}

fn main() -> Result<(), Error> {
    let app = App::parse();
    logging::set_up(app.verbosity());

    app.run()
}
