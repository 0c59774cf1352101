mod actions;
mod app;
mod catalog;
mod cli;
mod config;
mod editor;
mod format;
mod logging;
mod request;
mod session;
mod state;
mod types;
mod ui;
mod widget;

use app::App;
use clap::Parser;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();
    let log_path = logging::init_tracing()?;
    let config = config::Config::load()?;

    tracing::info!(log = %log_path.display(), "starting apidoc-tryit");

    let app = App::new(&config, args);
    let terminal = ratatui::init();
    let app_result = app.run(terminal).await;
    ratatui::restore();
    app_result
}
