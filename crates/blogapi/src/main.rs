use crate::prelude::*;
use clap::Parser;

mod api;
mod error;
mod prelude;
mod seed;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "HTTP API for authors and blog posts kept in memory"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "BLOGAPI_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the blog API over HTTP
    Serve(crate::api::App),

    /// Print the dataset a fresh server starts with
    Seed(crate::seed::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(sub_app) => crate::api::run(sub_app, app.global).await,
        SubCommands::Seed(sub_app) => crate::seed::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
