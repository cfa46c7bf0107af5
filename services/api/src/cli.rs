use crate::demo::{run_demo, run_quote, QuoteArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use event_housing::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Event Housing Registration",
    about = "Collect, validate and price employee event housing registrations",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the itemised price for a household without registering it
    Quote(QuoteArgs),
    /// Run sample registrations through validation, pricing and storage
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// CSV file listing employees allowed to register
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// SQLite database for registrations (in-memory when omitted)
    #[arg(long)]
    pub(crate) database: Option<PathBuf>,
    /// Also bound adult children and transport seats by household size
    #[arg(long)]
    pub(crate) strict: bool,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Quote(args) => run_quote(args),
        Command::Demo => run_demo(),
    }
}
