use crate::commands::{run_catalog, run_evaluate, CatalogArgs, EvaluateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use ispdn::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ISPDn Security Level Assessor",
    about = "Determine the required protection level of a personal data information system",
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
    /// Classify a system from questionnaire answers given as flags
    Evaluate(EvaluateArgs),
    /// Print the base measure set of a protection level as CSV
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the directory holding the act template
    #[arg(long)]
    pub(crate) template_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Catalog(args) => run_catalog(args),
    }
}
