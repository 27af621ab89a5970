use crate::commands::{run_lookup, run_stats, run_update, run_verify, LookupArgs, VerifyArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use postcode_eligibility::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Postcode Eligibility",
    about = "Maintain and serve Australian postcode work-eligibility classifications",
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
    /// Merge every configured source into the snapshot and print the run report
    Update,
    /// Reconcile the stored snapshot in place without consulting sources
    Verify(VerifyArgs),
    /// Print flag counts for the stored snapshot
    Stats,
    /// Look up a single postcode in the stored snapshot
    Lookup(LookupArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Update => run_update(),
        Command::Verify(args) => run_verify(args),
        Command::Stats => run_stats(),
        Command::Lookup(args) => run_lookup(args),
    }
}
