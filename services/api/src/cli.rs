use crate::report::{run_donors, run_profile, run_roster, DonorsArgs, ProfileArgs, RosterArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use polywatch::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Polywatch",
    about = "Serve and inspect the elected-officials roster, disclosures and donor data",
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
    /// Print the roster, optionally filtered
    Roster(RosterArgs),
    /// Print one official's profile and disclosure links
    Profile(ProfileArgs),
    /// Print the donor panel for a party
    Donors(DonorsArgs),
}

#[derive(Args, Debug, Default, Clone)]
pub(crate) struct DataArgs {
    /// Override the configured directory holding the JSON feeds
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) data: DataArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Roster(args) => run_roster(args).await,
        Command::Profile(args) => run_profile(args).await,
        Command::Donors(args) => run_donors(args).await,
    }
}
