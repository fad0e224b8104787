use crate::demo::{run_demo, DemoArgs};
use crate::infra::read_criteria_file;
use crate::server;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use ventalms::error::AppError;
use ventalms::program::validate_weights;

#[derive(Parser, Debug)]
#[command(
    name = "VenTal Management System",
    about = "Run and demonstrate the VenTal incubator management console backend",
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
    /// Walk the company directory and scoring model from the command line
    Demo(DemoArgs),
    /// Scoring configuration utilities
    Scoring {
        #[command(subcommand)]
        command: ScoringCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ScoringCommand {
    /// Validate that a criteria file allocates exactly 100%
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the simulated directory latency in milliseconds
    #[arg(long)]
    pub(crate) latency_ms: Option<u64>,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// JSON file holding an array of scoring criteria
    #[arg(long)]
    pub(crate) file: PathBuf,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args).await,
        Command::Scoring {
            command: ScoringCommand::Validate(args),
        } => run_scoring_validate(args),
    }
}

fn run_scoring_validate(args: ValidateArgs) -> Result<(), AppError> {
    let criteria = read_criteria_file(&args.file)?;
    validate_weights(&criteria)?;
    println!(
        "{} criteria allocate exactly 100%",
        criteria.len()
    );
    Ok(())
}
