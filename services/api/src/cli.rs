use crate::demo::{run_matrix_catalog, run_matrix_demo, MatrixDemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pmo_dashboard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "PMO Monitoring Dashboard",
    about = "Run the PMO dashboard service or exercise its prioritization matrix from the command line",
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
    /// Inspect or exercise the prioritization matrix
    Matrix {
        #[command(subcommand)]
        command: MatrixCommand,
    },
}

#[derive(Subcommand, Debug)]
enum MatrixCommand {
    /// Print the active criteria catalog with weights and rating guides
    Catalog,
    /// Walk a sample record through scoring, approval, and visibility
    Demo(MatrixDemoArgs),
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
        Command::Matrix {
            command: MatrixCommand::Catalog,
        } => run_matrix_catalog(),
        Command::Matrix {
            command: MatrixCommand::Demo(args),
        } => run_matrix_demo(args),
    }
}
