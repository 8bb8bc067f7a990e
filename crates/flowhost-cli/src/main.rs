mod commands;
mod logging;
mod startup;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "flowhost",
    version,
    about = "Inspect the service providers installed in this host build"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered service providers
    Connectors,
    /// List a provider's operations
    Operations {
        /// Service id (e.g. "/serviceProviders/cosmosdb") or service name
        service: String,
        /// Print full manifests instead of summaries
        #[arg(long)]
        manifest: bool,
    },
    /// Print one operation's manifest as JSON
    Describe {
        /// Service id or service name
        service: String,
        /// Operation name (case-insensitive)
        operation: String,
    },
    /// Resolve a connection parameter value for a trigger binding
    Resolve {
        /// Service id or service name
        service: String,
        /// Operation name (case-insensitive)
        operation: String,
        /// Connection parameter name (e.g. "connectionString")
        parameter: String,
        /// Path to a JSON object file with the supplied parameters
        #[arg(long)]
        params: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    let directory = startup::directory()?;

    match cli.command {
        Commands::Connectors => commands::connectors::execute(&directory),
        Commands::Operations { service, manifest } => {
            commands::operations::execute(&directory, &service, manifest)
        }
        Commands::Describe { service, operation } => {
            commands::describe::execute(&directory, &service, &operation)
        }
        Commands::Resolve {
            service,
            operation,
            parameter,
            params,
        } => commands::resolve::execute(&directory, &service, &operation, &parameter, &params),
    }
}
