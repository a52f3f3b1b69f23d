use crate::config::AppConfig;
use crate::error::AppError;
use crate::registry::{
    open_store, Candidate, Gender, Outcome, RecordStore, RegistryService, VoterId,
};
use crate::server;
use crate::telemetry;
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = "Voter Registry",
    about = "Check voter eligibility and manage the registry from the command line",
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
    /// Evaluate one candidate against the configured store
    Register(RegisterArgs),
    /// Show a registered voter
    Lookup(LookupArgs),
    /// Remove every registered voter
    Reset,
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

#[derive(Args, Debug)]
pub(crate) struct RegisterArgs {
    /// Voter identifier (must be positive to register)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) id: i64,
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) age: u32,
    /// Mark the candidate as deceased
    #[arg(long)]
    pub(crate) deceased: bool,
    /// MALE, FEMALE or UNIDENTIFIED
    #[arg(long, value_parser = parse_gender, default_value = "UNIDENTIFIED")]
    pub(crate) gender: Gender,
}

#[derive(Args, Debug)]
pub(crate) struct LookupArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) id: i64,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let mut config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let store = open_store(&config.store)?;

    match command {
        Command::Serve(mut args) => {
            if let Some(host) = args.host.take() {
                config.server.host = host;
            }
            if let Some(port) = args.port.take() {
                config.server.port = port;
            }
            server::run(config, store).await
        }
        Command::Register(args) => {
            let outcome = register(store, args)?;
            println!("{outcome}");
            Ok(())
        }
        Command::Lookup(args) => {
            match store.find_by_id(VoterId(args.id))? {
                Some(record) => println!(
                    "voter {}: {} (age {}, {})",
                    record.id,
                    record.name,
                    record.age,
                    if record.alive { "alive" } else { "deceased" }
                ),
                None => println!("voter {} not registered", args.id),
            }
            Ok(())
        }
        Command::Reset => {
            store.delete_all()?;
            println!("registry cleared");
            Ok(())
        }
    }
}

pub(crate) fn register(
    store: Arc<dyn RecordStore>,
    args: RegisterArgs,
) -> Result<Outcome, AppError> {
    let candidate = Candidate::new(args.id, args.name, args.age, !args.deceased)
        .with_gender(args.gender);
    let service = RegistryService::new(store);
    Ok(service.evaluate(Some(&candidate))?)
}

fn parse_gender(raw: &str) -> Result<Gender, String> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "MALE" => Ok(Gender::Male),
        "FEMALE" => Ok(Gender::Female),
        "UNIDENTIFIED" => Ok(Gender::Unidentified),
        other => Err(format!("unknown gender '{other}'")),
    }
}
