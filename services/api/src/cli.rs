use crate::render::{
    run_conditions, run_diagnose, run_export, run_symptoms, DiagnoseArgs, KnowledgeArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use triage_rules::config::AppConfig;
use triage_rules::error::AppError;
use triage_rules::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Symptom Triage",
    about = "Rank likely toddler infectious diseases from observed symptoms",
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
    /// Rank conditions for the selected symptom codes
    Diagnose(DiagnoseArgs),
    /// List the symptom catalog
    Symptoms(KnowledgeArgs),
    /// List conditions with their symptoms and recommendations
    Conditions(KnowledgeArgs),
    /// Print the active knowledge base as a JSON document
    ExportKnowledge(KnowledgeArgs),
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
    pub(crate) knowledge: KnowledgeArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(args, config).await,
        Command::Diagnose(args) => run_diagnose(args, &config),
        Command::Symptoms(args) => run_symptoms(args, &config),
        Command::Conditions(args) => run_conditions(args, &config),
        Command::ExportKnowledge(args) => run_export(args, &config),
    }
}
