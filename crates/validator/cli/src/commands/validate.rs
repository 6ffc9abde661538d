//! Document validation command

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use tracing::debug;
use validator_engine::{EngineGateway, ProcessEngine, ReplayEngine, ValidationEngine};
use validator_session::{Phase, SessionOrchestrator};
use validator_types::Preset;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{print_single, print_snapshot_table, OutputFormat};

/// Arguments for `validate`
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// CSAF document to validate (must end in .json)
    pub path: PathBuf,

    /// Validation preset (basic, extended, full)
    #[arg(short, long)]
    pub preset: Option<Preset>,

    /// Answer with a recorded engine payload instead of running the validator
    #[arg(long, value_name = "RAW.json", conflicts_with = "engine")]
    pub replay: Option<PathBuf>,

    /// Validator executable, overriding the configured one
    #[arg(long, value_name = "PROGRAM")]
    pub engine: Option<PathBuf>,
}

fn build_engine(args: &ValidateArgs, config: &CliConfig) -> Arc<dyn ValidationEngine> {
    if let Some(replay) = &args.replay {
        debug!(path = %replay.display(), "Using recorded engine payload");
        return Arc::new(ReplayEngine::from_file(replay.clone()));
    }

    let mut engine_config = config.engine.clone();
    if let Some(program) = &args.engine {
        engine_config.program = program.clone();
    }
    Arc::new(ProcessEngine::new(engine_config))
}

/// Validate one document and print the resulting session
pub async fn execute(args: ValidateArgs, config: &CliConfig, format: OutputFormat) -> CliResult<()> {
    let gateway = Arc::new(EngineGateway::new(build_engine(&args, config)));
    gateway.ensure_ready().await?;

    let session = SessionOrchestrator::with_config(gateway, config.session());
    session.load_file(&args.path).await?;
    session.set_preset(args.preset.or(config.default_preset).unwrap_or_default())?;
    session.validate().await?;

    let snapshot = session.snapshot();
    match format {
        OutputFormat::Table => print_snapshot_table(&snapshot),
        _ => print_single(&snapshot, format)?,
    }

    match (snapshot.phase, snapshot.failure) {
        (Phase::Failed, Some(failure)) => Err(CliError::Session(failure)),
        _ => Ok(()),
    }
}
