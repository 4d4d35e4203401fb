mod app;
mod effects;
mod logging;
mod presentation;
mod settings;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use merge_core::DeliveryMode;
use merge_engine::EngineHandle;

use app::{MergeApp, SessionInputs, SessionOutcome};
use effects::EffectRunner;
use logging::LogDestination;
use presentation::TerminalPresenter;

/// Slack on top of the transport timeout before giving up on a response.
const RESPONSE_GRACE: Duration = Duration::from_secs(5);

#[derive(Parser, Debug)]
#[command(about = "Preview a mail merge and optionally generate the letters")]
struct Args {
    /// Data source (report) identifier.
    #[arg(long)]
    source: String,
    /// Template document identifier.
    #[arg(long)]
    template: String,
    /// FILE or EMAIL.
    #[arg(long, default_value = "FILE")]
    delivery: DeliveryMode,
    /// Generate the letters after a successful preview.
    #[arg(long)]
    generate: bool,
    /// RON settings file.
    #[arg(long, default_value = "merge_app.ron")]
    settings: PathBuf,
    /// Overrides the merge service base URL from the settings file.
    #[arg(long)]
    base_url: Option<String>,
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    log: LogDestination,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    logging::initialize(args.log, LevelFilter::Info);

    let mut settings = settings::load_settings(&args.settings)?;
    if let Some(base_url) = args.base_url {
        settings.service.base_url = base_url;
    }
    let response_timeout = settings.service.request_timeout() + RESPONSE_GRACE;

    let engine = EngineHandle::new(settings.service).context("failed to start merge engine")?;
    let presenter = TerminalPresenter::new(io::stdout(), io::stderr());
    let mut app = MergeApp::new(EffectRunner::new(engine, presenter), response_timeout);

    let outcome = app.run(&SessionInputs {
        source_id: args.source,
        template_id: args.template,
        delivery_mode: args.delivery,
        generate: args.generate,
    })?;

    Ok(match outcome {
        SessionOutcome::Previewed | SessionOutcome::Generated => ExitCode::SUCCESS,
        SessionOutcome::Failed => ExitCode::FAILURE,
    })
}
