use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::{Parser, Subcommand};

use datanexus::backend_process::BackendProcess;
use datanexus::config::{DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS};
use datanexus::core::runtime::run_to_idle;
use datanexus::{
    BackendLaunch, ClientConfig, Event, FlowError, HttpGateway, MessageKind, NoDialog,
    OperationKind, Screen, Session,
};

#[derive(Parser)]
#[command(name = "datanexus")]
#[command(about = "Create projects, ingest data files and browse their tables")]
struct Cli {
    /// Base URL of the ingestion backend
    #[arg(long, env = "DATANEXUS_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Start the backend from this directory and stop it on exit
    #[arg(long, value_name = "DIR", env = "DATANEXUS_BACKEND_DIR")]
    backend_dir: Option<PathBuf>,

    /// Python interpreter used to start the backend
    #[arg(long, default_value = "python")]
    python: String,

    /// How long to wait for a started backend to accept connections
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    backend_ready_secs: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// List the projects known to the backend
    Projects,
    /// Create a project
    Create {
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Ingest a CSV, JSON or Parquet file into the current project
    Ingest {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Select a project as current and list its tables
    Tables {
        #[arg(value_name = "PROJECT_ID")]
        project_id: i64,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    datanexus::logging::init_logging(args.verbose)?;

    let config = ClientConfig::new(&args.backend_url, Duration::from_secs(args.timeout_secs))?;

    let _backend = match &args.backend_dir {
        Some(dir) => {
            let mut backend = BackendProcess::spawn(
                &BackendLaunch {
                    backend_dir: dir.clone(),
                    python: args.python.clone(),
                },
                &config,
            )?;
            backend.wait_until_ready(&config, Duration::from_secs(args.backend_ready_secs))?;
            Some(backend)
        }
        None => None,
    };

    match args.command {
        None => launch_gui(config),
        Some(action) => run_headless(config, action),
    }
}

#[cfg(feature = "gui")]
fn launch_gui(config: ClientConfig) -> anyhow::Result<()> {
    datanexus::gui::run(config)
}

#[cfg(not(feature = "gui"))]
fn launch_gui(config: ClientConfig) -> anyhow::Result<()> {
    tracing::warn!("Built without the gui feature, listing projects instead");
    run_headless(config, Action::Projects)
}

fn run_headless(config: ClientConfig, action: Action) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let gateway = HttpGateway::new(config)?;
    let mut session = Session::new();

    runtime.block_on(async {
        match action {
            Action::Projects => {
                run_to_idle(&mut session, Event::Startup, &gateway, &NoDialog).await;
                report(&session, OperationKind::FetchProjects)?;
                if session.projects().is_empty() {
                    println!("No projects yet.");
                }
                for project in session.projects() {
                    println!("{:>6}  {}  {}", project.id, project.created_date(), project.name);
                }
            }
            Action::Create { name } => {
                run_to_idle(&mut session, Event::CreateProject(name), &gateway, &NoDialog).await;
                report(&session, OperationKind::CreateProject)?;
            }
            Action::Ingest { file } => {
                let file = std::fs::canonicalize(&file)
                    .with_context(|| format!("Cannot read data file {:?}", file))?;
                let file_path = file
                    .to_str()
                    .ok_or_else(|| anyhow::anyhow!("File path is not valid UTF-8: {:?}", file))?
                    .to_string();
                session.update(Event::FilePicked(Ok(Some(file_path))));
                run_to_idle(&mut session, Event::Ingest, &gateway, &NoDialog).await;
                report(&session, OperationKind::Ingest)?;
            }
            Action::Tables { project_id } => {
                run_to_idle(&mut session, Event::Startup, &gateway, &NoDialog).await;
                report(&session, OperationKind::FetchProjects)?;
                let project = session
                    .projects()
                    .iter()
                    .find(|project| project.id == project_id)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("No project with id {project_id}"))?;
                run_to_idle(&mut session, Event::OpenDashboard(project), &gateway, &NoDialog)
                    .await;
                report(&session, OperationKind::LoadDashboard)?;
                if session.screen() == Screen::Dashboard && session.tables().is_empty() {
                    println!("No tables found yet. Ingest data to get started.");
                }
                for table in session.tables() {
                    println!("{table}");
                }
            }
        }
        anyhow::Ok(())
    })
}

/// Prints the operation's message; an error message fails the command unless
/// it only reports skipped project records.
fn report(session: &Session, kind: OperationKind) -> anyhow::Result<()> {
    let status = session.status(kind);
    match status.message_kind() {
        MessageKind::Error if matches!(status.error(), Some(FlowError::Decode(_))) => {
            eprintln!("{}", status.message())
        }
        MessageKind::Error => anyhow::bail!("{}", status.message()),
        MessageKind::Success => println!("{}", status.message()),
        MessageKind::None => {}
    }
    Ok(())
}
