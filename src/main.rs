//! `procsched` — run the scheduling simulator on a random workload.
//!
//! Environment variables:
//! - RUST_LOG: log filter (default: warn)

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use u_procsched::report::{JsonReporter, Reporter, TextReporter};
use u_procsched::simulation::{Algorithm, Simulation, SimulationConfig};
use u_procsched::workload::{RandomWorkload, WorkloadSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Rr,
    Fcfs,
    Priority,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Rr => Algorithm::RoundRobin,
            AlgorithmArg::Fcfs => Algorithm::Fcfs,
            AlgorithmArg::Priority => Algorithm::Priority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// CPU scheduling simulator: Round Robin, FCFS and static Priority.
#[derive(Debug, Parser)]
#[command(name = "procsched", version)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of processes to generate
    #[arg(short = 'n', long)]
    processes: Option<usize>,

    /// Round Robin time quantum
    #[arg(short, long, allow_negative_numbers = true)]
    quantum: Option<i64>,

    /// RNG seed for a reproducible workload
    #[arg(long)]
    seed: Option<u64>,

    /// Algorithm to run (repeatable; default: all)
    #[arg(short, long = "algorithm", value_enum)]
    algorithms: Vec<AlgorithmArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the CPU timeline for each run (text format)
    #[arg(long)]
    timeline: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn load_config(cli: &Cli) -> Result<SimulationConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            SimulationConfig::from_json_str(&std::fs::read_to_string(path)?)?
        }
        None => SimulationConfig::default(),
    };

    if let Some(n) = cli.processes {
        config.workload.process_count = n;
    }
    if let Some(q) = cli.quantum {
        config.time_quantum = q;
    }
    if let Some(seed) = cli.seed {
        config.workload.seed = Some(seed);
    }
    if !cli.algorithms.is_empty() {
        config.algorithms = cli.algorithms.iter().map(|&a| a.into()).collect();
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let config = load_config(&cli)?;
    info!(?config, "simulation configured");

    let workload = RandomWorkload::from_config(config.workload.clone()).generate()?;
    info!(processes = workload.len(), total_burst = workload.total_burst(), "workload generated");

    let reports = Simulation::new(config).run(&workload)?;

    let output = match cli.format {
        Format::Text => TextReporter {
            show_timeline: cli.timeline,
        }
        .render(&reports)?,
        Format::Json => JsonReporter.render(&reports)?,
    };
    println!("{output}");

    Ok(())
}
