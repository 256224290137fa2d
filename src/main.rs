use std::io::Write;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use traf_runbench::config;
use traf_runbench::display;
use traf_runbench::runner;
use traf_runbench::types::{OutputFormat, Scenario};

#[derive(Parser)]
#[command(
    name = "traf-runbench",
    version,
    about = "Run the traf benchmark under a timing wrapper and report user/system/elapsed times"
)]
struct Cli {
    /// Benchmark executable to run
    #[arg(long)]
    benchmark: Option<PathBuf>,

    /// Timing wrapper (GNU time default format)
    #[arg(long)]
    timer: Option<PathBuf>,

    /// Scenario as <concurrency>x<iterations>; repeat to run several in order
    #[arg(short, long = "scenario", value_name = "CxI")]
    scenarios: Vec<Scenario>,

    /// Config file (defaults to the user config dir, if present)
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "default")]
    format: OutputFormat,

    #[arg(long)]
    json: bool,

    /// Log progress to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = config::load_config(cli.config.as_deref())?;
    if let Some(benchmark) = cli.benchmark {
        config.benchmark = benchmark;
    }
    if let Some(timer) = cli.timer {
        config.timer = timer;
    }
    if !cli.scenarios.is_empty() {
        config.scenarios = cli.scenarios;
    }

    let format = if cli.json { OutputFormat::Json } else { cli.format };

    let stdout = std::io::stdout();
    runner::run_all(&config, |report| {
        let mut out = stdout.lock();
        let rendered = display::format_report(report, &format)?;
        out.write_all(rendered.as_bytes())?;
        out.flush()?;
        Ok(())
    })?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        process::exit(1);
    }
}
