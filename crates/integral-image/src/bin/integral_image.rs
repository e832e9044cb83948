use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use integral_image::render::{render_grid, DEFAULT_CELL_WIDTH, MAX_CELL_WIDTH};
use integral_image::{integrate_file, integrate_report, IntegrateConfig, IntegrateError};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "integral-image")]
#[command(about = "Build and print the integral image of a uniform or configured pixel grid")]
#[command(version)]
struct Args {
    /// Source grid rows
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Source grid columns
    #[arg(long, default_value_t = 10)]
    columns: usize,

    /// Value of every source pixel
    #[arg(long, default_value_t = 1)]
    fill: u32,

    /// JSON config (overrides --rows, --columns and --fill)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a JSON report to this path
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Right-aligned width of each printed cell (1..=32)
    #[arg(
        long,
        default_value_t = DEFAULT_CELL_WIDTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_CELL_WIDTH as u64)
    )]
    cell_width: usize,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Emit logs as JSON
    #[cfg(feature = "tracing")]
    #[arg(long)]
    json_logs: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(args: &Args) {
    if let Err(err) = integral_image::core::init_with_level(args.log_level) {
        eprintln!("failed to install logger: {err}");
    }
}

#[cfg(feature = "tracing")]
fn init_logging(args: &Args) {
    integral_image::core::init_tracing(args.json_logs);
    log::debug!("--log-level {} ignored, RUST_LOG filters tracing output", args.log_level);
}

fn run(args: &Args) -> Result<ExitCode, IntegrateError> {
    let (report, integral) = match &args.config {
        Some(path) => integrate_file(path)?,
        None => {
            let cfg = IntegrateConfig::uniform(args.rows, args.columns, args.fill);
            integrate_report(&cfg)?
        }
    };

    if let Some(path) = &args.report {
        report.write_json(path)?;
        log::info!("wrote report to {}", path.display());
    }

    let Some(integral) = integral else {
        let reason = report.error.as_deref().unwrap_or("integration failed");
        eprintln!("error: {reason}");
        return Ok(ExitCode::FAILURE);
    };

    let text = render_grid(&integral.view(), args.cell_width);
    let mut stdout = std::io::stdout().lock();
    if let Err(err) = stdout.write_all(text.as_bytes()) {
        log::error!("failed to write grid: {err}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
