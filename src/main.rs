/*!
 * CPU Scheduling Simulator - Command Line Entry Point
 *
 * Loads a process set from a file and/or the command line, runs one policy
 * or all six, and prints tables, Gantt charts or JSON.
 */

use clap::{Parser, ValueEnum};
use cpu_sched_sim::process::{self, ProcessDescriptor, ProcessRegistry};
use cpu_sched_sim::report::{render_comparison, render_gantt, render_result};
use cpu_sched_sim::{
    init_tracing, run_all_parallel, simulate, Policy, SchedulingResult, SimulationConfig,
};
use miette::IntoDiagnostic;
use std::path::{Path, PathBuf};
use tracing::info;

/// Output format for results
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
enum Format {
    /// Tables and Gantt charts
    Table,
    /// Pretty-printed JSON, one document per result
    Json,
}

/// Simulate CPU scheduling policies over a fixed process set
#[derive(Parser, Debug)]
#[command(name = "sched-sim")]
#[command(about = "Simulate classical CPU scheduling policies", long_about = None)]
struct Args {
    /// Process file (header line, then id,arrival,burst[,priority] rows)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Extra process as id,arrival,burst[,priority] (repeatable)
    #[arg(short, long = "process")]
    processes: Vec<String>,

    /// Policy: fcfs, sjf, srtf, priority, priority_p, rr (or 1-6)
    #[arg(short = 'a', long, default_value = "fcfs", conflicts_with = "all")]
    policy: Policy,

    /// Run all six policies and compare them
    #[arg(long, default_value_t = false)]
    all: bool,

    /// Round-Robin time quantum (overrides SCHED_TIME_QUANTUM)
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Also save each result as CSV under this path (suffixed per policy with --all)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    init_tracing();
    let args = Args::parse();

    let registry = load_registry(&args)?;
    let mut config = SimulationConfig::from_env()?;
    if let Some(q) = args.quantum {
        config = config.with_quantum(q);
    }

    info!(processes = registry.len(), quantum = config.time_quantum, "Process set ready");

    let results = if args.all {
        run_all_parallel(registry, config).await?
    } else {
        vec![simulate(&registry, args.policy, &config)?]
    };

    for result in &results {
        match args.format {
            Format::Table => {
                println!("{}", render_result(result));
                println!("{}", render_gantt(&result.timeline));
            }
            Format::Json => println!("{}", result.to_json()?),
        }
    }

    if args.all && args.format == Format::Table {
        println!("{}", render_comparison(&results));
    }

    if let Some(path) = &args.output {
        save_results(path, &results, args.all)?;
    }

    Ok(())
}

fn load_registry(args: &Args) -> miette::Result<ProcessRegistry> {
    let mut descriptors: Vec<ProcessDescriptor> = match &args.file {
        Some(path) => process::load_from_file(path)?.descriptors().to_vec(),
        None => Vec::new(),
    };

    for row in &args.processes {
        descriptors.push(process::parse_process(row)?);
    }

    Ok(ProcessRegistry::new(descriptors)?)
}

fn save_results(path: &Path, results: &[SchedulingResult], suffixed: bool) -> miette::Result<()> {
    for result in results {
        let target = if suffixed {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "result".to_string());
            path.with_file_name(format!("{}_{}.csv", stem, result.policy.as_str()))
        } else {
            path.to_path_buf()
        };

        let file = std::fs::File::create(&target).into_diagnostic()?;
        result.write_csv(std::io::BufWriter::new(file))?;
        info!(path = %target.display(), "Result saved");
    }
    Ok(())
}
