use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

const BENCH: &str = "graph_benchmark";
const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "ungraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Benchmark the sequential build against the `parallel` feature build
    Bench {
        /// Short measurement window and small samples
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Skip the runs and rebuild the report from existing criterion output
        #[arg(long, default_value_t = false)]
        report_only: bool,

        /// Only run benchmarks whose id matches this criterion filter
        #[arg(long)]
        filter: Option<String>,
    },
}

/// A criterion baseline name and the crate features it is built with.
#[derive(Clone, Copy)]
enum Build {
    Sequential,
    Parallel,
}

impl Build {
    const ALL: [Build; 2] = [Build::Sequential, Build::Parallel];

    fn baseline(self) -> &'static str {
        match self {
            Build::Sequential => "sequential",
            Build::Parallel => "parallel",
        }
    }

    fn features(self) -> Option<&'static str> {
        match self {
            Build::Sequential => None,
            Build::Parallel => Some("parallel"),
        }
    }

    fn from_baseline(name: &str) -> Option<Build> {
        Build::ALL.into_iter().find(|b| b.baseline() == name)
    }
}

#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    /// Nanoseconds per iteration.
    point_estimate: f64,
}

/// Mean time per iteration of one workload under each build.
#[derive(Default)]
struct Row {
    sequential_ns: Option<f64>,
    parallel_ns: Option<f64>,
}

impl Row {
    fn slot(&mut self, build: Build) -> &mut Option<f64> {
        match build {
            Build::Sequential => &mut self.sequential_ns,
            Build::Parallel => &mut self.parallel_ns,
        }
    }
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Bench {
            quick,
            report_only,
            filter,
        } => {
            if !report_only {
                for build in Build::ALL {
                    run_build(build, quick, filter.as_deref())?;
                }
            }
            write_report(Path::new(CRITERION_DIR), Path::new(REPORT_PATH))
        }
    }
}

fn run_build(build: Build, quick: bool, filter: Option<&str>) -> Result<()> {
    println!(">>> {BENCH} [{}]", build.baseline());
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", BENCH]);
    if let Some(features) = build.features() {
        cmd.args(["--features", features]);
    }
    cmd.args(["--", "--save-baseline", build.baseline()]);
    if quick {
        cmd.args(["--noplot", "--sample-size", "10", "--measurement-time", "0.1"]);
    }
    if let Some(filter) = filter {
        cmd.arg(filter);
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn cargo bench for {}", build.baseline()))?;
    if !status.success() {
        bail!("benchmark run `{}` exited with {status}", build.baseline());
    }
    println!("    done in {:.2?}", start.elapsed());
    Ok(())
}

/// Lists every `estimates.json` below `dir`.
fn estimate_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).with_context(|| format!("failed to list {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            estimate_files(&path, out)?;
        } else if path.ends_with("estimates.json") {
            out.push(path);
        }
    }
    Ok(())
}

/// Groups mean timings by workload id, e.g. `build/ungraph_tree/1000`.
fn collect_rows(root: &Path) -> Result<BTreeMap<String, Row>> {
    let mut files = Vec::new();
    estimate_files(root, &mut files)?;

    let mut rows: BTreeMap<String, Row> = BTreeMap::new();
    for file in files {
        // <root>/<workload...>/<baseline>/estimates.json
        let Some(baseline_dir) = file.parent() else { continue };
        let Some(build) = baseline_dir
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(Build::from_baseline)
        else {
            continue;
        };
        let Some(workload) = baseline_dir
            .parent()
            .and_then(|w| w.strip_prefix(root).ok())
        else {
            continue;
        };

        let raw = fs::read_to_string(&file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let estimates: Estimates = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", file.display()))?;

        let id = workload.to_string_lossy().replace('\\', "/");
        *rows.entry(id).or_default().slot(build) = Some(estimates.mean.point_estimate);
    }
    Ok(rows)
}

fn format_ns(ns: f64) -> String {
    match ns {
        ns if ns >= 1e9 => format!("{:.2} s", ns / 1e9),
        ns if ns >= 1e6 => format!("{:.2} ms", ns / 1e6),
        ns if ns >= 1e3 => format!("{:.2} µs", ns / 1e3),
        ns => format!("{ns:.0} ns"),
    }
}

fn render(rows: &BTreeMap<String, Row>) -> String {
    let mut out = String::from("# ungraph benchmarks\n\n");
    out.push_str("| Workload | sequential | parallel | speedup |\n");
    out.push_str("|---|---:|---:|---:|\n");

    let cell = |ns: Option<f64>| ns.map_or_else(|| "-".to_owned(), format_ns);
    for (id, row) in rows {
        let speedup = match (row.sequential_ns, row.parallel_ns) {
            (Some(s), Some(p)) if p > 0.0 => format!("{:.2}x", s / p),
            _ => "-".to_owned(),
        };
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "| {id} | {} | {} | {speedup} |",
            cell(row.sequential_ns),
            cell(row.parallel_ns)
        );
    }
    out
}

fn write_report(criterion_dir: &Path, report: &Path) -> Result<()> {
    if !criterion_dir.exists() {
        bail!("no criterion output at {}", criterion_dir.display());
    }
    let rows = collect_rows(criterion_dir)?;
    if let Some(parent) = report.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(report, render(&rows))
        .with_context(|| format!("failed to write {}", report.display()))?;
    println!("{} workloads written to {}", rows.len(), report.display());
    Ok(())
}
