use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "flowscene", version)]
struct Cli {
    /// Log at debug level.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate one time and print the sorted instances as JSON.
    Eval(EvalArgs),
    /// Print the scene's estimated duration in milliseconds.
    Duration(DurationArgs),
    /// Evaluate a time range and print the instance count per sample.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct EvalArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Time in milliseconds.
    #[arg(long)]
    time: f64,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct DurationArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// First sampled time in milliseconds.
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last sampled time in milliseconds; defaults to the estimated duration.
    #[arg(long)]
    to: Option<f64>,

    /// Step between samples in milliseconds.
    #[arg(long, default_value_t = 100.0)]
    step: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Eval(args) => cmd_eval(args),
        Command::Duration(args) => cmd_duration(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn read_scene(path: &Path) -> anyhow::Result<flowscene::Scene> {
    flowscene::Scene::from_path(path).with_context(|| format!("load scene '{}'", path.display()))
}

fn cmd_eval(args: EvalArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let frame = flowscene::Evaluator::eval_frame(&scene, args.time);
    let json = if args.pretty {
        serde_json::to_string_pretty(&frame)
    } else {
        serde_json::to_string(&frame)
    }
    .context("serialize frame")?;
    println!("{json}");
    Ok(())
}

fn cmd_duration(args: DurationArgs) -> anyhow::Result<()> {
    let scene = read_scene(&args.in_path)?;
    let ms = scene
        .estimated_duration()
        .context("estimate scene duration")?;
    println!("{ms}");
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    if !(args.step.is_finite() && args.step > 0.0) {
        anyhow::bail!("--step must be a positive number");
    }
    if !args.from.is_finite() || args.to.is_some_and(|t| !t.is_finite()) {
        anyhow::bail!("--from and --to must be finite numbers");
    }
    let scene = read_scene(&args.in_path)?;
    let to = match args.to {
        Some(t) => t,
        None => scene
            .estimated_duration()
            .context("estimate scene duration")?,
    };

    let mut diag = flowscene::Diagnostics::new();
    let mut i = 0u64;
    loop {
        let t = args.from + i as f64 * args.step;
        if t > to {
            break;
        }
        let instances = flowscene::Evaluator::eval_frame_with(&scene, t, &mut diag);
        println!("{t}\t{}", instances.len());
        i += 1;
    }
    for d in diag.iter() {
        eprintln!("{:?}: {} ({})", d.level, d.message, d.key);
    }
    Ok(())
}
