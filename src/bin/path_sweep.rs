use clap::Parser;
use fattree_rs::sweep::{PathSweepResult, PathSweepSpec, avg_paths_vs_prob};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "path-sweep",
    about = "Average leaf-to-leaf path count vs. link failure probability on a fat-tree"
)]
struct Args {
    /// Sweep spec JSON; flags below override its fields
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Fat-tree radix (even, >= 2)
    #[arg(long)]
    k: Option<usize>,

    /// Comma-separated link failure probabilities
    #[arg(long, value_delimiter = ',')]
    probs: Option<Vec<f64>>,

    /// Trials per probability
    #[arg(long)]
    trials: Option<usize>,

    /// Base RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the result as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn load_spec(args: &Args) -> fattree_rs::Result<PathSweepSpec> {
    let mut spec = match &args.spec {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => PathSweepSpec::default(),
    };
    if let Some(k) = args.k {
        spec.k = k;
    }
    if let Some(probs) = &args.probs {
        spec.probs = probs.clone();
    }
    if let Some(trials) = args.trials {
        spec.trials = trials;
    }
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }
    Ok(spec)
}

fn fmt_avg(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |x| format!("{x:.4}"))
}

fn print_table(res: &PathSweepResult) {
    println!("k={} trials={} seed={}", res.k, res.trials, res.seed);
    println!("{:>8} {:>12} {:>14}", "prob", "in_pod", "cross_pod");
    for p in &res.points {
        println!(
            "{:>8.3} {:>12} {:>14}",
            p.prob,
            fmt_avg(p.avg_in_pod),
            fmt_avg(p.avg_cross_pod)
        );
    }
}

fn run(args: Args) -> fattree_rs::Result<()> {
    let spec = load_spec(&args)?;
    let res = avg_paths_vs_prob(&spec)?;
    print_table(&res);

    if let Some(path) = &args.json {
        fs::write(path, serde_json::to_string_pretty(&res)?)?;
        eprintln!("wrote path sweep to {}", path.display());
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
