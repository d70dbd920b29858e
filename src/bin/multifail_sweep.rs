use clap::Parser;
use fattree_rs::sweep::{MultifailResult, MultifailSpec, multifail_vs_k};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "multifail-sweep",
    about = "Switches with two or more failed links vs. fat-tree radix"
)]
struct Args {
    /// Sweep spec JSON; flags below override its fields
    #[arg(long)]
    spec: Option<PathBuf>,

    /// Comma-separated radix values (each even, >= 2)
    #[arg(long, value_delimiter = ',')]
    ks: Option<Vec<usize>>,

    /// Link failure probability
    #[arg(long)]
    fail_prob: Option<f64>,

    /// Base RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the result as JSON to this file
    #[arg(long)]
    json: Option<PathBuf>,
}

fn load_spec(args: &Args) -> fattree_rs::Result<MultifailSpec> {
    let mut spec = match &args.spec {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => MultifailSpec::default(),
    };
    if let Some(ks) = &args.ks {
        spec.ks = ks.clone();
    }
    if let Some(p) = args.fail_prob {
        spec.fail_prob = p;
    }
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }
    Ok(spec)
}

fn print_table(res: &MultifailResult) {
    println!("fail_prob={} seed={}", res.fail_prob, res.seed);
    println!(
        "{:>4} {:>8} {:>9} {:>13} {:>12}",
        "k", "hosts", "switches", "failed_links", "multi_failed"
    );
    for r in &res.rows {
        println!(
            "{:>4} {:>8} {:>9} {:>13} {:>12}",
            r.k, r.hosts, r.switches, r.failed_links, r.multi_failed_switches
        );
    }
}

fn run(args: Args) -> fattree_rs::Result<()> {
    let spec = load_spec(&args)?;
    let res = multifail_vs_k(&spec)?;
    print_table(&res);

    if let Some(path) = &args.json {
        fs::write(path, serde_json::to_string_pretty(&res)?)?;
        eprintln!("wrote multi-failure sweep to {}", path.display());
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
