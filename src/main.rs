use anyhow::{Result, bail};
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "measurements.txt")]
    path: String,

    /// Scan workers; 0 means available hardware parallelism.
    #[arg(long, default_value_t = 0)]
    workers: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.path.is_empty() {
        bail!("Input path is missing");
    }

    let summary = if args.workers == 0 {
        engine::solve(&args.path)?
    } else {
        engine::solve_with_workers(&args.path, args.workers)?
    };
    print!("{summary}");

    Ok(())
}
