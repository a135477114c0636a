use anyhow::Context;
use aoc2023::{calibration, Args};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    aoc2023::init_tracing()?;
    let args = Args::parse();
    let part = args.part();
    let input = args.read_input().context("No calibration document")?;
    let total = calibration::solve(&input, part);
    tracing::info!(?part, total);
    println!("{total}");
    Ok(())
}
