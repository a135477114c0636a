use anyhow::Context;
use aoc2023::{schematic, Args};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    aoc2023::init_tracing()?;
    let args = Args::parse();
    let part = args.part();
    let input = args.read_input().context("No engine schematic")?;
    let total = schematic::solve(&input, part);
    tracing::info!(?part, total);
    println!("{total}");
    Ok(())
}
