use clap::Parser;
use small_algos::app::cli;
use small_algos::{CliArgs, DemoSelection};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "array-stats")]
#[command(about = "Generate random integers, report max/min/average and sort them")]
struct Args {
    #[command(flatten)]
    common: CliArgs,
}

fn main() -> ExitCode {
    cli::run(DemoSelection::ArrayStats, Args::parse().common)
}
