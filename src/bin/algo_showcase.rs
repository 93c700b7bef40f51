use clap::Parser;
use small_algos::app::cli;
use small_algos::{CliArgs, DemoSelection};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "algo-showcase")]
#[command(about = "Print the results of a handful of textbook algorithms")]
struct Args {
    #[command(flatten)]
    common: CliArgs,
}

fn main() -> ExitCode {
    cli::run(DemoSelection::Showcase, Args::parse().common)
}
