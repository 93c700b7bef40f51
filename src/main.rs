use clap::Parser;
use small_algos::app::cli;
use small_algos::{CliArgs, DemoSelection};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(DemoSelection::All, CliArgs::parse())
}
