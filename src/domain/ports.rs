use crate::domain::model::DemoSummary;
use crate::utils::error::Result;
use std::io::Write;

/// A self-contained demonstration that prints its results to `out`.
pub trait Demo {
    fn name(&self) -> &str;
    fn run(&mut self, out: &mut dyn Write) -> Result<DemoSummary>;
}
