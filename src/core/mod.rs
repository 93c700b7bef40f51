pub mod algorithms;
pub mod display;
pub mod engine;
pub mod sequence;
pub mod sort;
pub mod stats;

pub use crate::domain::model::DemoSummary;
pub use crate::domain::ports::Demo;
pub use crate::utils::error::Result;
