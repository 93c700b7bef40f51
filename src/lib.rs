pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;
pub use crate::config::DemoConfig;

pub use crate::app::{build_engine, DemoSelection};
pub use crate::core::engine::DemoEngine;
pub use crate::core::sequence::{IntSequence, SequenceGenerator};
pub use crate::utils::error::{AlgoError, Result};
