#[cfg(feature = "cli")]
pub mod cli;
pub mod demos;

use crate::config::DemoConfig;
use crate::core::engine::DemoEngine;
use crate::utils::error::Result;
use demos::{AlgorithmShowcase, ArrayStatsDemo};

/// Which demonstrations an executable runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSelection {
    ArrayStats,
    Showcase,
    All,
}

impl DemoSelection {
    fn includes_array_stats(self) -> bool {
        matches!(self, DemoSelection::ArrayStats | DemoSelection::All)
    }

    fn includes_showcase(self) -> bool {
        matches!(self, DemoSelection::Showcase | DemoSelection::All)
    }
}

/// Assembles an engine for `selection` from a validated config.
pub fn build_engine(config: &DemoConfig, selection: DemoSelection) -> Result<DemoEngine> {
    let mut engine = DemoEngine::new_with_monitoring(config.monitoring_enabled());

    if selection.includes_array_stats() {
        engine = engine.with_demo(ArrayStatsDemo::from_config(&config.array)?);
    }
    if selection.includes_showcase() {
        engine = engine.with_demo(AlgorithmShowcase::new(config.showcase.clone()));
    }

    Ok(engine)
}
