use crate::core::Demo;
use crate::domain::model::DemoSummary;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::io::Write;

/// Runs demos in registration order against a single output sink.
pub struct DemoEngine {
    demos: Vec<Box<dyn Demo>>,
    monitor: SystemMonitor,
}

impl DemoEngine {
    pub fn new() -> Self {
        Self::new_with_monitoring(false)
    }

    pub fn new_with_monitoring(monitor_enabled: bool) -> Self {
        Self {
            demos: Vec::new(),
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn with_demo<D: Demo + 'static>(mut self, demo: D) -> Self {
        self.demos.push(Box::new(demo));
        self
    }

    pub fn len(&self) -> usize {
        self.demos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demos.is_empty()
    }

    /// Stops at the first failing demo; output already written stays written.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<Vec<DemoSummary>> {
        let mut summaries = Vec::with_capacity(self.demos.len());

        for (index, demo) in self.demos.iter_mut().enumerate() {
            if index > 0 {
                writeln!(out)?;
            }

            tracing::info!("▶️ Running demo: {}", demo.name());
            let summary = demo.run(out)?;
            tracing::info!(
                "✅ Demo '{}' finished ({} items printed)",
                summary.name,
                summary.items_printed
            );

            self.monitor.log_stats(&summary.name);
            summaries.push(summary);
        }

        out.flush()?;
        self.monitor.log_final_stats();
        Ok(summaries)
    }
}

impl Default for DemoEngine {
    fn default() -> Self {
        Self::new()
    }
}
