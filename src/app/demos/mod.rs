pub mod array_stats;
pub mod showcase;

pub use array_stats::ArrayStatsDemo;
pub use showcase::AlgorithmShowcase;
