use crate::config::toml_config::DemoConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Flags shared by every demo binary. All are optional; with none given the
/// demos run their fixed default sequence.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "small-algos")]
#[command(about = "Random array statistics and textbook algorithm demos")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fixed random seed (defaults to the current time in seconds)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of random values to generate
    #[arg(long)]
    pub size: Option<usize>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log process resource usage after each demo
    #[arg(long)]
    pub monitor: bool,
}

impl CliArgs {
    /// Loads the config file (or defaults) and applies command-line overrides.
    pub fn load_config(&self) -> Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                DemoConfig::from_file(path)?
            }
            None => DemoConfig::default(),
        };

        // 應用命令列覆蓋設定
        if let Some(seed) = self.seed {
            config.array.seed = Some(seed);
        }
        if let Some(size) = self.size {
            config.array.size = size;
        }
        if self.monitor {
            config.monitoring.enabled = true;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_gives_defaults() {
        let args = CliArgs::try_parse_from(["small-algos"]).unwrap();
        assert_eq!(args.load_config().unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[array]\nsize = 30\nseed = 1\n").unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let args = CliArgs::try_parse_from([
            "small-algos",
            "--config",
            path.as_str(),
            "--seed",
            "99",
            "--monitor",
        ])
        .unwrap();
        let config = args.load_config().unwrap();

        assert_eq!(config.array.size, 30);
        assert_eq!(config.array.seed, Some(99));
        assert!(config.monitoring.enabled);
    }

    #[test]
    fn test_size_flag() {
        let args = CliArgs::try_parse_from(["array-stats", "--size", "7", "-v"]).unwrap();
        assert!(args.verbose);
        assert_eq!(args.load_config().unwrap().array.size, 7);
    }
}
