//! Configuration settings for the simulation driver

use crate::game_of_life::{SeedPattern, DEFAULT_ALIVE_PROBABILITY};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Grids must be strictly larger than 8 cells per side
pub const MIN_GRID_SIZE: usize = 9;
/// Largest grid the terminal driver accepts
pub const MAX_GRID_SIZE: usize = 4096;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub grid_size: usize,
    pub pattern: SeedPattern,
    pub alive_probability: f64,
    /// Seed for the random fill; `None` draws from the OS
    #[serde(default)]
    pub seed: Option<u64>,
    /// Number of steps to run; `None` runs until interrupted
    #[serde(default)]
    pub generations: Option<usize>,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub interval_ms: u64,
    pub show_frames: bool,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                grid_size: 100,
                pattern: SeedPattern::Random,
                alive_probability: DEFAULT_ALIVE_PROBABILITY,
                seed: None,
                generations: None,
                parallel: false,
            },
            display: DisplayConfig {
                interval_ms: 50,
                show_frames: true,
                clear_screen: true,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;

        if sim.grid_size < MIN_GRID_SIZE {
            anyhow::bail!(
                "Grid size must be greater than {}, got {}",
                MIN_GRID_SIZE - 1,
                sim.grid_size
            );
        }

        if sim.grid_size > MAX_GRID_SIZE {
            anyhow::bail!(
                "Grid size must be at most {}, got {}",
                MAX_GRID_SIZE,
                sim.grid_size
            );
        }

        if !(0.0..=1.0).contains(&sim.alive_probability) {
            anyhow::bail!(
                "Alive probability must lie in [0, 1], got {}",
                sim.alive_probability
            );
        }

        let needed = sim.pattern.min_grid_size();
        if sim.grid_size < needed {
            anyhow::bail!(
                "Pattern {} needs a grid of at least {}x{}, got {}x{}",
                sim.pattern,
                needed,
                needed,
                sim.grid_size,
                sim.grid_size
            );
        }

        if sim.generations.is_none() && !self.display.show_frames {
            anyhow::bail!("A run without frames needs a generation limit");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(grid_size) = cli_overrides.grid_size {
            self.simulation.grid_size = grid_size;
        }
        if let Some(pattern) = cli_overrides.pattern {
            self.simulation.pattern = pattern;
        }
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.display.interval_ms = interval_ms;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = Some(generations);
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if cli_overrides.parallel {
            self.simulation.parallel = true;
        }
        if cli_overrides.no_frames {
            self.display.show_frames = false;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub grid_size: Option<usize>,
    pub pattern: Option<SeedPattern>,
    pub interval_ms: Option<u64>,
    pub generations: Option<usize>,
    pub seed: Option<u64>,
    pub parallel: bool,
    pub no_frames: bool,
    pub format: Option<OutputFormat>,
}

/// Path of the configuration file written by `setup`
pub fn default_config_path(directory: &Path) -> PathBuf {
    directory.join("config").join("default.yaml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.simulation.grid_size, 100);
        assert_eq!(settings.display.interval_ms, 50);
        assert_eq!(settings.simulation.pattern, SeedPattern::Random);
    }

    #[test]
    fn test_small_grid_rejected() {
        let mut settings = Settings::default();
        settings.simulation.grid_size = 8;
        assert!(settings.validate().is_err());

        settings.simulation.grid_size = 9;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_huge_grid_rejected() {
        let mut settings = Settings::default();
        settings.simulation.grid_size = usize::MAX;
        assert!(settings.validate().is_err());

        settings.simulation.grid_size = MAX_GRID_SIZE;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_headless_run_needs_limit() {
        let mut settings = Settings::default();
        settings.display.show_frames = false;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("generation limit"));

        settings.simulation.generations = Some(100);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_gun_needs_room() {
        let mut settings = Settings::default();
        settings.simulation.pattern = SeedPattern::GosperGun;
        settings.simulation.grid_size = 40;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("gosper-gun"));

        settings.simulation.grid_size = 48;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_bad_probability_rejected() {
        let mut settings = Settings::default();
        settings.simulation.alive_probability = 1.2;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/settings.yaml");

        let mut settings = Settings::default();
        settings.simulation.pattern = SeedPattern::Glider;
        settings.simulation.seed = Some(99);
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_optional_fields_default() {
        let yaml = "\
simulation:
  grid_size: 30
  pattern: gosper-gun
  alive_probability: 0.2
display:
  interval_ms: 10
  show_frames: false
  clear_screen: false
output:
  format: json
";
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.simulation.seed, None);
        assert_eq!(settings.simulation.generations, None);
        assert!(!settings.simulation.parallel);
        assert_eq!(settings.output.format, OutputFormat::Json);
        // parses fine but the gun does not fit
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "simulation: [").unwrap();
        let err = Settings::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            grid_size: Some(64),
            pattern: Some(SeedPattern::Glider),
            interval_ms: Some(5),
            generations: Some(10),
            seed: Some(1),
            parallel: true,
            no_frames: true,
            format: Some(OutputFormat::Json),
        });
        assert_eq!(settings.simulation.grid_size, 64);
        assert_eq!(settings.simulation.pattern, SeedPattern::Glider);
        assert_eq!(settings.display.interval_ms, 5);
        assert_eq!(settings.simulation.generations, Some(10));
        assert_eq!(settings.simulation.seed, Some(1));
        assert!(settings.simulation.parallel);
        assert!(!settings.display.show_frames);
        assert_eq!(settings.output.format, OutputFormat::Json);

        let mut untouched = Settings::default();
        untouched.merge_with_cli(&CliOverrides::default());
        assert_eq!(untouched, Settings::default());
    }
}
