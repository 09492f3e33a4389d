use std::path::Path;

use match3_core::RandomGenerator;
use match3_types::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::SimError;

/// Simulation settings, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub width: usize,
    pub height: usize,
    /// Tile symbols; needs at least 2 distinct entries
    pub alphabet: Vec<String>,
    pub seed: u64,
    /// Upper bound on applied moves before the session counts as completed
    pub max_moves: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            alphabet: ["R", "G", "B", "Y", "P"].map(String::from).to_vec(),
            seed: 1,
            max_moves: 100,
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let content = std::fs::read_to_string(path).map_err(|e| SimError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SimConfig = toml::from_str(&content)?;
        config.validate()?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SimError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.width == 0 || self.height == 0 {
            return Err(SimError::Validation(format!(
                "board dimensions must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        if self.alphabet.iter().any(|s| s.trim().is_empty()) {
            return Err(SimError::Validation(
                "alphabet entries must not be blank".into(),
            ));
        }
        // Alphabet size rules live with the generator
        self.generator()?;
        Ok(())
    }

    /// Seeded random generator over the configured alphabet.
    pub fn generator(&self) -> Result<RandomGenerator<String>, SimError> {
        Ok(RandomGenerator::new(self.alphabet.clone(), self.seed)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match3_core::ConfigError;

    #[test]
    fn test_default_config_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SimConfig = toml::from_str("width = 5\nseed = 9\n").unwrap();
        assert_eq!(config.width, 5);
        assert_eq!(config.seed, 9);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.alphabet.len(), 5);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let config = SimConfig {
            height: 0,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::Validation(_))));
    }

    #[test]
    fn test_rejects_degenerate_alphabet() {
        let config = SimConfig {
            alphabet: vec!["R".into(), "R".into()],
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::Generator(ConfigError::DegenerateAlphabet { distinct: 1 }))
        ));

        let config = SimConfig {
            alphabet: vec![],
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::Generator(ConfigError::EmptyAlphabet))
        ));
    }

    #[test]
    fn test_rejects_blank_symbol() {
        let config = SimConfig {
            alphabet: vec!["R".into(), " ".into()],
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(SimError::Validation(_))));
    }
}
