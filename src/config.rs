use crate::catalog::Catalog;
use crate::error::{AdvisorError, Result};
use crate::logic::fertilizer_ranking::{FertilizerRanker, FertilizerWeights};
use crate::logic::ranking::{Ranker, ScoringSettings};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub openweathermap: Option<OpenWeatherMapConfig>,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub fertilizer_scoring: FertilizerScoringConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            name: "New Delhi".into(),
            latitude: 28.6139,
            longitude: 77.2090,
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct OpenWeatherMapConfig {
    pub api_key: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl std::fmt::Debug for OpenWeatherMapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapConfig")
            .field("api_key", &"[REDACTED]")
            .field("enabled", &self.enabled)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FertilizerScoringConfig {
    pub weights: FertilizerWeights,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// YAML or JSON reference catalog replacing the built-in dataset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load from an explicit path, the standard locations, or fall back to
    /// built-in defaults when no file exists anywhere.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(AdvisorError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AdvisorError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::parse(&config_str)?;
        tracing::debug!(path = %config_path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // Substitute environment variables
        let content = Self::substitute_env_vars(content);

        serde_yaml::from_str(&content)
            .map_err(|e| AdvisorError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Try XDG config directory
        Self::default_config_path().filter(|p| p.exists())
    }

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("farmadvisor").join("config.yaml"))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = match regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") {
            Ok(re) => re,
            Err(_) => return result,
        };

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    /// Configured OpenWeatherMap settings, if present, enabled and keyed.
    pub fn active_openweathermap(&self) -> Option<&OpenWeatherMapConfig> {
        self.openweathermap
            .as_ref()
            .filter(|c| c.enabled && !c.api_key.trim().is_empty() && !c.api_key.contains("${"))
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog.path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin()),
        }
    }

    pub fn ranker(&self) -> Result<Ranker> {
        Ranker::new(self.scoring.clone())
    }

    pub fn fertilizer_ranker(&self) -> Result<FertilizerRanker> {
        FertilizerRanker::new(
            self.fertilizer_scoring.weights,
            self.scoring.tiers,
            self.scoring.limits.fertilizers,
        )
    }

    /// Check everything that would otherwise fail late: weights and the
    /// catalog. Returns catalog entry problems that are not fatal.
    pub fn validate(&self) -> Result<Vec<String>> {
        self.ranker()?;
        self.fertilizer_ranker()?;
        self.load_catalog()?.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::ranking::RankingMode;
    use std::io::Write;

    #[test]
    fn defaults_match_documented_weights() {
        let config = Config::default();
        assert!((config.scoring.weights.climate - 0.40).abs() < 1e-12);
        assert!((config.scoring.weights.soil - 0.25).abs() < 1e-12);
        assert_eq!(config.scoring.limits.crops, 6);
        assert_eq!(config.scoring.limits.fertilizers, 5);
        assert!(config.openweathermap.is_none());
    }

    #[test]
    fn parse_partial_yaml_keeps_defaults() {
        let config = Config::parse(
            r#"
location:
  name: Ludhiana
  latitude: 30.9
  longitude: 75.85
scoring:
  weights:
    climate: 0.5
  mode: price
"#,
        )
        .unwrap();
        assert_eq!(config.location.name, "Ludhiana");
        assert!((config.scoring.weights.climate - 0.5).abs() < 1e-12);
        assert!((config.scoring.weights.market - 0.15).abs() < 1e-12);
        assert_eq!(config.scoring.mode, RankingMode::Price);
        assert!((config.scoring.tiers.high - 0.7).abs() < 1e-12);
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("FARMADVISOR_TEST_OWM_KEY", "abc123");
        let config = Config::parse(
            r#"
openweathermap:
  api_key: ${FARMADVISOR_TEST_OWM_KEY}
"#,
        )
        .unwrap();
        let owm = config.active_openweathermap().unwrap();
        assert_eq!(owm.api_key, "abc123");
        assert!(owm.enabled);
    }

    #[test]
    fn unresolved_key_is_inactive() {
        let config = Config::parse(
            r#"
openweathermap:
  api_key: ${FARMADVISOR_TEST_UNSET_VARIABLE}
"#,
        )
        .unwrap();
        assert!(config.openweathermap.is_some());
        assert!(config.active_openweathermap().is_none());
    }

    #[test]
    fn api_key_is_redacted() {
        let owm = OpenWeatherMapConfig {
            api_key: "secret".into(),
            enabled: true,
        };
        let debug = format!("{:?}", owm);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "location:\n  name: Pune\n  latitude: 18.52\n  longitude: 73.86").unwrap();
        let config = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.location.name, "Pune");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, AdvisorError::Config(_)));
    }

    #[test]
    fn malformed_yaml_is_a_config_error() {
        assert!(matches!(
            Config::parse("scoring: [unclosed"),
            Err(AdvisorError::Config(_))
        ));
    }

    #[test]
    fn bad_weights_fail_validation() {
        let config = Config::parse("fertilizer_scoring:\n  weights:\n    cost: -1.0\n").unwrap();
        assert!(matches!(config.validate(), Err(AdvisorError::Weights(_))));
    }

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().unwrap().is_empty());
    }

    #[test]
    fn example_config_matches_defaults() {
        let config = Config::parse(include_str!("../config/config.yaml.example")).unwrap();
        assert_eq!(config.scoring, ScoringSettings::default());
        assert_eq!(
            config.fertilizer_scoring.weights,
            FertilizerWeights::default()
        );
        assert!(config.catalog.path.is_none());
        assert!(config.openweathermap.is_some());
    }
}
