use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default spacing of point-count progress milestones during reconstruction.
const DEFAULT_MILESTONE_INTERVAL: usize = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for {name}: {message}")]
    InvalidParameter {
        name: &'static str,
        message: String,
    },

    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}

/// Process-wide tuning constants for reconstruction and linearization.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconstructionConfig {
    /// Relative accuracy every accepted interval must satisfy.
    pub tolerance: f64,
    /// Absolute magnitude below which values are treated as zero.
    pub zero_floor: f64,
    /// Points between successive progress milestones.
    pub milestone_interval: usize,
}

#[derive(Debug, Deserialize)]
struct TuningFile {
    tolerance: f64,
    zero_floor: f64,
    milestone_interval: Option<usize>,
}

impl ReconstructionConfig {
    /// Loads the tuning constants from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let tuning: TuningFile = toml::from_str(&content).map_err(|e| ConfigError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mut builder = ReconstructionConfigBuilder::new()
            .tolerance(tuning.tolerance)
            .zero_floor(tuning.zero_floor);
        if let Some(interval) = tuning.milestone_interval {
            builder = builder.milestone_interval(interval);
        }
        builder.build()
    }
}

#[derive(Default)]
pub struct ReconstructionConfigBuilder {
    tolerance: Option<f64>,
    zero_floor: Option<f64>,
    milestone_interval: Option<usize>,
}

impl ReconstructionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }
    pub fn zero_floor(mut self, floor: f64) -> Self {
        self.zero_floor = Some(floor);
        self
    }
    pub fn milestone_interval(mut self, interval: usize) -> Self {
        self.milestone_interval = Some(interval);
        self
    }

    pub fn build(self) -> Result<ReconstructionConfig, ConfigError> {
        let tolerance = self
            .tolerance
            .ok_or(ConfigError::MissingParameter("tolerance"))?;
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "tolerance",
                message: format!("must be a positive finite number, got {tolerance}"),
            });
        }
        let zero_floor = self
            .zero_floor
            .ok_or(ConfigError::MissingParameter("zero_floor"))?;
        if !zero_floor.is_finite() || zero_floor < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "zero_floor",
                message: format!("must be a non-negative finite number, got {zero_floor}"),
            });
        }
        let milestone_interval = self.milestone_interval.unwrap_or(DEFAULT_MILESTONE_INTERVAL);
        if milestone_interval == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "milestone_interval",
                message: "must be positive".to_string(),
            });
        }
        Ok(ReconstructionConfig {
            tolerance,
            zero_floor,
            milestone_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builder_produces_a_config_from_all_parameters() {
        let config = ReconstructionConfigBuilder::new()
            .tolerance(0.001)
            .zero_floor(1e-10)
            .milestone_interval(5_000)
            .build()
            .unwrap();
        assert_eq!(config.tolerance, 0.001);
        assert_eq!(config.zero_floor, 1e-10);
        assert_eq!(config.milestone_interval, 5_000);
    }

    #[test]
    fn milestone_interval_has_a_default() {
        let config = ReconstructionConfigBuilder::new()
            .tolerance(0.001)
            .zero_floor(0.0)
            .build()
            .unwrap();
        assert_eq!(config.milestone_interval, DEFAULT_MILESTONE_INTERVAL);
    }

    #[test]
    fn missing_tolerance_is_reported() {
        let result = ReconstructionConfigBuilder::new().zero_floor(1e-10).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("tolerance"))
        ));
    }

    #[test]
    fn missing_zero_floor_is_reported() {
        let result = ReconstructionConfigBuilder::new().tolerance(0.01).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter("zero_floor"))
        ));
    }

    #[test]
    fn non_positive_tolerance_is_rejected() {
        let result = ReconstructionConfigBuilder::new()
            .tolerance(0.0)
            .zero_floor(1e-10)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "tolerance",
                ..
            })
        ));
    }

    #[test]
    fn negative_zero_floor_is_rejected() {
        let result = ReconstructionConfigBuilder::new()
            .tolerance(0.01)
            .zero_floor(-1.0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "zero_floor",
                ..
            })
        ));
    }

    #[test]
    fn load_reads_a_tuning_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "tolerance = 0.005").unwrap();
        writeln!(file, "zero_floor = 1e-12").unwrap();
        writeln!(file, "milestone_interval = 2000").unwrap();

        let config = ReconstructionConfig::load(&path).unwrap();
        assert_eq!(config.tolerance, 0.005);
        assert_eq!(config.zero_floor, 1e-12);
        assert_eq!(config.milestone_interval, 2000);
    }

    #[test]
    fn load_reports_missing_files() {
        let result = ReconstructionConfig::load(Path::new("/nonexistent/tuning.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_reports_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.toml");
        std::fs::write(&path, "tolerance = ").unwrap();
        let result = ReconstructionConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::Toml { .. })));
    }
}
