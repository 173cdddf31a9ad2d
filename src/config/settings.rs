//! User settings for the planner CLI
//!
//! Global default fallbacks (the pay cycle in particular) live here in
//! the boundary layer. The calculators themselves always require an
//! explicit `PayCycle` argument.

use serde::{Deserialize, Serialize};

use super::paths::PlannerPaths;
use crate::error::{PlannerError, PlannerResult};
use crate::models::PayCycle;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Pay cycle assumed when a command does not pass `--cycle`
    #[serde(default)]
    pub default_pay_cycle: PayCycle,

    /// Currency symbol for display
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_pay_cycle: PayCycle::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings, writing defaults on first run
    pub fn load_or_create(paths: &PlannerPaths) -> PlannerResult<Self> {
        let file = paths.settings_file();
        if file.exists() {
            let raw = std::fs::read_to_string(&file)?;
            let settings: Settings = serde_yaml::from_str(&raw)?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Persist settings to the settings file
    pub fn save(&self, paths: &PlannerPaths) -> PlannerResult<()> {
        paths.ensure_directories()?;
        let raw = serde_yaml::to_string(self)
            .map_err(|e| PlannerError::Config(e.to_string()))?;
        std::fs::write(paths.settings_file(), raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.default_pay_cycle, PayCycle::Fortnightly);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.is_initialized());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert!(paths.is_initialized());
        assert_eq!(settings.default_pay_cycle, PayCycle::Fortnightly);
    }

    #[test]
    fn test_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PlannerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_pay_cycle = PayCycle::Weekly;
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_pay_cycle, PayCycle::Weekly);
    }
}
