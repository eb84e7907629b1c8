use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;

pub const SETTINGS_PATH_VAR: &str = "FRIDGE_SETTINGS_PATH";
pub const SEED_DEMO_VAR: &str = "FRIDGE_SEED_DEMO";
pub const TODAY_VAR: &str = "FRIDGE_TODAY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file the settings store mirrors to. `None` keeps settings in memory.
    pub settings_path: Option<PathBuf>,
    /// Start with the sample fridge and grocery list.
    pub seed_demo: bool,
    /// Pins "today" instead of reading the local clock.
    pub today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_path: None,
            seed_demo: true,
            today: None,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let settings_path = lookup(SETTINGS_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let seed_demo = lookup(SEED_DEMO_VAR)
            .map(|value| parse_flag(value.trim()))
            .unwrap_or_else(|| {
                info!("{SEED_DEMO_VAR} not set, using default: {}", defaults.seed_demo);
                defaults.seed_demo
            });

        let today = lookup(TODAY_VAR)
            .map(|value| {
                NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
                    .with_context(|| format!("Invalid {TODAY_VAR} value '{value}'"))
            })
            .transpose()?;

        Ok(Self {
            settings_path,
            seed_demo,
            today,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn reads_all_variables() {
        let config = config(&[
            (SETTINGS_PATH_VAR, "/tmp/fridge.json"),
            (SEED_DEMO_VAR, "FALSE"),
            (TODAY_VAR, "2025-12-08"),
        ])
        .unwrap();
        assert_eq!(config.settings_path, Some(PathBuf::from("/tmp/fridge.json")));
        assert!(!config.seed_demo);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2025, 12, 8));
    }

    #[test]
    fn seed_flag_accepts_one_and_true() {
        assert!(config(&[(SEED_DEMO_VAR, "1")]).unwrap().seed_demo);
        assert!(config(&[(SEED_DEMO_VAR, "True")]).unwrap().seed_demo);
        assert!(!config(&[(SEED_DEMO_VAR, "0")]).unwrap().seed_demo);
    }

    #[test]
    fn bad_date_is_an_error() {
        assert!(config(&[(TODAY_VAR, "08/12/2025")]).is_err());
    }
}
