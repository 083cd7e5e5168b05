//! Configuration management for the salon server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::scheduling::{BusinessHours, ClosingPolicy};

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SchedulingConfig {
    pub business_hours: BusinessHours,
    /// Whether a booking may run past closing (`start_only`) or not (`whole_appointment`)
    #[serde(default)]
    pub closing_policy: ClosingPolicy,
    /// Also require the slot to fit the staff member's own working hours
    #[serde(default)]
    pub enforce_staff_hours: bool,
    /// Spacing of the slot grid, in minutes
    pub slot_step_minutes: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub seed_demo_data: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. SALON_SCHEDULING__SLOT_STEP_MINUTES)
            .add_source(
                Environment::with_prefix("SALON")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override port from PORT env var if present
            .set_override_option("server.port", env::var("PORT").ok())?
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if !self.scheduling.business_hours.is_valid() {
            return Err(ConfigError::Message(format!(
                "invalid business hours {}-{} (need start < end <= 24)",
                self.scheduling.business_hours.start_hour, self.scheduling.business_hours.end_hour
            )));
        }
        if self.scheduling.slot_step_minutes == 0 {
            return Err(ConfigError::Message("slot_step_minutes must be positive".to_string()));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            business_hours: BusinessHours::default(),
            closing_policy: ClosingPolicy::StartOnly,
            enforce_staff_hours: false,
            slot_step_minutes: 15,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed_demo_data: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.scheduling.business_hours, BusinessHours::new(9, 17));
        assert_eq!(config.scheduling.closing_policy, ClosingPolicy::StartOnly);
        assert!(!config.scheduling.enforce_staff_hours);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_invalid_business_hours_rejected() {
        let mut config = AppConfig::default();
        config.scheduling.business_hours = BusinessHours::new(17, 9);
        assert!(config.check().is_err());
    }

    #[test]
    fn test_scheduling_section_from_toml() {
        let config: AppConfig = Config::builder()
            .add_source(config::File::from_str(
                r#"
                [scheduling]
                business_hours = { start_hour = 8, end_hour = 20 }
                closing_policy = "whole_appointment"
                slot_step_minutes = 30
                "#,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(config.scheduling.business_hours, BusinessHours::new(8, 20));
        assert_eq!(config.scheduling.closing_policy, ClosingPolicy::WholeAppointment);
        assert_eq!(config.scheduling.slot_step_minutes, 30);
        assert_eq!(config.server.port, 8080);
    }
}
