//! Runtime configuration resolved from flags and environment.

use chrono::NaiveDate;
use pepeng_lib::prelude::{Clock, FixedClock, SystemClock};
use std::env;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub(crate) const LOG_ENV: &str = "PEPENG_LOG";

/// Environment variable pinning "today" (YYYY-MM-DD).
pub(crate) const TODAY_ENV: &str = "PEPENG_TODAY";

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    /// Log filter directive.
    pub(crate) log_filter: String,
    /// Pinned date used instead of the system calendar.
    pub(crate) today: Option<NaiveDate>,
}

impl Config {
    /// Resolves the configuration from CLI flags and the process environment.
    ///
    /// Flags win over the environment.
    pub(crate) fn load(verbose: u8, quiet: bool, today: Option<&str>) -> Result<Self, ConfigError> {
        Self::resolve(
            verbose,
            quiet,
            today,
            env::var(LOG_ENV).ok().as_deref(),
            env::var(TODAY_ENV).ok().as_deref(),
        )
    }

    fn resolve(
        verbose: u8,
        quiet: bool,
        today_flag: Option<&str>,
        log_env: Option<&str>,
        today_env: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let log_filter = match log_env.filter(|s| !s.is_empty()) {
            Some(directive) => {
                EnvFilter::try_new(directive)
                    .map_err(|_| ConfigError::InvalidLogFilter(directive.to_string()))?;
                directive.to_string()
            }
            None => Self::level_for(verbose, quiet).to_string(),
        };

        let today = today_flag
            .or(today_env.filter(|s| !s.is_empty()))
            .map(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|_| ConfigError::InvalidDate(s.to_string()))
            })
            .transpose()?;

        Ok(Self { log_filter, today })
    }

    const fn level_for(verbose: u8, quiet: bool) -> &'static str {
        if quiet {
            return "off";
        }
        match verbose {
            0 => "error",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Returns the log filter.
    pub(crate) fn env_filter(&self) -> EnvFilter {
        EnvFilter::new(&self.log_filter)
    }

    /// Returns the clock the form should read "today" from.
    pub(crate) fn clock(&self) -> Box<dyn Clock> {
        match self.today {
            Some(date) => Box::new(FixedClock::new(date)),
            None => Box::new(SystemClock),
        }
    }
}

/// Errors in flag or environment values.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid log filter '{0}'")]
    InvalidLogFilter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::resolve(0, false, None, None, None).unwrap();
        assert_eq!(config.log_filter, "error");
        assert_eq!(config.today, None);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Config::level_for(1, false), "info");
        assert_eq!(Config::level_for(2, false), "debug");
        assert_eq!(Config::level_for(5, false), "trace");
        assert_eq!(Config::level_for(3, true), "off");
    }

    #[test]
    fn test_log_env_overrides_verbosity() {
        let config = Config::resolve(0, true, None, Some("pepeng_form=debug"), None).unwrap();
        assert_eq!(config.log_filter, "pepeng_form=debug");

        let config = Config::resolve(1, false, None, Some(""), None).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_today_flag_wins_over_env() {
        let config =
            Config::resolve(0, false, Some("2024-03-01"), None, Some("2020-01-01")).unwrap();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 3, 1));

        let config = Config::resolve(0, false, None, None, Some("2020-01-01")).unwrap();
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2020, 1, 1));
    }

    #[test]
    fn test_invalid_today() {
        assert!(matches!(
            Config::resolve(0, false, Some("01/03/2024"), None, None),
            Err(ConfigError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_pinned_clock() {
        let config = Config::resolve(0, false, Some("2024-01-30"), None, None).unwrap();
        assert_eq!(
            config.clock().today(),
            NaiveDate::from_ymd_opt(2024, 1, 30).unwrap()
        );
    }
}
