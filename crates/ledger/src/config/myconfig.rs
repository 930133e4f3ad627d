use anyhow::{Context, Result, anyhow};
use chrono::FixedOffset;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub db_max_conn: u32,
    pub utc_offset: FixedOffset,
    pub dev_mode: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("true") => true,
            Some("false") => false,
            Some(other) => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let db_max_conn = lookup("DB_MAX_CONN")
            .map(|v| v.parse::<u32>())
            .transpose()
            .context("DB_MAX_CONN must be a valid u32 integer")?
            .unwrap_or(5);

        let offset_minutes = lookup("VENUE_UTC_OFFSET_MINUTES")
            .map(|v| v.parse::<i32>())
            .transpose()
            .context("VENUE_UTC_OFFSET_MINUTES must be a whole number of minutes")?
            .unwrap_or(0);

        let utc_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                anyhow!("VENUE_UTC_OFFSET_MINUTES out of range: {}", offset_minutes)
            })?;

        let dev_mode = lookup("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);
        let enable_file_log = lookup("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            run_migrations,
            db_max_conn,
            utc_offset,
            dev_mode,
            enable_file_log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_the_url_is_set() {
        let config = config(&[("DATABASE_URL", "sqlite://StockSales.db")]).unwrap();

        assert_eq!(config.database_url, "sqlite://StockSales.db");
        assert!(config.run_migrations);
        assert_eq!(config.db_max_conn, 5);
        assert_eq!(config.utc_offset.local_minus_utc(), 0);
        assert!(!config.dev_mode);
        assert!(!config.enable_file_log);
    }

    #[test]
    fn reads_every_variable() {
        let config = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("RUN_MIGRATIONS", "false"),
            ("DB_MAX_CONN", "2"),
            ("VENUE_UTC_OFFSET_MINUTES", "-300"),
            ("DEV_MODE", "1"),
            ("ENABLE_FILE_LOG", "true"),
        ])
        .unwrap();

        assert!(!config.run_migrations);
        assert_eq!(config.db_max_conn, 2);
        assert_eq!(config.utc_offset.local_minus_utc(), -300 * 60);
        assert!(config.dev_mode);
        assert!(config.enable_file_log);
    }

    #[test]
    fn missing_url_is_an_error() {
        let err = config(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(config(&[("DATABASE_URL", "x"), ("RUN_MIGRATIONS", "yes")]).is_err());
        assert!(config(&[("DATABASE_URL", "x"), ("DB_MAX_CONN", "many")]).is_err());
        assert!(config(&[("DATABASE_URL", "x"), ("VENUE_UTC_OFFSET_MINUTES", "99999")]).is_err());
    }
}
