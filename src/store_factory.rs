use crate::date_provider::{DateProvider, OverrideDateProvider, SystemDateProvider};
use crate::store::Store;
use chrono::NaiveDate;
use rusqlite::Result;
use std::sync::Arc;

const DEFAULT_DB_PATH: &str = "lazydsa.db";

/// Store configuration assembled from CLI flags
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// In-memory database, for tests and dry runs
    pub is_test_mode: bool,
    /// Custom database file path (ignored in test mode)
    pub custom_path: Option<String>,
    /// Pin the clock to this calendar day
    pub override_date: Option<NaiveDate>,
}

impl StoreConfig {
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    pub fn db_path(&self) -> &str {
        if self.is_test_mode {
            ":memory:"
        } else {
            self.custom_path.as_deref().unwrap_or(DEFAULT_DB_PATH)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    pub fn test_mode(mut self) -> Self {
        self.config.is_test_mode = true;
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.config.custom_path = Some(path.into());
        self
    }

    pub fn override_date(mut self, date: Option<NaiveDate>) -> Self {
        self.config.override_date = date;
        self
    }

    pub fn date_ymd(mut self, year: i32, month: u32, day: u32) -> Self {
        self.config.override_date = NaiveDate::from_ymd_opt(year, month, day);
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}

/// Builds `Store` instances with the clock the configuration asks for
pub struct StoreFactory;

impl StoreFactory {
    pub fn create(config: StoreConfig) -> Result<Store> {
        let provider: Arc<dyn DateProvider> = match config.override_date {
            Some(date) => Arc::new(OverrideDateProvider::new(date)),
            None => Arc::new(SystemDateProvider),
        };
        Store::with_date_provider(config.db_path(), provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path() {
        let config = StoreConfig::default();
        assert_eq!(config.db_path(), DEFAULT_DB_PATH);
    }

    #[test]
    fn test_test_mode_path() {
        let config = StoreConfig::builder().test_mode().build();
        assert_eq!(config.db_path(), ":memory:");
    }

    #[test]
    fn test_custom_path() {
        let config = StoreConfig::builder().path("custom.db").build();
        assert_eq!(config.db_path(), "custom.db");
    }

    #[test]
    fn test_test_mode_wins_over_custom_path() {
        let config = StoreConfig::builder().test_mode().path("custom.db").build();
        assert_eq!(config.db_path(), ":memory:");
    }

    #[test]
    fn test_create_in_memory_store() {
        let config = StoreConfig::builder().test_mode().build();
        let store = StoreFactory::create(config).expect("Failed to create in-memory store");
        assert!(store.count_questions().is_ok());
    }

    #[test]
    fn test_override_date_pins_store_clock() {
        let config = StoreConfig::builder()
            .test_mode()
            .date_ymd(2024, 11, 12)
            .build();
        let store = StoreFactory::create(config).unwrap();
        assert_eq!(
            store.today(),
            NaiveDate::from_ymd_opt(2024, 11, 12).unwrap()
        );
    }
}
