//! View Configuration
//!
//! Every field has a default so partial JSON from the page is accepted.

use serde::{Deserialize, Serialize};

use crate::truncate::DEFAULT_OMISSION;

/// Open Collective's open source fiscal host
pub const OPEN_SOURCE_HOST_ID: u64 = 11004;

/// Knobs for tier card derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresenterOptions {
    /// Description length when the tier links to a long description page
    pub short_description_length: usize,
    /// Description length otherwise
    pub description_length: usize,
    pub omission: String,
    /// Avatars shown on a contribute card
    pub max_contributors: usize,
}

impl Default for PresenterOptions {
    fn default() -> Self {
        Self {
            short_description_length: 60,
            description_length: 256,
            omission: DEFAULT_OMISSION.to_string(),
            max_contributors: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkConfig {
    pub become_host_docs: String,
    pub twitter_base: String,
    pub github_base: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            become_host_docs: "https://docs.opencollective.com/help/hosts/become-host".to_string(),
            twitter_base: "https://twitter.com".to_string(),
            github_base: "https://github.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    pub presenter: PresenterOptions,
    pub links: LinkConfig,
    pub open_source_host_id: u64,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            presenter: PresenterOptions::default(),
            links: LinkConfig::default(),
            open_source_host_id: OPEN_SOURCE_HOST_ID,
            log_level: "info".to_string(),
        }
    }
}

impl ViewConfig {
    /// Parsed log level, `Info` when unrecognized
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ViewConfig =
            serde_json::from_str(r#"{ "presenter": { "maxContributors": 8 } }"#).unwrap();
        assert_eq!(config.presenter.max_contributors, 8);
        assert_eq!(config.presenter.short_description_length, 60);
        assert_eq!(config.presenter.description_length, 256);
        assert_eq!(config.open_source_host_id, OPEN_SOURCE_HOST_ID);
    }

    #[test]
    fn test_wrong_field_type_is_an_error() {
        assert!(serde_json::from_str::<ViewConfig>(r#"{ "logLevel": 3 }"#).is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = ViewConfig::default();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }
}
