use serde::Serialize;

use crate::config::SiteConfig;

/// What the contact page map widget needs to decide whether to load
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapsConfig {
    pub api_key: String,
    pub has_api_key: bool,
}

impl MapsConfig {
    pub fn from_config(config: &SiteConfig) -> Self {
        match config.maps_api_key.as_deref() {
            Some(key) => Self {
                api_key: key.to_string(),
                has_api_key: true,
            },
            None => Self {
                api_key: String::new(),
                has_api_key: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_presence_is_flagged() {
        let mut config = SiteConfig::default();
        assert_eq!(
            MapsConfig::from_config(&config),
            MapsConfig {
                api_key: String::new(),
                has_api_key: false
            }
        );

        config.maps_api_key = Some("key".to_string());
        let maps = MapsConfig::from_config(&config);
        assert!(maps.has_api_key);
        assert_eq!(
            serde_json::to_value(&maps).unwrap(),
            serde_json::json!({"apiKey": "key", "hasApiKey": true})
        );
    }
}
