//! Delivery configuration for the contact pipeline
//!
//! Supports loading channel settings from (in order of priority):
//! 1. Compile-time embedded settings (for production builds)
//! 2. JSON file (~/.config/folio/contact.json)
//! 3. Runtime environment variables (fallback)
//!
//! Nothing here is secret: the relay identifiers are public client-side keys.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::channels::{DeliveryChannel, RelayTarget};

/// Contact config filename in the folio config directory
const CONTACT_FILE: &str = "contact.json";

/// Mailto destination when none is configured
pub const DEFAULT_FALLBACK_ADDRESS: &str = "hello@example.com";

const ENV_SERVICE_ID: &str = "PORTFOLIO_EMAILJS_SERVICE_ID";
const ENV_TEMPLATE_ID: &str = "PORTFOLIO_EMAILJS_TEMPLATE_ID";
const ENV_USER_ID: &str = "PORTFOLIO_EMAILJS_USER_ID";
const ENV_FORM_ENDPOINT: &str = "PORTFOLIO_FORM_ENDPOINT";
const ENV_CONTACT_ADDRESS: &str = "PORTFOLIO_CONTACT_ADDRESS";

/// Email relay identifiers (EmailJS service, template and public key)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySettings {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub user_id: Option<String>,
}

impl RelaySettings {
    /// Resolve into a usable target; `None` unless all three ids are non-blank
    pub fn target(&self) -> Option<RelayTarget> {
        Some(RelayTarget {
            service_id: non_blank(self.service_id.as_deref())?,
            template_id: non_blank(self.template_id.as_deref())?,
            user_id: non_blank(self.user_id.as_deref())?,
        })
    }
}

/// Read-only channel configuration, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub relay: Option<RelaySettings>,
    #[serde(default)]
    pub form_endpoint: Option<String>,
    #[serde(default = "default_fallback_address")]
    pub fallback_address: String,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            relay: None,
            form_endpoint: None,
            fallback_address: default_fallback_address(),
        }
    }
}

fn default_fallback_address() -> String {
    DEFAULT_FALLBACK_ADDRESS.to_string()
}

impl DeliveryConfig {
    /// Load configuration using the following priority:
    /// 1. Compile-time embedded settings
    /// 2. JSON file (~/.config/folio/contact.json)
    /// 3. Runtime environment variables
    pub fn load() -> Result<Self> {
        if let Some(cfg) = Self::from_compile_time() {
            return Ok(cfg);
        }

        if config::config_exists(CONTACT_FILE) {
            return config::load_json(CONTACT_FILE);
        }

        Ok(Self::from_env())
    }

    /// Settings embedded at compile time via environment variables.
    /// Build with: PORTFOLIO_FORM_ENDPOINT=https://... cargo build --release
    pub fn from_compile_time() -> Option<Self> {
        let relay = RelaySettings {
            service_id: option_env!("PORTFOLIO_EMAILJS_SERVICE_ID").map(str::to_string),
            template_id: option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID").map(str::to_string),
            user_id: option_env!("PORTFOLIO_EMAILJS_USER_ID").map(str::to_string),
        };
        let form_endpoint = option_env!("PORTFOLIO_FORM_ENDPOINT").map(str::to_string);

        if relay == RelaySettings::default() && form_endpoint.is_none() {
            return None;
        }

        Some(Self {
            relay: Some(relay),
            form_endpoint,
            fallback_address: option_env!("PORTFOLIO_CONTACT_ADDRESS")
                .map(str::to_string)
                .unwrap_or_else(default_fallback_address),
        })
    }

    /// Load configuration from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse contact config JSON")
    }

    /// Load configuration from runtime environment variables
    ///
    /// Unset variables simply leave the corresponding channel unconfigured.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok();
        let relay = RelaySettings {
            service_id: var(ENV_SERVICE_ID),
            template_id: var(ENV_TEMPLATE_ID),
            user_id: var(ENV_USER_ID),
        };

        Self {
            relay: (relay != RelaySettings::default()).then_some(relay),
            form_endpoint: var(ENV_FORM_ENDPOINT),
            fallback_address: var(ENV_CONTACT_ADDRESS)
                .and_then(|a| non_blank(Some(a.as_str())))
                .unwrap_or_else(default_fallback_address),
        }
    }

    /// Get the default config file path (~/.config/folio/contact.json)
    pub fn default_config_path() -> Option<PathBuf> {
        config::config_path(CONTACT_FILE)
    }

    /// Parsed form endpoint, if configured and a valid absolute URL
    pub fn endpoint_url(&self) -> Option<Url> {
        let raw = non_blank(self.form_endpoint.as_deref())?;
        match Url::parse(&raw) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!("Ignoring invalid form endpoint {:?}: {}", raw, e);
                None
            }
        }
    }

    /// Enumerate delivery channels in attempt order
    ///
    /// Preferred channels appear only when fully configured. The mail
    /// client handoff is always present and always last.
    pub fn channels(&self) -> Vec<DeliveryChannel> {
        let mut channels = Vec::with_capacity(3);

        if let Some(target) = self.relay.as_ref().and_then(RelaySettings::target) {
            channels.push(DeliveryChannel::Relay(target));
        }
        if let Some(url) = self.endpoint_url() {
            channels.push(DeliveryChannel::FormEndpoint(url));
        }
        channels.push(DeliveryChannel::MailClient {
            address: self.fallback_address.clone(),
        });

        debug!(
            "Contact channels: {}",
            channels
                .iter()
                .map(|c| c.kind().as_str())
                .collect::<Vec<_>>()
                .join(" -> ")
        );
        channels
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::ChannelKind;

    fn kinds(cfg: &DeliveryConfig) -> Vec<ChannelKind> {
        cfg.channels().iter().map(DeliveryChannel::kind).collect()
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "relay": {
                "service_id": "service_abc",
                "template_id": "template_xyz",
                "user_id": "public_key"
            },
            "form_endpoint": "https://formspree.io/f/abcd",
            "fallback_address": "me@example.org"
        }"#;

        let cfg = DeliveryConfig::from_json(json).unwrap();
        assert_eq!(
            kinds(&cfg),
            vec![ChannelKind::Relay, ChannelKind::FormEndpoint, ChannelKind::MailClient]
        );

        match &cfg.channels()[0] {
            DeliveryChannel::Relay(target) => {
                assert_eq!(target.service_id, "service_abc");
                assert_eq!(target.template_id, "template_xyz");
                assert_eq!(target.user_id, "public_key");
            }
            other => panic!("unexpected channel {:?}", other),
        }
        match cfg.channels().last() {
            Some(DeliveryChannel::MailClient { address }) => assert_eq!(address, "me@example.org"),
            other => panic!("unexpected channel {:?}", other),
        }
    }

    #[test]
    fn test_empty_config_is_mail_only() {
        let cfg = DeliveryConfig::from_json("{}").unwrap();
        assert_eq!(cfg.fallback_address, DEFAULT_FALLBACK_ADDRESS);
        assert_eq!(kinds(&cfg), vec![ChannelKind::MailClient]);
    }

    #[test]
    fn test_relay_requires_all_ids() {
        let json = r#"{
            "relay": { "service_id": "s", "template_id": "t" },
            "form_endpoint": "https://formspree.io/f/abcd"
        }"#;
        let cfg = DeliveryConfig::from_json(json).unwrap();
        assert_eq!(kinds(&cfg), vec![ChannelKind::FormEndpoint, ChannelKind::MailClient]);
    }

    #[test]
    fn test_blank_relay_id_counts_as_missing() {
        let cfg = DeliveryConfig {
            relay: Some(RelaySettings {
                service_id: Some("s".into()),
                template_id: Some("   ".into()),
                user_id: Some("u".into()),
            }),
            ..Default::default()
        };
        assert_eq!(kinds(&cfg), vec![ChannelKind::MailClient]);
    }

    #[test]
    fn test_invalid_endpoint_is_skipped() {
        let cfg = DeliveryConfig {
            form_endpoint: Some("not a url".into()),
            ..Default::default()
        };
        assert!(cfg.endpoint_url().is_none());
        assert_eq!(kinds(&cfg), vec![ChannelKind::MailClient]);
    }

    #[test]
    fn test_null_channels() {
        let json = r#"{ "relay": null, "form_endpoint": null, "fallback_address": "x@y.z" }"#;
        let cfg = DeliveryConfig::from_json(json).unwrap();
        assert_eq!(kinds(&cfg), vec![ChannelKind::MailClient]);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contact.json");
        std::fs::write(&path, r#"{ "form_endpoint": "https://example.com/f/1" }"#).unwrap();

        let cfg = DeliveryConfig::from_file(&path).unwrap();
        assert_eq!(
            cfg.endpoint_url().map(|u| u.to_string()),
            Some("https://example.com/f/1".to_string())
        );
    }

    #[test]
    fn test_invalid_json() {
        assert!(DeliveryConfig::from_json("{ relay: ").is_err());
    }
}
