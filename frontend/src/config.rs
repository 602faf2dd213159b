//! Application settings.
//!
//! The settings file `config/app.toml` is embedded at build time and parsed
//! on start-up. Every key has a default, so a partial file (or a broken one,
//! which is logged and ignored) still yields a usable configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::services::profiles::{demo_profiles, MemoryProfileStore};

const APP_CONFIG: &str = include_str!("../config/app.toml");

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub map: MapConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub latency_ms: u64,
    pub seed_demo_profiles: bool,
    /// Start with the simulated network down: every store call fails.
    pub offline: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            latency_ms: 500,
            seed_demo_profiles: true,
            offline: false,
        }
    }
}

impl StoreConfig {
    /// Builds the in-memory store these settings describe.
    pub fn build_store(&self) -> MemoryProfileStore {
        let profiles = if self.seed_demo_profiles {
            demo_profiles()
        } else {
            Vec::new()
        };
        let store = MemoryProfileStore::with_profiles(profiles)
            .with_latency(Duration::from_millis(self.latency_ms));
        store.set_offline(self.offline);
        store
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Leaflet tile URL template.
    pub tile_url: String,
    pub attribution: String,
    pub zoom: u8,
    pub height_px: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            zoom: 13,
            height_px: 400,
        }
    }
}

impl AppConfig {
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Parses the embedded settings, falling back to defaults.
    pub fn load() -> Self {
        match Self::parse(APP_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                gloo_console::warn!(format!("Invalid app.toml, using defaults: {}", e));
                Self::default()
            }
        }
    }
}
