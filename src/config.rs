use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    /// State whose counties are fetched, e.g. "Florida".
    pub state: String,
    /// Access key for the outage feed.
    pub api_key: String,
    #[serde(default = "default_geometry_base_url")]
    pub geometry_base_url: String,
    #[serde(default = "default_outage_base_url")]
    pub outage_base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub kml: PathBuf,
    /// When set, the KML is additionally packed into a KMZ archive here.
    #[serde(default)]
    pub kmz: Option<PathBuf>,
    pub geojson: PathBuf,
}

fn default_geometry_base_url() -> String {
    "https://poweroutage.us/content/geometry/us/countygeometry".to_string()
}

fn default_outage_base_url() -> String {
    "https://poweroutage.us/api/web/counties".to_string()
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: AppConfig = toml::from_str(&content)
            .with_context(|| "Failed to parse TOML configuration")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_default_feed_urls() {
        let config: AppConfig = toml::from_str(
            r#"
            [input]
            state = "Florida"
            api_key = "test-key"

            [output]
            kml = "out.kml"
            geojson = "out.geojson"
            "#,
        )
        .unwrap();

        assert!(config.input.geometry_base_url.contains("countygeometry"));
        assert!(config.input.outage_base_url.contains("counties"));
        assert_eq!(config.output.kmz, None);
    }

    #[test]
    fn explicit_urls_override_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [input]
            state = "Florida"
            api_key = "test-key"
            geometry_base_url = "http://localhost:9000/geometry"
            outage_base_url = "http://localhost:9000/outages"

            [output]
            kml = "out.kml"
            kmz = "out.kmz"
            geojson = "out.geojson"
            "#,
        )
        .unwrap();

        assert_eq!(config.input.geometry_base_url, "http://localhost:9000/geometry");
        assert_eq!(config.output.kmz, Some(PathBuf::from("out.kmz")));
    }
}
