use crate::config::InputConfig;
use crate::errors::SourceError;
use crate::types::{GeometryFeature, OutageRecord};
use serde::Deserialize;

/// Boundary geometry for every county in a region.
pub trait GeometrySource {
    fn fetch(&self, region: &str) -> Result<Vec<GeometryFeature>, SourceError>;
}

/// Reported outage counts for every county in a region.
pub trait OutageSource {
    fn fetch(&self, region: &str) -> Result<Vec<OutageRecord>, SourceError>;
}

// Feed envelopes. The geometry feed tolerates missing keys (they default to
// an empty area list); the outage feed does not, a body without
// WebCountyRecord is malformed.

#[derive(Debug, Default, Deserialize)]
struct GeometryFeed {
    #[serde(rename = "CountyGeometry", default)]
    county_geometry: CountyGeometry,
}

#[derive(Debug, Default, Deserialize)]
struct CountyGeometry {
    #[serde(rename = "Areas", default)]
    areas: Vec<GeometryFeature>,
}

#[derive(Debug, Deserialize)]
struct OutageFeed {
    #[serde(rename = "WebCountyRecord")]
    records: Vec<OutageRecord>,
}

pub struct HttpGeometrySource {
    base_url: String,
}

impl HttpGeometrySource {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            base_url: config.geometry_base_url.clone(),
        }
    }
}

impl GeometrySource for HttpGeometrySource {
    fn fetch(&self, region: &str) -> Result<Vec<GeometryFeature>, SourceError> {
        let url = format!("{}/{}.json", self.base_url, region.to_lowercase());
        let body = ureq::get(&url)
            .call()
            .map_err(|e| SourceError::Fetch(e.to_string()))?
            .into_string()
            .map_err(|e| SourceError::Fetch(e.to_string()))?;
        let feed: GeometryFeed = serde_json::from_str(&body)?;
        Ok(feed.county_geometry.areas)
    }
}

pub struct HttpOutageSource {
    base_url: String,
    api_key: String,
}

impl HttpOutageSource {
    pub fn new(config: &InputConfig) -> Self {
        Self {
            base_url: config.outage_base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

impl OutageSource for HttpOutageSource {
    fn fetch(&self, region: &str) -> Result<Vec<OutageRecord>, SourceError> {
        let body = ureq::get(&self.base_url)
            .query("key", &self.api_key)
            .query("countryid", "us")
            .query("statename", region)
            .call()
            .map_err(|e| SourceError::Fetch(e.to_string()))?
            .into_string()
            .map_err(|e| SourceError::Fetch(e.to_string()))?;
        let feed: OutageFeed = serde_json::from_str(&body)?;
        Ok(feed.records)
    }
}
