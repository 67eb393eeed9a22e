use geojson::{FeatureCollection, Geometry};
use serde::Deserialize;

/// One county boundary with its census identity attributes, as served by
/// the geometry feed. The geometry payload may be absent or null.
#[derive(Debug, Clone, Deserialize)]
pub struct GeometryFeature {
    #[serde(rename = "NAME", default)]
    pub name: String,
    #[serde(rename = "GEO_ID", default)]
    pub geo_id: Option<String>,
    #[serde(rename = "STATE", default)]
    pub state: Option<String>,
    #[serde(rename = "COUNTY", default)]
    pub county: Option<String>,
    #[serde(rename = "LSAD", default)]
    pub lsad: Option<String>,
    #[serde(rename = "CENSUSAREA", default)]
    pub census_area: Option<f64>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

/// One county's reported outage counts and status from the outage feed.
/// OutageCount above CustomerCount is upstream data quality, not an error;
/// it is carried through unmodified.
#[derive(Debug, Clone, Deserialize)]
pub struct OutageRecord {
    #[serde(rename = "CountyName")]
    pub county_name: String,
    #[serde(rename = "OutageCount", default)]
    pub outage_count: u64,
    #[serde(rename = "CustomerCount", default)]
    pub customer_count: u64,
    #[serde(rename = "CountyStatus", default)]
    pub county_status: String,
}

/// A geometry feature joined with its outage record plus derived fields.
/// Built once per feature during assembly and discarded after rendering.
#[derive(Debug, Clone)]
pub struct EnrichedCounty {
    pub name: String,
    pub outage_count: u64,
    pub customer_count: u64,
    pub status: String,
    pub outage_percentage: f64,
    pub label: String,
}

/// Finished output, held fully in memory and serialized exactly once.
#[derive(Debug, Clone)]
pub enum OutputDocument {
    /// KML document text for the styled map.
    Map(String),
    /// GeoJSON feature collection with enriched per-county properties.
    Collection(FeatureCollection),
}

/// Selects which document the pipeline assembles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Map,
    Collection,
}
