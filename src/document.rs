use crate::color;
use crate::join::{normalize_name, OutageIndex};
use crate::metrics;
use crate::render::{self, RegionBoundary};
use crate::types::{EnrichedCounty, GeometryFeature, OutputDocument, OutputMode};
use anyhow::{Context, Result};
use geojson::{Feature, FeatureCollection, JsonObject};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde_json::json;
use tracing::{debug, warn};

/// Runs the per-feature pipeline (join, derive, color, render) in feed
/// order and accumulates the finished document for the selected mode.
pub fn assemble(
    document_name: &str,
    features: &[GeometryFeature],
    index: &OutageIndex,
    mode: OutputMode,
) -> Result<OutputDocument> {
    match mode {
        OutputMode::Map => assemble_map(document_name, features, index).map(OutputDocument::Map),
        OutputMode::Collection => Ok(OutputDocument::Collection(assemble_collection(
            features, index,
        ))),
    }
}

/// Styled KML: one Placemark per matched county that has renderable
/// geometry, then one Style block per unique matched county. Counties
/// without a matching outage record are dropped from this output.
fn assemble_map(
    document_name: &str,
    features: &[GeometryFeature],
    index: &OutageIndex,
) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut kml = BytesStart::new("kml");
    kml.push_attribute(("xmlns", "http://www.opengis.net/kml/2.2"));
    writer.write_event(Event::Start(kml))?;
    writer.write_event(Event::Start(BytesStart::new("Document")))?;
    text_element(&mut writer, "name", document_name)?;

    // Style definitions trail the placemarks, one per matched county,
    // in first-match order.
    let mut styled: Vec<(String, f64)> = Vec::new();

    for feature in features {
        let record = match index.get(&feature.name) {
            Some(record) => record,
            None => {
                warn!(county = %feature.name, "No outage data for county, skipping");
                continue;
            }
        };
        let geometry = match &feature.geometry {
            Some(geometry) => geometry,
            None => {
                warn!(county = %feature.name, "No geometry data for county, skipping");
                continue;
            }
        };
        let boundary = match render::region_boundary(&geometry.value) {
            Ok(boundary) => boundary,
            Err(e) => {
                warn!(county = %feature.name, error = %e, "Skipping county geometry");
                continue;
            }
        };

        let style_key = normalize_name(&feature.name);
        let enriched = metrics::enrich(feature, record);
        write_placemark(&mut writer, &enriched, &style_key, &boundary)?;

        if !styled.iter().any(|(key, _)| key == &style_key) {
            styled.push((style_key, enriched.outage_percentage));
        }
    }

    for (key, percentage) in &styled {
        write_style(&mut writer, key, *percentage)?;
    }

    writer.write_event(Event::End(BytesEnd::new("Document")))?;
    writer.write_event(Event::End(BytesEnd::new("kml")))?;

    String::from_utf8(writer.into_inner()).context("KML output was not valid UTF-8")
}

fn write_placemark(
    writer: &mut Writer<Vec<u8>>,
    enriched: &EnrichedCounty,
    style_key: &str,
    boundary: &RegionBoundary,
) -> Result<()> {
    let display_name = if enriched.name.is_empty() {
        "Unknown"
    } else {
        enriched.name.as_str()
    };
    let description = format!(
        "Outage Percentage: {:.2}%\nOutage Count: {}\nCustomer Count: {}",
        enriched.outage_percentage, enriched.outage_count, enriched.customer_count
    );

    writer.write_event(Event::Start(BytesStart::new("Placemark")))?;
    text_element(writer, "name", display_name)?;
    text_element(writer, "description", &description)?;
    text_element(writer, "styleUrl", &format!("#style_{}", style_key))?;

    writer.write_event(Event::Start(BytesStart::new("Polygon")))?;
    text_element(writer, "altitudeMode", "clampToGround")?;

    write_boundary(writer, "outerBoundaryIs", &boundary.outer)?;
    for hole in &boundary.holes {
        write_boundary(writer, "innerBoundaryIs", hole)?;
    }

    writer.write_event(Event::End(BytesEnd::new("Polygon")))?;
    writer.write_event(Event::End(BytesEnd::new("Placemark")))?;
    Ok(())
}

fn write_boundary(
    writer: &mut Writer<Vec<u8>>,
    boundary_tag: &str,
    ring: &[(f64, f64)],
) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(boundary_tag)))?;
    writer.write_event(Event::Start(BytesStart::new("LinearRing")))?;
    text_element(writer, "coordinates", &render::kml_coordinates(ring))?;
    writer.write_event(Event::End(BytesEnd::new("LinearRing")))?;
    writer.write_event(Event::End(BytesEnd::new(boundary_tag)))?;
    Ok(())
}

fn write_style(writer: &mut Writer<Vec<u8>>, style_key: &str, percentage: f64) -> Result<()> {
    let mut style = BytesStart::new("Style");
    style.push_attribute(("id", format!("style_{}", style_key).as_str()));
    writer.write_event(Event::Start(style))?;

    writer.write_event(Event::Start(BytesStart::new("LineStyle")))?;
    text_element(writer, "color", "00000000")?;
    text_element(writer, "width", "0")?;
    writer.write_event(Event::End(BytesEnd::new("LineStyle")))?;

    writer.write_event(Event::Start(BytesStart::new("PolyStyle")))?;
    text_element(writer, "color", &color::alpha_scaled(percentage))?;
    writer.write_event(Event::End(BytesEnd::new("PolyStyle")))?;

    writer.write_event(Event::End(BytesEnd::new("Style")))?;
    Ok(())
}

fn text_element(writer: &mut Writer<Vec<u8>>, tag: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// GeoJSON feature collection: one feature per input geometry feature,
/// geometry passed through untouched, properties enriched with outage
/// data. Counties without a matching record keep their place with
/// no-data defaults.
fn assemble_collection(features: &[GeometryFeature], index: &OutageIndex) -> FeatureCollection {
    let max_outage = index.max_outage();
    let mut out = Vec::with_capacity(features.len());

    for feature in features {
        let enriched = match index.get(&feature.name) {
            Some(record) => metrics::enrich(feature, record),
            None => {
                debug!(county = %feature.name, "No outage data for county, using defaults");
                metrics::no_data(feature)
            }
        };

        let mut properties = JsonObject::new();
        properties.insert("GEO_ID".to_string(), json!(feature.geo_id));
        properties.insert("STATE".to_string(), json!(feature.state));
        properties.insert("COUNTY".to_string(), json!(feature.county));
        properties.insert("NAME".to_string(), json!(feature.name));
        properties.insert("LSAD".to_string(), json!(feature.lsad));
        properties.insert("CENSUSAREA".to_string(), json!(feature.census_area));
        properties.insert("OutageCount".to_string(), json!(enriched.outage_count));
        properties.insert("CustomerCount".to_string(), json!(enriched.customer_count));
        properties.insert("CountyStatus".to_string(), json!(enriched.status));
        properties.insert(
            "OutagePercentage".to_string(),
            json!(enriched.outage_percentage),
        );
        properties.insert(
            "HeatmapColor".to_string(),
            json!(color::heatmap_color(enriched.outage_count, max_outage)),
        );
        properties.insert("Label".to_string(), json!(enriched.label));

        out.push(Feature {
            bbox: None,
            geometry: feature.geometry.clone(),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        });
    }

    FeatureCollection {
        bbox: None,
        features: out,
        foreign_members: None,
    }
}
