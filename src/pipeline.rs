use crate::config::AppConfig;
use crate::data::{GeometrySource, OutageSource};
use crate::document;
use crate::join::OutageIndex;
use crate::types::OutputMode;
use crate::writer::DocumentWriter;
use anyhow::Result;
use tracing::warn;

/// One full run: fetch both feeds, join, assemble the document for the
/// selected mode, write it once. A feed that fails to fetch or parse
/// degrades to empty with a diagnostic; the run still produces a valid
/// (possibly empty) document.
pub fn run(
    config: &AppConfig,
    mode: OutputMode,
    geometry_source: &dyn GeometrySource,
    outage_source: &dyn OutageSource,
    writer: &mut dyn DocumentWriter,
) -> Result<()> {
    // 1. Fetch both feeds, degrading each to empty on failure
    let features = match geometry_source.fetch(&config.input.state) {
        Ok(features) => features,
        Err(e) => {
            warn!(error = %e, "Error fetching county geometry data, continuing with none");
            Vec::new()
        }
    };
    println!("Loaded geometry for {} counties", features.len());

    let records = match outage_source.fetch(&config.input.state) {
        Ok(records) => records,
        Err(e) => {
            warn!(error = %e, "Error fetching outage data, continuing with none");
            Vec::new()
        }
    };
    println!("Loaded {} outage records", records.len());

    // 2. Join and assemble
    let index = OutageIndex::build(records);
    let document_name = format!("{} County Power Outages", config.input.state);
    let document = document::assemble(&document_name, &features, &index, mode)?;

    // 3. Write once
    writer.write(&document)
}
