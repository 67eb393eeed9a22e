use crate::types::{EnrichedCounty, GeometryFeature, OutageRecord};

/// Percent of customers without power. Zero customers yields zero rather
/// than dividing by zero; counts above the customer total pass through
/// uncapped, reproducing whatever the upstream feed reported.
pub fn outage_percentage(outage_count: u64, customer_count: u64) -> f64 {
    if customer_count == 0 {
        return 0.0;
    }
    100.0 * outage_count as f64 / customer_count as f64
}

pub fn outage_label(percentage: f64) -> String {
    format!("{:.2}% Outage", percentage)
}

pub fn enrich(feature: &GeometryFeature, record: &OutageRecord) -> EnrichedCounty {
    let outage_percentage = outage_percentage(record.outage_count, record.customer_count);
    EnrichedCounty {
        name: feature.name.clone(),
        outage_count: record.outage_count,
        customer_count: record.customer_count,
        status: record.county_status.clone(),
        outage_percentage,
        label: outage_label(outage_percentage),
    }
}

/// Placeholder values for a county with no matching outage record,
/// used when the output keeps every feature.
pub fn no_data(feature: &GeometryFeature) -> EnrichedCounty {
    EnrichedCounty {
        name: feature.name.clone(),
        outage_count: 0,
        customer_count: 0,
        status: "No Outage".to_string(),
        outage_percentage: 0.0,
        label: "0.00% Outage".to_string(),
    }
}
