/// Fixed fill for counties with confirmed zero outages in the heatmap.
pub const NO_OUTAGE_COLOR: &str = "#00ff00";

/// KML fill color (aabbggrr order) for an outage percentage: black at 0%
/// ramping to yellow at 100%, at fixed 50% opacity. Percentages past 100
/// clamp at the yellow end instead of overflowing the channels.
pub fn alpha_scaled(percentage: f64) -> String {
    let normalized = (percentage / 100.0).clamp(0.0, 1.0);
    let r = (255.0 * normalized) as u8;
    let g = (255.0 * normalized) as u8;
    let b = 0u8;
    let alpha = 0x80u8;
    format!("{:02x}{:02x}{:02x}{:02x}", alpha, b, g, r)
}

/// Standard #rrggbb fill for an outage count scaled against the worst-hit
/// county of the run: yellow at the low end to red at the maximum. When no
/// county has an outage the normalized value is 0 for everyone.
pub fn severity_ramp(outage_count: u64, max_outage: u64) -> String {
    let normalized = if max_outage > 0 {
        outage_count as f64 / max_outage as f64
    } else {
        0.0
    };
    let r = (255.0 * normalized) as u8;
    let g = (255.0 * (1.0 - normalized)) as u8;
    format!("#{:02x}{:02x}00", r, g)
}

/// Heatmap fill for one county. Zero outages take the fixed no-outage
/// green, everything else comes off the ramp.
pub fn heatmap_color(outage_count: u64, max_outage: u64) -> String {
    if outage_count == 0 {
        return NO_OUTAGE_COLOR.to_string();
    }
    severity_ramp(outage_count, max_outage)
}
