use crate::errors::RenderError;
use geojson::Value;

/// A single region's rendered boundary: one outer ring plus any interior
/// holes.
///
/// The upstream feed encodes a county's holes as the trailing polygons of
/// a MultiPolygon, so every polygon after the first contributes its first
/// ring as a hole of the same region, not as a separate disjoint shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBoundary {
    pub outer: Vec<(f64, f64)>,
    pub holes: Vec<Vec<(f64, f64)>>,
}

pub fn region_boundary(geometry: &Value) -> Result<RegionBoundary, RenderError> {
    match geometry {
        Value::Polygon(rings) => {
            // Outer ring only; a plain polygon's holes are not rendered.
            let outer = rings.first().ok_or(RenderError::EmptyGeometry)?;
            Ok(RegionBoundary {
                outer: ring_positions(outer),
                holes: Vec::new(),
            })
        }
        Value::MultiPolygon(polygons) => {
            let mut groups = polygons.iter();
            let first = groups.next().ok_or(RenderError::EmptyGeometry)?;
            let outer = first.first().ok_or(RenderError::EmptyGeometry)?;
            let holes = groups
                .filter_map(|rings| rings.first())
                .map(|ring| ring_positions(ring))
                .collect();
            Ok(RegionBoundary {
                outer: ring_positions(outer),
                holes,
            })
        }
        other => Err(RenderError::UnsupportedGeometry(type_name(other).to_string())),
    }
}

/// Space-separated lon,lat,0 triples for a KML coordinates element.
/// Elevation is always ground level.
pub fn kml_coordinates(ring: &[(f64, f64)]) -> String {
    ring.iter()
        .map(|(lon, lat)| format!("{},{},0", lon, lat))
        .collect::<Vec<_>>()
        .join(" ")
}

fn ring_positions(ring: &[Vec<f64>]) -> Vec<(f64, f64)> {
    ring.iter()
        .map(|position| {
            (
                position.first().copied().unwrap_or(0.0),
                position.get(1).copied().unwrap_or(0.0),
            )
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(offset: f64) -> Vec<Vec<f64>> {
        vec![
            vec![offset, offset],
            vec![offset + 1.0, offset],
            vec![offset + 1.0, offset + 1.0],
            vec![offset, offset],
        ]
    }

    #[test]
    fn polygon_takes_outer_ring_and_no_holes() {
        let geometry = Value::Polygon(vec![square(0.0), square(0.2)]);
        let boundary = region_boundary(&geometry).unwrap();
        assert_eq!(boundary.outer.len(), 4);
        assert_eq!(boundary.outer[0], (0.0, 0.0));
        assert!(boundary.holes.is_empty());
    }

    #[test]
    fn multipolygon_preserves_outer_then_holes_of_one_region() {
        let geometry = Value::MultiPolygon(vec![vec![square(0.0)], vec![square(0.25)]]);
        let boundary = region_boundary(&geometry).unwrap();
        assert_eq!(boundary.outer[0], (0.0, 0.0));
        assert_eq!(boundary.holes.len(), 1);
        assert_eq!(boundary.holes[0][0], (0.25, 0.25));
    }

    #[test]
    fn unsupported_geometry_reports_its_type() {
        let geometry = Value::Point(vec![1.0, 2.0]);
        match region_boundary(&geometry) {
            Err(RenderError::UnsupportedGeometry(name)) => assert_eq!(name, "Point"),
            other => panic!("expected unsupported geometry, got {:?}", other),
        }
    }

    #[test]
    fn empty_coordinates_are_rejected_not_panicked() {
        assert!(matches!(
            region_boundary(&Value::Polygon(Vec::new())),
            Err(RenderError::EmptyGeometry)
        ));
        assert!(matches!(
            region_boundary(&Value::MultiPolygon(Vec::new())),
            Err(RenderError::EmptyGeometry)
        ));
    }

    #[test]
    fn kml_coordinates_are_lon_lat_ground_triples() {
        let ring = vec![(1.0, 2.0), (3.0, 4.0), (5.0, 6.0), (1.0, 2.0)];
        assert_eq!(kml_coordinates(&ring), "1,2,0 3,4,0 5,6,0 1,2,0");
    }
}
