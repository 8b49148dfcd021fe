use crate::geocode::Coordinate;

/// Fraction of the route's span added on every side when fitting the map.
pub const VIEW_MARGIN: f64 = 0.15;

// Floor on the box span so coincident or near-coincident endpoints still get
// a visible viewport instead of a degenerate one.
const MIN_SPAN_DEG: f64 = 0.01;

/// Axis-aligned bounding box around two coordinates, grown by `margin` on
/// every side. Returns the south-west and north-east corners.
pub fn padded_bounds(a: Coordinate, b: Coordinate, margin: f64) -> (Coordinate, Coordinate) {
    let lat_pad = (a.lat - b.lat).abs().max(MIN_SPAN_DEG) * margin;
    let lon_pad = (a.lon - b.lon).abs().max(MIN_SPAN_DEG) * margin;

    let south_west = Coordinate {
        lat: a.lat.min(b.lat) - lat_pad,
        lon: a.lon.min(b.lon) - lon_pad,
    };
    let north_east = Coordinate {
        lat: a.lat.max(b.lat) + lat_pad,
        lon: a.lon.max(b.lon) + lon_pad,
    };

    (south_west, north_east)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Coordinate = Coordinate { lat: 10.0, lon: 10.0 };
    const B: Coordinate = Coordinate { lat: 20.0, lon: 20.0 };

    #[test]
    fn bounds_contain_both_endpoints_with_room_to_spare() {
        let (sw, ne) = padded_bounds(A, B, VIEW_MARGIN);

        assert!(sw.lat < A.lat && sw.lon < A.lon);
        assert!(ne.lat > B.lat && ne.lon > B.lon);
    }

    #[test]
    fn padding_is_a_fraction_of_the_span() {
        let (sw, ne) = padded_bounds(A, B, 0.1);

        assert!((sw.lat - 9.0).abs() < 1e-9);
        assert!((ne.lat - 21.0).abs() < 1e-9);
        assert!((sw.lon - 9.0).abs() < 1e-9);
        assert!((ne.lon - 21.0).abs() < 1e-9);
    }

    #[test]
    fn endpoint_order_does_not_matter() {
        assert_eq!(
            padded_bounds(A, B, VIEW_MARGIN),
            padded_bounds(B, A, VIEW_MARGIN)
        );
    }

    #[test]
    fn coincident_points_still_get_a_nonzero_viewport() {
        let (sw, ne) = padded_bounds(A, A, VIEW_MARGIN);

        assert!(ne.lat > sw.lat);
        assert!(ne.lon > sw.lon);
        assert!(sw.lat < A.lat && ne.lat > A.lat);
    }
}
