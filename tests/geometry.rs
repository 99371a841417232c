use approx::assert_relative_eq;
use dse_geo::{decode_point, encode_point, DseError, ErrorCode, LineString, Point, Polygon};
use geo::{line_string, polygon, Area};

#[test]
fn point_wkb_layout() {
    let buf = encode_point(1.5, -2.25);
    assert_eq!(buf.len(), 21);
    assert_eq!(&buf[..5], &[1, 1, 0, 0, 0]);
    assert_eq!(&buf[5..13], &1.5f64.to_le_bytes());
    assert_eq!(&buf[13..], &(-2.25f64).to_le_bytes());
    assert_eq!(decode_point(&buf).unwrap(), (1.5, -2.25));
}

#[test]
fn line_string_survives_geo() {
    let geom = line_string![(x: 0., y: 0.), (x: 3., y: 4.), (x: 3., y: 10.)];
    let line_string = LineString::try_from(&geom).unwrap();
    assert_eq!(line_string.num_points(), 3);

    let back = geo::LineString::from(&line_string);
    for (a, b) in back.coords().zip(geom.coords()) {
        assert_relative_eq!(a.x, b.x);
        assert_relative_eq!(a.y, b.y);
    }

    let decoded = LineString::from_wkb(line_string.bytes()).unwrap();
    assert_eq!(decoded, line_string);
}

#[test]
fn polygon_survives_geo() {
    let geom = polygon!(
        exterior: [(x: 0., y: 0.), (x: 4., y: 0.), (x: 4., y: 4.), (x: 0., y: 4.)],
        interiors: [[(x: 1., y: 1.), (x: 2., y: 1.), (x: 2., y: 2.), (x: 1., y: 2.)]],
    );
    let polygon = Polygon::try_from(&geom).unwrap();
    assert_eq!(polygon.num_rings(), 2);
    assert_relative_eq!(polygon.to_geo().unsigned_area(), 15.);
    assert_eq!(Polygon::from_wkb(polygon.bytes()).unwrap(), polygon);
}

#[test]
fn builder_state_errors() {
    let mut line_string = LineString::new();
    line_string.add_point(0., 0.).unwrap();
    let err = line_string.finish().unwrap_err();
    assert_eq!(err.code(), ErrorCode::LibInvalidState);

    let mut polygon = Polygon::new();
    assert!(matches!(
        polygon.add_point(0., 0.),
        Err(DseError::InvalidState(_))
    ));
    polygon.start_ring().unwrap();
    polygon.add_point(0., 0.).unwrap();
    polygon.add_point(1., 0.).unwrap();
    assert!(polygon.finish().is_err());
    polygon.add_point(1., 1.).unwrap();
    polygon.finish().unwrap();
    assert!(polygon.start_ring().is_err());
}

#[test]
fn truncated_point() {
    let buf = Point::new(1., 2.).to_wkb();
    let err = decode_point(&buf[..20]).unwrap_err();
    assert_eq!(err.code(), ErrorCode::LibNotEnoughData);
}

#[cfg(feature = "wkt")]
#[test]
fn wkt_round_trip() {
    let polygon = Polygon::from_wkt("POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))").unwrap();
    assert_eq!(polygon.to_string(), "POLYGON ((0 0, 4 0, 4 4, 0 4, 0 0))");

    let line_string = LineString::from_wkt("LINESTRING (0 1, 1 2)").unwrap();
    assert_eq!(line_string.to_string(), "LINESTRING (0 1, 1 2)");
}
