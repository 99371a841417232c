//! Custom type identifiers registered by DSE for its geospatial and date range columns.
//!
//! A custom-typed value travels as an opaque buffer; the server picks the codec from the
//! fully-qualified class name, so these strings must match it byte for byte.

/// Class name of the point custom type.
pub const DSE_POINT_TYPE: &str = "org.apache.cassandra.db.marshal.PointType";

/// Class name of the line string custom type.
pub const DSE_LINE_STRING_TYPE: &str = "org.apache.cassandra.db.marshal.LineStringType";

/// Class name of the polygon custom type.
pub const DSE_POLYGON_TYPE: &str = "org.apache.cassandra.db.marshal.PolygonType";

/// Class name of the date range custom type.
pub const DSE_DATE_RANGE_TYPE: &str = "org.apache.cassandra.db.marshal.DateRangeType";

/// The DSE custom types known to this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DseType {
    Point,
    LineString,
    Polygon,
    DateRange,
}

impl DseType {
    /// The server class name of this type.
    pub const fn class_name(&self) -> &'static str {
        match self {
            DseType::Point => DSE_POINT_TYPE,
            DseType::LineString => DSE_LINE_STRING_TYPE,
            DseType::Polygon => DSE_POLYGON_TYPE,
            DseType::DateRange => DSE_DATE_RANGE_TYPE,
        }
    }

    /// Look up a type by its server class name.
    pub fn from_class_name(class_name: &str) -> Option<Self> {
        match class_name {
            DSE_POINT_TYPE => Some(DseType::Point),
            DSE_LINE_STRING_TYPE => Some(DseType::LineString),
            DSE_POLYGON_TYPE => Some(DseType::Polygon),
            DSE_DATE_RANGE_TYPE => Some(DseType::DateRange),
            _ => None,
        }
    }
}

impl AsRef<str> for DseType {
    fn as_ref(&self) -> &str {
        self.class_name()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn class_names_round_trip() {
        for ty in [
            DseType::Point,
            DseType::LineString,
            DseType::Polygon,
            DseType::DateRange,
        ] {
            assert_eq!(DseType::from_class_name(ty.class_name()), Some(ty));
        }
        assert_eq!(DseType::from_class_name("PointType"), None);
    }

    #[test]
    fn class_name_lengths() {
        assert_eq!(DSE_POINT_TYPE.len(), 41);
        assert_eq!(DSE_LINE_STRING_TYPE.len(), 46);
        assert_eq!(DSE_POLYGON_TYPE.len(), 43);
        assert_eq!(DSE_DATE_RANGE_TYPE.len(), 45);
    }
}
