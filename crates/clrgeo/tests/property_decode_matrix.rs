//! Property checks: arbitrary input never panics, decoding is deterministic,
//! and generated multipoints keep their shape counts.

mod common;

use clrgeo::{decode, read_geography, read_geometry, DecodeError, DecodeOptions};
use common::Fixture;
use proptest::prelude::*;

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        for options in [
            DecodeOptions::geography(),
            DecodeOptions::geometry(),
            DecodeOptions::geometry_with_srid().with_trailing_bytes(true),
        ] {
            let first = decode(&data, &options);
            let second = decode(&data, &options);
            // NaN ordinates defeat PartialEq, Debug output does not
            prop_assert_eq!(format!("{:?}", first), format!("{:?}", second));
        }
    }

    #[test]
    fn version_outside_basic_and_extended(version in any::<u8>().prop_filter("unknown", |v| *v != 1 && *v != 2), flags in any::<u8>()) {
        let data = Fixture::without_srid(version, flags).build();
        prop_assert_eq!(read_geometry(&data), Err(DecodeError::UnsupportedVersion(version)));
    }

    #[test]
    fn both_shortcuts_always_malformed(version in 1u8..=2, other in any::<u8>()) {
        let flags = other | 0x18;
        let data = Fixture::without_srid(version, flags).build();
        prop_assert_eq!(read_geometry(&data), Err(DecodeError::MalformedFlags(flags)));
    }

    #[test]
    fn multipoint_shape_count(parts in proptest::collection::vec((-180.0f64..=180.0, -90.0f64..=90.0), 1..20)) {
        let figures: Vec<(u8, u32)> = (0..parts.len() as u32).map(|i| (1, i)).collect();
        let mut shapes = vec![(-1, 0, 4)];
        shapes.extend((0..parts.len() as i32).map(|i| (0, i, 1)));
        let data = Fixture::with_srid(4326, 1, 0x04)
            .points(&parts)
            .figures(&figures)
            .shapes(&shapes)
            .build();
        let value = read_geography(&data).unwrap();
        prop_assert_eq!(value.points.len(), parts.len());
        prop_assert_eq!(value.shapes.len(), parts.len() + 1);
        prop_assert_eq!(value.shape_children(0).count(), parts.len());
    }

    #[test]
    fn single_point_in_range(x in -180.0f64..=180.0, y in -90.0f64..=90.0) {
        let data = Fixture::with_srid(4326, 1, 0x0C).f64(x).f64(y).build();
        let value = read_geography(&data).unwrap();
        prop_assert_eq!(value.points.len(), 1);
        prop_assert_eq!(value.shapes.len(), 1);
    }
}
