//! Spatial reference catalog and coordinate bounds for geography.

use std::ops::RangeInclusive;

/// SRIDs the engine accepts for geography, as listed by its
/// `sys.spatial_reference_systems` view. Geocentric systems and the
/// projected codes between the geographic blocks are absent.
pub const GEOGRAPHY_SRIDS: &[RangeInclusive<i32>] = &[
    4120..=4124,
    4127..=4139,
    4141..=4171,
    4173..=4176,
    4178..=4184,
    4188..=4216,
    4218..=4225,
    4227..=4227,
    4229..=4232,
    4236..=4259,
    4261..=4263,
    4265..=4286,
    4288..=4289,
    4292..=4293,
    4295..=4295,
    4297..=4304,
    4306..=4319,
    4322..=4322,
    4324..=4324,
    4326..=4326,
    4600..=4633,
    4636..=4644,
    4646..=4646,
    4657..=4680,
    4682..=4684,
    4686..=4758,
    4801..=4811,
    4813..=4818,
    4820..=4821,
    4895..=4895,
    4898..=4898,
    4900..=4904,
    4907..=4907,
    4909..=4909,
    // geographic 3D systems take the odd codes, geocentric the even ones
    4921..=4921,
    4923..=4923,
    4925..=4925,
    4927..=4927,
    4929..=4929,
    4931..=4931,
    4933..=4933,
    4935..=4935,
    4937..=4937,
    4939..=4939,
    4941..=4941,
    4943..=4943,
    4945..=4945,
    4947..=4947,
    4949..=4949,
    4951..=4951,
    4953..=4953,
    4955..=4955,
    4957..=4957,
    4959..=4959,
    4961..=4961,
    4963..=4963,
    4965..=4965,
    4967..=4967,
    4971..=4971,
    4973..=4973,
    4975..=4975,
    4977..=4977,
    4979..=4979,
    4981..=4981,
    4983..=4983,
    4985..=4985,
    4987..=4987,
    4989..=4989,
    4991..=4991,
    4993..=4993,
    4995..=4995,
    4997..=4997,
    4999..=4999,
    // unit sphere
    104001..=104001,
];

pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

pub fn is_geography_srid(srid: i32) -> bool {
    GEOGRAPHY_SRIDS.iter().any(|range| range.contains(&srid))
}
