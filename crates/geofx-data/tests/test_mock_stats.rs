//! Seeded mock statistics: static tables, generated ranges and stability.

use geofx_data::{MockDataSource, Origin, RegionLevel};
use pretty_assertions::assert_eq;

const UNKNOWN: [&str; 6] = ["拉萨市", "海口市", "银川市", "某某区", "阿里地区", "三沙市"];

fn number_before(text: &str, unit: &str) -> f64 {
    text.strip_suffix(unit)
        .and_then(|n| n.parse::<f64>().ok())
        .unwrap_or_else(|| panic!("'{}' does not end with a number and '{}'", text, unit))
}

#[test]
fn test_same_seed_same_values_any_order() {
    let a = MockDataSource::new(2024);
    let b = MockDataSource::new(2024);

    let forward: Vec<_> = UNKNOWN.iter().map(|n| a.region_stats(n, RegionLevel::City)).collect();
    let mut backward: Vec<_> = UNKNOWN
        .iter()
        .rev()
        .map(|n| b.region_stats(n, RegionLevel::City))
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn test_different_seeds_differ() {
    let a = MockDataSource::new(1);
    let b = MockDataSource::new(2);
    let differs = UNKNOWN
        .iter()
        .any(|n| a.region_stats(n, RegionLevel::Province) != b.region_stats(n, RegionLevel::Province));
    assert!(differs);
}

#[test]
fn test_generated_province_ranges() {
    let data = MockDataSource::new(7);
    for seed_name in UNKNOWN {
        let stats = data.region_stats(seed_name, RegionLevel::Province);
        assert_eq!(stats.origin, Origin::Generated);

        let gdp = number_before(&stats.gdp, "万亿");
        assert!((0.5..=5.5).contains(&gdp), "gdp {}", stats.gdp);
        let population = number_before(&stats.population, "万");
        assert!((500.0..=5500.0).contains(&population));

        let growth = number_before(stats.growth.trim_start_matches('+'), "%");
        assert!((1.0..=9.0).contains(&growth));
        let temperature = number_before(&stats.temperature, "°C");
        assert!((5.0..35.0).contains(&temperature));

        let (label, aqi) = stats.aqi.split_once(' ').unwrap();
        let aqi: u32 = aqi.parse().unwrap();
        assert!((30..130).contains(&aqi));
        assert_eq!(label, geofx_data::aqi_label(aqi));
    }
}

#[test]
fn test_generated_city_and_district_units() {
    let data = MockDataSource::new(7);
    for name in UNKNOWN {
        let city = data.region_stats(name, RegionLevel::City);
        let gdp = number_before(&city.gdp, "亿");
        assert!((100.0..=600.0).contains(&gdp), "city gdp {}", city.gdp);

        let district = data.region_stats(name, RegionLevel::District);
        let gdp = number_before(&district.gdp, "亿");
        assert!((1.0..=6.0).contains(&gdp), "district gdp {}", district.gdp);
        let population = number_before(&district.population, "万");
        assert!((10.0..=60.0).contains(&population));
    }
}

#[test]
fn test_static_city_table() {
    let data = MockDataSource::new(0);
    let shenzhen = data.region_stats("深圳市", RegionLevel::City);
    assert_eq!(shenzhen.gdp, "3.24万亿");
    assert_eq!(shenzhen.population, "1768万");
    assert_eq!(shenzhen.growth, "+6.0%");
    assert_eq!(shenzhen.origin, Origin::Static);
    // Static names match exactly at region level.
    assert_eq!(data.region_stats("深圳", RegionLevel::City).origin, Origin::Generated);
}

#[test]
fn test_bar_data_json_shape() {
    let bar = MockDataSource::new(0).bar_data("杭州");
    let json = serde_json::to_value(&bar).unwrap();
    assert_eq!(json["value"], 82);
    assert_eq!(json["color"], 0x00AAFF);
    assert_eq!(json["origin"], "static");
}
