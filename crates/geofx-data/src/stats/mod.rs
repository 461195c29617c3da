//! Mock statistics for the dashboard's bars and info cards.
//!
//! Known regions come from static tables. Every other name gets generated
//! values from a seeded generator: the same seed and name always give the
//! same numbers, independent of query order. The side-panel chart series
//! live in [`series`].

pub mod series;
mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::DeterministicRng;
pub use series::{
    category_sales, monthly_sales, performance_points, realtime_traffic, traffic_sources,
    MonthlySales, NamedValue, PerformancePoint, TrafficSample,
};
use tables::{StatsRow, BARS, BAR_PALETTE, CITIES, DISTRICTS, INDUSTRIES, PROVINCES, PROVINCE_SUMMARIES};

/// Administrative level the map is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionLevel {
    /// The national map; regions are provinces.
    Nation,
    Province,
    City,
    District,
}

impl RegionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionLevel::Nation => "nation",
            RegionLevel::Province => "province",
            RegionLevel::City => "city",
            RegionLevel::District => "district",
        }
    }

    /// The statistics table a level reads. The national map lists provinces.
    fn table(&self) -> (&'static str, &'static [StatsRow]) {
        match self {
            RegionLevel::Nation | RegionLevel::Province => ("province", PROVINCES),
            RegionLevel::City => ("city", CITIES),
            RegionLevel::District => ("district", DISTRICTS),
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The level name does not match any region level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region level '{0}' (expected nation, province, city or district)")]
pub struct UnknownRegionLevel(pub String);

impl FromStr for RegionLevel {
    type Err = UnknownRegionLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nation" => Ok(RegionLevel::Nation),
            "province" => Ok(RegionLevel::Province),
            "city" => Ok(RegionLevel::City),
            "district" => Ok(RegionLevel::District),
            other => Err(UnknownRegionLevel(other.to_string())),
        }
    }
}

/// Where a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Static,
    Generated,
}

/// Height and color of a region's data bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarDatum {
    /// Bar value, 0 to 100.
    pub value: u32,
    /// Packed `0xRRGGBB` color.
    pub color: u32,
    pub origin: Origin,
}

impl BarDatum {
    /// The color as `#rrggbb`.
    pub fn hex_color(&self) -> String {
        format!("#{:06x}", self.color & 0xFF_FFFF)
    }
}

/// Display statistics of one region, formatted the way the info card shows them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStats {
    pub gdp: String,
    pub population: String,
    pub growth: String,
    pub industry: String,
    pub temperature: String,
    pub aqi: String,
    pub origin: Origin,
}

impl RegionStats {
    fn from_row(row: &StatsRow) -> Self {
        let (_, gdp, population, growth, industry, temperature, aqi) = *row;
        Self {
            gdp: gdp.to_string(),
            population: population.to_string(),
            growth: growth.to_string(),
            industry: industry.to_string(),
            temperature: temperature.to_string(),
            aqi: aqi.to_string(),
            origin: Origin::Static,
        }
    }
}

/// One province of the national overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProvinceSummary {
    pub name: &'static str,
    pub value: u32,
    pub code: &'static str,
}

/// The national overview, in table order.
pub fn province_summaries() -> impl Iterator<Item = ProvinceSummary> {
    PROVINCE_SUMMARIES
        .iter()
        .map(|&(name, value, code)| ProvinceSummary { name, value, code })
}

/// Air quality label for an AQI value.
pub fn aqi_label(aqi: u32) -> &'static str {
    if aqi < 50 {
        "优"
    } else if aqi < 100 {
        "良"
    } else {
        "轻度污染"
    }
}

/// Seeded source of mock statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockDataSource {
    seed: u32,
}

impl MockDataSource {
    pub fn new(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Bar for a region.
    ///
    /// Names match a static entry when either contains the other, so "北京"
    /// finds "北京市". Empty names never match.
    pub fn bar_data(&self, name: &str) -> BarDatum {
        let name = name.trim();
        let known = BARS
            .iter()
            .find(|(key, _, _)| !name.is_empty() && (key.contains(name) || name.contains(key)));
        if let Some(&(_, value, color)) = known {
            return BarDatum {
                value,
                color,
                origin: Origin::Static,
            };
        }

        let mut rng = DeterministicRng::for_name(self.seed, "bar", name);
        let value = rng.gen_range(20..80);
        let color = BAR_PALETTE[rng.gen_range(0..BAR_PALETTE.len())];
        BarDatum {
            value,
            color,
            origin: Origin::Generated,
        }
    }

    /// Statistics for a region at a map level. Static names match exactly.
    pub fn region_stats(&self, name: &str, level: RegionLevel) -> RegionStats {
        let (scope, table) = level.table();
        match table.iter().find(|row| row.0 == name) {
            Some(row) => RegionStats::from_row(row),
            None => self.generate_stats(scope, name, level),
        }
    }

    fn generate_stats(&self, scope: &str, name: &str, level: RegionLevel) -> RegionStats {
        let mut rng = DeterministicRng::for_name(self.seed, scope, name);

        let (gdp, population) = match level {
            RegionLevel::Nation | RegionLevel::Province => {
                let gdp = rng.gen_f64() * 5.0 + 0.5;
                let population = rng.gen_f64() * 5000.0 + 500.0;
                (format!("{:.2}万亿", gdp), population)
            }
            RegionLevel::City => {
                let gdp = rng.gen_f64() * 0.5 + 0.1;
                let population = rng.gen_f64() * 500.0 + 50.0;
                (format!("{:.0}亿", gdp * 1000.0), population)
            }
            RegionLevel::District => {
                let gdp = rng.gen_f64() * 0.05 + 0.01;
                let population = rng.gen_f64() * 50.0 + 10.0;
                (format!("{:.0}亿", gdp * 100.0), population)
            }
        };
        let growth = rng.gen_f64() * 8.0 + 1.0;
        let temperature = (rng.gen_f64() * 30.0 + 5.0).floor() as i32;
        let aqi = (rng.gen_f64() * 100.0 + 30.0).floor() as u32;
        let industry = INDUSTRIES[rng.gen_range(0..INDUSTRIES.len())];

        RegionStats {
            gdp,
            population: format!("{:.0}万", population),
            growth: format!("+{:.1}%", growth),
            industry: industry.to_string(),
            temperature: format!("{}°C", temperature),
            aqi: format!("{} {}", aqi_label(aqi), aqi),
            origin: Origin::Generated,
        }
    }
}
