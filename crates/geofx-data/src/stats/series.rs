//! Chart series of the dashboard side panels.
//!
//! These are fixed tables; no seed is involved.

use serde::Serialize;

use super::tables::{CATEGORIES, PERFORMANCE, REALTIME, SALES, TRAFFIC};
use crate::geometry::{MapProjection, Position};

/// A labelled value of a bar or pie chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedValue {
    pub name: &'static str,
    pub value: u32,
}

/// Sales of one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlySales {
    pub month: &'static str,
    pub value: u32,
}

/// Visits at one time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrafficSample {
    pub time: &'static str,
    /// Page views.
    pub pv: u32,
    /// Unique visitors.
    pub uv: u32,
}

/// A scored point on the national map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerformancePoint {
    pub name: &'static str,
    /// `[longitude, latitude]`
    pub position: Position,
    /// Score out of 100.
    pub score: u32,
}

impl PerformancePoint {
    /// Map-local coordinates of the point.
    pub fn local(&self, projection: &MapProjection) -> [f64; 2] {
        projection.project(self.position)
    }
}

/// Sales per month, January first.
pub fn monthly_sales() -> impl Iterator<Item = MonthlySales> {
    SALES
        .iter()
        .map(|&(month, value)| MonthlySales { month, value })
}

/// Sales per product category.
pub fn category_sales() -> impl Iterator<Item = NamedValue> {
    named(CATEGORIES)
}

/// Visits per traffic channel, largest first.
pub fn traffic_sources() -> impl Iterator<Item = NamedValue> {
    named(TRAFFIC)
}

/// Page views and unique visitors over a day.
pub fn realtime_traffic() -> impl Iterator<Item = TrafficSample> {
    REALTIME
        .iter()
        .map(|&(time, pv, uv)| TrafficSample { time, pv, uv })
}

/// Per-province scores placed at the provincial capitals.
pub fn performance_points() -> impl Iterator<Item = PerformancePoint> {
    PERFORMANCE
        .iter()
        .map(|&(name, position, score)| PerformancePoint {
            name,
            position,
            score,
        })
}

fn named(table: &'static [(&'static str, u32)]) -> impl Iterator<Item = NamedValue> {
    table.iter().map(|&(name, value)| NamedValue { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::province_summaries;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_monthly_sales() {
        let sales: Vec<_> = monthly_sales().collect();
        assert_eq!(sales.len(), 12);
        assert_eq!(sales[0], MonthlySales { month: "1月", value: 820 });
        assert_eq!(sales[11].value, 1600);
        assert_eq!(sales.iter().map(|s| s.value).sum::<u32>(), 14327);
    }

    #[test]
    fn test_categories_and_channels() {
        let categories: Vec<_> = category_sales().collect();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0], NamedValue { name: "电子产品", value: 335 });

        let channels: Vec<_> = traffic_sources().collect();
        assert_eq!(channels.len(), 5);
        assert!(channels.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn test_realtime_every_two_hours() {
        let samples: Vec<_> = realtime_traffic().collect();
        assert_eq!(samples.len(), 12);
        for (i, sample) in samples.iter().enumerate() {
            assert_eq!(sample.time, format!("{:02}:00", i * 2));
            assert!(sample.uv <= sample.pv);
        }
    }

    #[test]
    fn test_performance_covers_every_province() {
        let points: Vec<_> = performance_points().collect();
        assert_eq!(points.len(), 31);
        for summary in province_summaries() {
            assert!(
                points.iter().any(|p| p.name == summary.name),
                "no score for {}",
                summary.name
            );
        }
        assert!(points.iter().all(|p| p.score <= 100));
    }

    #[test]
    fn test_performance_projects_to_map() {
        let beijing = performance_points().find(|p| p.name == "北京").unwrap();
        assert_eq!(beijing.score, 95);
        let local = beijing.local(&MapProjection::default());
        assert!((local[0] - 12.46).abs() < 1e-9);
        assert!((local[1] - 3.92).abs() < 1e-9);

        let urumqi = performance_points().find(|p| p.name == "新疆").unwrap();
        let scaled = urumqi.local(&MapProjection::new(MapProjection::CHINA_CENTER, 2.0));
        assert!((scaled[0] - (-32.64)).abs() < 1e-9);
    }
}
