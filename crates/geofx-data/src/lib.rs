//! geofx dashboard data collaborators
//!
//! The shading engine never reads these; the dashboard uses them to decide
//! what to draw and with which base tint.
//!
//! - [`stats`]: seeded mock statistics for data bars and region info cards,
//!   plus the fixed chart series of the side panels
//! - [`geometry`]: GeoJSON region outlines, ordered sources and the map projection
//!
//! # Example
//!
//! ```
//! use geofx_data::{MockDataSource, RegionLevel};
//!
//! let data = MockDataSource::new(42);
//! assert_eq!(data.bar_data("北京").value, 100);
//! assert_eq!(data.region_stats("广东省", RegionLevel::Province).gdp, "12.91万亿");
//! // Unknown names are generated, and stable for a given seed.
//! assert_eq!(data.bar_data("拉萨市"), MockDataSource::new(42).bar_data("拉萨市"));
//! ```

pub mod error;
pub mod geometry;
pub mod rng;
pub mod stats;

pub use error::SourceError;
pub use geometry::{
    Adcode, Bounds, ChainError, DirectorySource, EmbeddedSource, Feature, FeatureCollection,
    FeatureProperties, Geometry, GeometrySource, HttpSource, Loaded, MapProjection, SourceChain,
};
pub use rng::DeterministicRng;
pub use stats::{
    aqi_label, category_sales, monthly_sales, performance_points, province_summaries,
    realtime_traffic, traffic_sources, BarDatum, MockDataSource, MonthlySales, NamedValue,
    Origin, PerformancePoint, ProvinceSummary, RegionLevel, RegionStats, TrafficSample,
    UnknownRegionLevel,
};
