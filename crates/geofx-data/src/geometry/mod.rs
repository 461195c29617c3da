//! Region outlines as GeoJSON, and the map projection the shading engine reads.
//!
//! Only the subset the dashboard needs is modeled: a feature collection of
//! polygon or multi-polygon features with a name, an administrative code and
//! an optional label center.

mod source;

pub use source::{
    ChainError, DirectorySource, EmbeddedSource, GeometrySource, HttpSource, Loaded, SourceChain,
};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A `[longitude, latitude]` pair in degrees.
pub type Position = [f64; 2];

/// A polygon: an outer ring followed by holes.
pub type PolygonRings = Vec<Vec<Position>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollectionKind {
    FeatureCollection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeatureKind {
    Feature,
}

/// A GeoJSON feature collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: CollectionKind,
    pub features: Vec<Feature>,
}

/// One region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub properties: FeatureProperties,
    /// Some boundary-only features carry no geometry.
    pub geometry: Option<Geometry>,
}

/// Administrative code: numeric for regions, a text label for decorations
/// such as boundary lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Adcode {
    Code(u32),
    Label(String),
}

impl fmt::Display for Adcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Adcode::Code(code) => write!(f, "{}", code),
            Adcode::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adcode: Option<Adcode>,
    /// Label anchor, `[lon, lat]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Position>,
    /// Every other property, kept as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Polygon geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Polygon(PolygonRings),
    MultiPolygon(Vec<PolygonRings>),
}

impl Geometry {
    /// Every position of every ring.
    pub fn positions(&self) -> Box<dyn Iterator<Item = Position> + '_> {
        match self {
            Geometry::Polygon(rings) => Box::new(rings.iter().flatten().copied()),
            Geometry::MultiPolygon(polygons) => {
                Box::new(polygons.iter().flatten().flatten().copied())
            }
        }
    }

    /// Number of polygons.
    pub fn polygon_count(&self) -> usize {
        match self {
            Geometry::Polygon(_) => 1,
            Geometry::MultiPolygon(polygons) => polygons.len(),
        }
    }
}

/// An axis-aligned rectangle `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Bounds {
    fn around(point: [f64; 2]) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    fn include(&mut self, point: [f64; 2]) {
        self.min = [self.min[0].min(point[0]), self.min[1].min(point[1])];
        self.max = [self.max[0].max(point[0]), self.max[1].max(point[1])];
    }
}

/// Converts longitude/latitude into map-local coordinates.
///
/// Map-local coordinates are degree offsets from a reference point, scaled.
/// The region masks of the terrain colorizer are defined in these units
/// around the default reference point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    pub center: Position,
    pub scale: f64,
}

impl MapProjection {
    /// Reference point of the national map.
    pub const CHINA_CENTER: Position = [104.0, 36.0];

    pub fn new(center: Position, scale: f64) -> Self {
        Self { center, scale }
    }

    #[inline]
    pub fn project(&self, position: Position) -> [f64; 2] {
        [
            (position[0] - self.center[0]) * self.scale,
            (position[1] - self.center[1]) * self.scale,
        ]
    }
}

impl Default for MapProjection {
    fn default() -> Self {
        Self::new(Self::CHINA_CENTER, 1.0)
    }
}

impl FeatureCollection {
    /// Parse a collection from GeoJSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Feature with the given name.
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.properties.name == name)
    }

    /// Bounds of every position after projection, or `None` without geometry.
    pub fn local_bounds(&self, projection: &MapProjection) -> Option<Bounds> {
        let mut points = self
            .features
            .iter()
            .filter_map(|f| f.geometry.as_ref())
            .flat_map(|g| g.positions())
            .map(|p| projection.project(p));

        let mut bounds = Bounds::around(points.next()?);
        for point in points {
            bounds.include(point);
        }
        Some(bounds)
    }
}
