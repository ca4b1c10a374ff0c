use serde::{Deserialize, Serialize};

use crate::validate;

/// GeoJSON type tag used by the API for point locations
pub const POINT_TYPE: &str = "Point";

/// A geographic point, independent of any axis-order convention.
///
/// The API orders coordinates longitude first (`[lon, lat]`) while the CSV
/// column is written latitude first (`"lat,lon"`). Conversions in both
/// directions go through this type so the swap happens in exactly one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, within [-90, 90]
    pub latitude: f64,

    /// Longitude in degrees, within [-180, 180]
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a point, rejecting out-of-range coordinates
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude) {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    /// Parse the tabular `"lat,lon"` form
    #[must_use]
    pub fn parse_tabular(s: &str) -> Option<Self> {
        let (lat, lon) = validate::parse_lat_lon(s)?;
        Self::new(lat, lon)
    }

    /// Render the tabular `"lat,lon"` form
    #[must_use]
    pub fn to_tabular(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Build a point from the API representation (`[lon, lat]`)
    ///
    /// Returns `None` unless the location is a `Point` with exactly two
    /// coordinates.
    #[must_use]
    pub fn from_remote(location: &RemoteLocation) -> Option<Self> {
        if location.kind != POINT_TYPE {
            return None;
        }
        match location.coordinates.as_slice() {
            [lon, lat] => Some(Self {
                latitude: *lat,
                longitude: *lon,
            }),
            _ => None,
        }
    }

    /// Convert to the API representation (`[lon, lat]`)
    #[must_use]
    pub fn to_remote(&self) -> RemoteLocation {
        RemoteLocation {
            kind: POINT_TYPE.to_string(),
            coordinates: vec![self.longitude, self.latitude],
        }
    }
}

/// Location as carried by the API: `{"type": "Point", "coordinates": [lon, lat]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteLocation {
    /// Geometry type, `Point` for every location the API hands out
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Coordinates, longitude first
    #[serde(default)]
    pub coordinates: Vec<f64>,
}
