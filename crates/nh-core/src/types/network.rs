use serde::{Deserialize, Serialize};

use super::{lenient, RemoteLocation};

/// Fixed CSV column order for the network hierarchy
pub const COLUMNS: [&str; 8] = [
    "id",
    "group",
    "name",
    "cidr",
    "description",
    "domain_id",
    "location",
    "country_code",
];

/// Placeholder written for absent values, and read back as "absent"
pub const NOT_AVAILABLE: &str = "N/A";

/// A network segment as returned by the hierarchy endpoint
///
/// Every field is optional and decoded leniently: a missing value or one of
/// the wrong type becomes `None` instead of failing the record, and the
/// export fills the gap with [`NOT_AVAILABLE`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteNetwork {
    /// Remote-assigned identifier
    #[serde(default, deserialize_with = "lenient::int")]
    pub id: Option<i64>,

    /// Group path, e.g. `NetworkA.Servers`
    #[serde(default, deserialize_with = "lenient::text")]
    pub group: Option<String>,

    /// Network name
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,

    /// IPv4 CIDR block
    #[serde(default, deserialize_with = "lenient::text")]
    pub cidr: Option<String>,

    /// Free-text description
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,

    /// Owning domain
    #[serde(default, deserialize_with = "lenient::int")]
    pub domain_id: Option<i64>,

    /// Point location, longitude first
    #[serde(default, deserialize_with = "lenient::location")]
    pub location: Option<RemoteLocation>,

    /// Two-letter country code
    #[serde(default, deserialize_with = "lenient::text")]
    pub country_code: Option<String>,
}

/// A network segment as sent to the staged-networks endpoint
///
/// Fields that failed validation on import are `None` and left out of the
/// JSON body entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagedNetwork {
    /// Remote-assigned identifier
    pub id: i64,

    /// Free-text description
    pub description: String,

    /// Owning domain
    pub domain_id: i64,

    /// Network name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// IPv4 CIDR block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,

    /// Group path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    /// Point location, longitude first
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<RemoteLocation>,

    /// Two-letter country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

impl StagedNetwork {
    /// Create a record carrying only the mandatory fields
    #[must_use]
    pub fn new(id: i64, description: impl Into<String>, domain_id: i64) -> Self {
        Self {
            id,
            description: description.into(),
            domain_id,
            name: None,
            cidr: None,
            group: None,
            location: None,
            country_code: None,
        }
    }
}

/// One CSV row, columns in [`COLUMNS`] order, values as raw strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularRow {
    pub id: String,
    pub group: String,
    pub name: String,
    pub cidr: String,
    pub description: String,
    pub domain_id: String,
    pub location: String,
    pub country_code: String,
}

impl TabularRow {
    /// Values in column order, ready for a CSV writer
    #[must_use]
    pub fn fields(&self) -> [&str; 8] {
        [
            self.id.as_str(),
            self.group.as_str(),
            self.name.as_str(),
            self.cidr.as_str(),
            self.description.as_str(),
            self.domain_id.as_str(),
            self.location.as_str(),
            self.country_code.as_str(),
        ]
    }

    /// Returns true if `header` is exactly the fixed column order
    #[must_use]
    pub fn header_matches<S: AsRef<str>>(header: &[S]) -> bool {
        header.len() == COLUMNS.len()
            && header
                .iter()
                .zip(COLUMNS.iter())
                .all(|(got, want)| got.as_ref() == *want)
    }
}
