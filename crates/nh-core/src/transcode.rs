//! Mapping between the API record shapes and the flat CSV row.
//!
//! Export goes [`RemoteNetwork`] → [`TabularRow`]; import goes
//! [`TabularRow`] → [`StagedNetwork`]. Locations are swapped between
//! `"lat,lon"` and `[lon, lat]` on the way through [`GeoPoint`].

use crate::validate;
use crate::{GeoPoint, RemoteNetwork, StagedNetwork, TabularRow, NOT_AVAILABLE};

/// Column whose value was dropped during import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Cidr,
    Group,
    Location,
    CountryCode,
}

impl Field {
    /// CSV column name
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Cidr => "cidr",
            Self::Group => "group",
            Self::Location => "location",
            Self::CountryCode => "country_code",
        }
    }

    /// What a valid value looks like
    #[must_use]
    pub const fn rule(self) -> &'static str {
        match self {
            Self::Name => "a network name may only contain letters, numbers, '-', or '_'",
            Self::Cidr => "expected an IPv4 network such as 10.0.0.0/24",
            Self::Group => "a group name may only contain letters, numbers, '.', '-', or '_'",
            Self::Location => "expected latitude,longitude within [-90,90] and [-180,180]",
            Self::CountryCode => "expected two uppercase letters",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// A field dropped from an otherwise accepted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    /// Value of the row's `id` column
    pub id: i64,
    /// Which field was dropped
    pub field: Field,
    /// The rejected value, as read
    pub value: String,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid {} {:?} for id {} ({}), import continues without it",
            self.field,
            self.value,
            self.id,
            self.field.rule()
        )
    }
}

/// A row that cannot be imported at all
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {column} {value:?}: expected an integer")]
pub struct RowError {
    /// Mandatory column that failed to parse
    pub column: &'static str,
    /// The offending value
    pub value: String,
}

/// Result of converting one CSV row
#[derive(Debug, Clone, PartialEq)]
pub struct Transcoded {
    /// Record to stage, invalid optional fields omitted
    pub network: StagedNetwork,
    /// One entry per dropped field
    pub issues: Vec<FieldIssue>,
}

/// Render a remote record in fixed column order, `N/A` for anything absent
#[must_use]
pub fn to_tabular_row(network: &RemoteNetwork) -> TabularRow {
    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let number = |v: Option<i64>| v.map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string());

    TabularRow {
        id: number(network.id),
        group: text(&network.group),
        name: text(&network.name),
        cidr: text(&network.cidr),
        description: text(&network.description),
        domain_id: number(network.domain_id),
        location: network
            .location
            .as_ref()
            .and_then(GeoPoint::from_remote)
            .map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.to_tabular()),
        country_code: text(&network.country_code),
    }
}

/// Convert a CSV row into a record for the staged write
///
/// `id` and `domain_id` must be integers or the whole row is rejected.
/// `name`, `cidr` and `group` are checked as read; `location` and
/// `country_code` are trimmed first and treated as absent when empty or
/// `N/A`. Any of these five failing its check is dropped and reported in
/// [`Transcoded::issues`].
pub fn from_tabular_row(row: &TabularRow) -> Result<Transcoded, RowError> {
    let id = parse_int("id", &row.id)?;
    let domain_id = parse_int("domain_id", &row.domain_id)?;

    let mut network = StagedNetwork::new(id, row.description.clone(), domain_id);
    let mut issues = Vec::new();
    let mut reject = |field: Field, value: &str| {
        issues.push(FieldIssue {
            id,
            field,
            value: value.to_string(),
        });
    };

    if validate::valid_network_name_format(&row.name) {
        network.name = Some(row.name.trim().to_string());
    } else {
        reject(Field::Name, &row.name);
    }

    if validate::valid_cidr_format(&row.cidr) {
        network.cidr = Some(row.cidr.trim().to_string());
    } else {
        reject(Field::Cidr, &row.cidr);
    }

    if validate::valid_group_format(&row.group) {
        network.group = Some(row.group.trim().to_string());
    } else {
        reject(Field::Group, &row.group);
    }

    if let Some(location) = present(&row.location) {
        match GeoPoint::parse_tabular(location) {
            Some(point) => network.location = Some(point.to_remote()),
            None => reject(Field::Location, location),
        }
    }

    if let Some(code) = present(&row.country_code) {
        if validate::valid_country_code_format(code) {
            network.country_code = Some(code.to_string());
        } else {
            reject(Field::CountryCode, code);
        }
    }

    Ok(Transcoded { network, issues })
}

fn parse_int(column: &'static str, value: &str) -> Result<i64, RowError> {
    value.trim().parse().map_err(|_| RowError {
        column,
        value: value.to_string(),
    })
}

/// Trimmed value, or `None` for empty and `N/A`
fn present(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty() && value != NOT_AVAILABLE).then_some(value)
}
