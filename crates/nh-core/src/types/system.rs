use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{NhError, Result};

/// System metadata from `/api/system/about`
///
/// All four fields are required; see [`SystemInfo::from_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Release name, e.g. `7.5.0 UpdatePackage 6`
    pub release_name: String,

    /// Build version, e.g. `2021.6.6.20230519190832`
    pub build_version: String,

    /// Whether the appliance runs in FIPS mode
    pub fips_enabled: bool,

    /// External version, e.g. `7.5.0`
    pub external_version: String,
}

impl SystemInfo {
    /// Extract the four fields from a raw response body
    ///
    /// A missing field is reported by name as [`NhError::MissingField`]
    /// rather than defaulted.
    pub fn from_value(value: &Value) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| NhError::UnexpectedFormat(value.to_string()))?;

        let text = |key: &'static str| -> Result<String> {
            match obj.get(key) {
                Some(Value::String(s)) => Ok(s.clone()),
                Some(Value::Null) | None => Err(NhError::MissingField(key)),
                Some(other) => Ok(other.to_string()),
            }
        };

        let fips_enabled = match obj.get("fips_enabled") {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
            Some(Value::Null) | None => return Err(NhError::MissingField("fips_enabled")),
            Some(other) => {
                return Err(NhError::UnexpectedFormat(format!(
                    "fips_enabled is not a boolean: {other}"
                )))
            }
        };

        Ok(Self {
            release_name: text("release_name")?,
            build_version: text("build_version")?,
            fips_enabled,
            external_version: text("external_version")?,
        })
    }
}
