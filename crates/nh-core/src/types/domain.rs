use serde::{Deserialize, Serialize};

use super::NOT_AVAILABLE;

/// Reserved display name for domain id 0
pub const DEFAULT_DOMAIN_NAME: &str = "DEFAULT_DOMAIN";

/// A domain as returned by the domain management endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Domain {
    /// Domain identifier, 0 is the default partition
    #[serde(default)]
    pub id: Option<i64>,

    /// Domain name
    #[serde(default)]
    pub name: Option<String>,

    /// Domain description
    #[serde(default)]
    pub description: Option<String>,
}

impl Domain {
    /// Name to display; domain 0 is always [`DEFAULT_DOMAIN_NAME`]
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.id == Some(0) {
            return DEFAULT_DOMAIN_NAME;
        }
        non_empty_or_na(self.name.as_deref())
    }

    /// Description to display, `N/A` when missing or empty
    #[must_use]
    pub fn display_description(&self) -> &str {
        non_empty_or_na(self.description.as_deref())
    }

    /// Identifier to display, `N/A` when missing
    #[must_use]
    pub fn display_id(&self) -> String {
        self.id
            .map_or_else(|| NOT_AVAILABLE.to_string(), |id| id.to_string())
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Domain ID: {}, Domain Name: {}, Description: {}",
            self.display_id(),
            self.display_name(),
            self.display_description()
        )
    }
}

fn non_empty_or_na(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => NOT_AVAILABLE,
    }
}
