use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key identifying a OneBusAway region deployment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RegionIdentifier(pub i64);

impl fmt::Display for RegionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RegionIdentifier {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A transit region with its own data feed and local cache namespace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub id: RegionIdentifier,
    pub name: String,
    pub oba_base_url: String,
}

impl Region {
    pub fn new(id: impl Into<RegionIdentifier>, name: &str, oba_base_url: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            oba_base_url: oba_base_url.to_string(),
        }
    }

    pub fn region_identifier(&self) -> RegionIdentifier {
        self.id
    }
}
