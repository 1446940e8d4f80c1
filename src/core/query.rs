use serde::{Deserialize, Serialize};

/// Production scale bucket folded into the query text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityTier {
    SmallBatch,
    MediumSupply,
    LargeWholesale,
}

impl CapacityTier {
    pub fn from_hint(capacity: u32) -> Self {
        if capacity > 500 {
            CapacityTier::LargeWholesale
        } else if capacity > 100 {
            CapacityTier::MediumSupply
        } else {
            CapacityTier::SmallBatch
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CapacityTier::SmallBatch => "small batch",
            CapacityTier::MediumSupply => "medium supply",
            CapacityTier::LargeWholesale => "large wholesale",
        }
    }
}

/// Build the text projected into the catalog feature space.
///
/// Description first, then the location verbatim, then the capacity tier
/// label. Case and punctuation are left to the text model.
pub fn build_query_text(
    product_description: &str,
    location: Option<&str>,
    capacity_hint: Option<u32>,
) -> String {
    let mut parts = vec![product_description.to_string()];

    if let Some(loc) = location.filter(|l| !l.trim().is_empty()) {
        parts.push(loc.to_string());
    }

    if let Some(capacity) = capacity_hint {
        parts.push(CapacityTier::from_hint(capacity).label().to_string());
    }

    parts.join(" ")
}
