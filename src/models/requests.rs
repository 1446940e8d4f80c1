use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query string for the partner match endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchPartnersRequest {
    #[validate(length(min = 1))]
    pub product_desc: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub capacity: Option<u32>,
    /// Falls back to `matching.default_top_k` when absent
    #[serde(default)]
    #[validate(range(min = 1, max = 8))]
    pub top_k: Option<usize>,
}

/// Query string for the contract opportunity search
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContractSearchRequest {
    #[validate(length(min = 1))]
    pub product_desc: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default = "default_contract_top_k")]
    #[validate(range(min = 1, max = 20))]
    pub top_k: usize,
}

fn default_contract_top_k() -> usize {
    10
}

/// Request to classify a product description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ClassifyRequest {
    #[validate(length(min = 1))]
    pub description: String,
}

/// Onboarding details needed to classify and match an enterprise
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OnboardRequest {
    #[validate(length(min = 1))]
    pub business_name: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub state: String,
    #[validate(length(min = 1))]
    pub product_description: String,
    #[serde(default)]
    #[validate(range(min = 1))]
    pub annual_capacity: Option<u32>,
}
