//! SNP Match - partner matching for MSE onboarding
//!
//! Ranks logistics/service partners (SNPs) against a free-text product
//! description using TF-IDF cosine similarity weighted by each partner's
//! operational capacity, classifies products into the commerce taxonomy,
//! and ranks curated contract opportunities for a product.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{PartnerMatcher, MatchOutcome, MatchError, KeywordClassifier, build_query_text, CapacityTier};
pub use crate::models::{PartnerRecord, MatchQuery, MatchResult, Classification};
pub use crate::services::{CatalogSource, JsonFileCatalog, StaticCatalog};
