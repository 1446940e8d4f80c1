// Core algorithm exports
pub mod classifier;
pub mod error;
pub mod matcher;
pub mod query;
pub mod scoring;
pub mod similarity;
pub mod text;

pub use classifier::KeywordClassifier;
pub use error::MatchError;
pub use matcher::{PartnerMatcher, MatchOutcome};
pub use query::{build_query_text, CapacityTier};
pub use scoring::round4;
pub use similarity::{cosine, TextSimilarityModel, TfIdf};
