// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PartnerRecord, MatchQuery, MatchResult, Classification};
pub use requests::{MatchPartnersRequest, ClassifyRequest, ContractSearchRequest, OnboardRequest};
pub use responses::{MatchPartnersResponse, OnboardingAssessment, HealthResponse, ErrorResponse};
