use crate::core::{error::Result, KeywordClassifier, PartnerMatcher, TextSimilarityModel};
use crate::models::{OnboardRequest, OnboardingAssessment};

/// Classify an enterprise's product and pick its single best partner.
///
/// Persisting `{partner_id, final_score}` is left to the caller.
pub fn assess<M: TextSimilarityModel>(
    matcher: &PartnerMatcher<M>,
    classifier: &KeywordClassifier,
    request: &OnboardRequest,
) -> Result<OnboardingAssessment> {
    let classification = classifier.classify(&request.product_description)?;

    let location = format!("{}, {}", request.location, request.state);
    let best = matcher
        .find_best_partners(
            &request.product_description,
            Some(&location),
            request.annual_capacity,
            1,
        )?
        .into_iter()
        .next();

    match &best {
        Some(m) => tracing::info!(
            "Onboarding {}: {} -> partner {} (score {})",
            request.business_name,
            classification.category,
            m.partner_id,
            m.final_score
        ),
        None => tracing::warn!("Onboarding {}: no partners available", request.business_name),
    }

    Ok(OnboardingAssessment {
        business_name: request.business_name.clone(),
        match_score: best.as_ref().map(|m| m.final_score),
        matched_snp: best,
        classification,
    })
}
