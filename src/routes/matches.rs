use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{KeywordClassifier, MatchError, PartnerMatcher};
use crate::models::{
    ClassifyRequest, ErrorResponse, HealthResponse, MatchPartnersRequest, MatchPartnersResponse,
    OnboardRequest,
};
use crate::services::onboarding;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Arc<PartnerMatcher>,
    pub classifier: KeywordClassifier,
    pub default_top_k: usize,
    pub max_top_k: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match/snp", web::get().to(match_partners))
        .route("/classify", web::post().to(classify))
        .route("/onboard/assess", web::post().to(onboard_assess));
}

pub(crate) fn error_response(err: &MatchError) -> HttpResponse {
    match err {
        MatchError::InvalidQuery(msg) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid query".to_string(),
            message: msg.clone(),
            status_code: 400,
        }),
        other => {
            tracing::error!("Matching failed: {}", other);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Matching unavailable".to_string(),
                message: other.to_string(),
                status_code: 500,
            })
        }
    }
}

pub(crate) fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let (status, total_partners) = match state.matcher.total_partner_count() {
        Ok(count) => ("healthy", count),
        Err(e) => {
            tracing::warn!("Catalog unavailable during health check: {}", e);
            ("degraded", 0)
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        total_partners,
        timestamp: chrono::Utc::now(),
    })
}

/// Match partners endpoint
///
/// GET /api/v1/match/snp?product_desc=...&location=...&capacity=...&top_k=3
///
/// `top_k` defaults to `matching.default_top_k` and is clamped to `matching.max_top_k`.
async fn match_partners(
    state: web::Data<AppState>,
    query: web::Query<MatchPartnersRequest>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return validation_failed(errors);
    }

    let top_k = query.top_k.unwrap_or(state.default_top_k).min(state.max_top_k);

    let matches = match state.matcher.find_best_partners(
        &query.product_desc,
        query.location.as_deref(),
        query.capacity,
        top_k,
    ) {
        Ok(matches) => matches,
        Err(e) => return error_response(&e),
    };

    let total = match state.matcher.total_partner_count() {
        Ok(total) => total,
        Err(e) => return error_response(&e),
    };

    tracing::info!("Returning {} matches (from {} partners)", matches.len(), total);

    HttpResponse::Ok().json(MatchPartnersResponse {
        query: query.product_desc.clone(),
        matches,
        total_snps_evaluated: total,
    })
}

/// Classify endpoint
///
/// POST /api/v1/classify
///
/// Request body:
/// ```json
/// { "description": "Handmade silk saree from Varanasi" }
/// ```
async fn classify(
    state: web::Data<AppState>,
    req: web::Json<ClassifyRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.classifier.classify(&req.description) {
        Ok(classification) => HttpResponse::Ok().json(classification),
        Err(e) => error_response(&e),
    }
}

/// Onboarding assessment endpoint
///
/// POST /api/v1/onboard/assess
async fn onboard_assess(
    state: web::Data<AppState>,
    req: web::Json<OnboardRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match onboarding::assess(state.matcher.as_ref(), &state.classifier, &req) {
        Ok(assessment) => HttpResponse::Ok().json(assessment),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartnerRecord;
    use crate::services::StaticCatalog;
    use actix_web::{test, App};

    fn state() -> AppState {
        let partners = vec![
            PartnerRecord {
                id: "A".to_string(),
                name: "Agra Footwear".to_string(),
                domain: "leather sandals manufacturer".to_string(),
                sectors: vec!["footwear".to_string()],
                regions: vec!["Agra".to_string()],
                operational_capacity: 10.0,
                contact: None,
                external_id: None,
            },
            PartnerRecord {
                id: "B".to_string(),
                name: "Kerala Spice".to_string(),
                domain: "organic spice trading".to_string(),
                sectors: vec!["food".to_string()],
                regions: vec!["Kerala".to_string()],
                operational_capacity: 100.0,
                contact: None,
                external_id: None,
            },
        ];
        AppState {
            matcher: Arc::new(PartnerMatcher::new(StaticCatalog(partners))),
            classifier: KeywordClassifier::default(),
            default_top_k: 1,
            max_top_k: 8,
        }
    }

    #[actix_web::test]
    async fn test_match_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/match/snp?product_desc=leather%20chappal%20sandals&location=Agra&top_k=2")
            .to_request();
        let resp: MatchPartnersResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.total_snps_evaluated, 2);
        assert_eq!(resp.matches.len(), 2);
        assert_eq!(resp.matches[0].partner_id, "A");
    }

    #[actix_web::test]
    async fn test_match_endpoint_rejects_blank_and_out_of_range() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/match/snp?product_desc=%20%20").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::get().uri("/match/snp?product_desc=spice&top_k=9").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::get().uri("/match/snp?product_desc=spice&capacity=0").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_match_endpoint_uses_configured_default_top_k() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/match/snp?product_desc=organic%20spice")
            .to_request();
        let resp: MatchPartnersResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.matches.len(), 1);
        assert_eq!(resp.matches[0].partner_id, "B");
        assert_eq!(resp.total_snps_evaluated, 2);
    }

    #[actix_web::test]
    async fn test_health_reports_partner_count() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.total_partners, 2);
    }
}
