use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::ContractSearchRequest;
use crate::routes::matches::{error_response, validation_failed};
use crate::services::contracts;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/contracts/search", web::get().to(search))
        .route("/contracts/portals", web::get().to(portals));
}

/// Contract opportunity search
///
/// GET /api/v1/contracts/search?product_desc=...&location=...&state=...&top_k=10
async fn search(query: web::Query<ContractSearchRequest>) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for contract search: {:?}", errors);
        return validation_failed(errors);
    }

    match contracts::search_contracts(
        &query.product_desc,
        query.location.as_deref(),
        query.state.as_deref(),
        query.top_k,
    ) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => error_response(&e),
    }
}

async fn portals() -> impl Responder {
    HttpResponse::Ok().json(contracts::list_portals())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_search_endpoint() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/contracts/search?product_desc=leather%20footwear&location=Agra&top_k=2")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["results"].as_array().map(Vec::len), Some(2));
        assert_eq!(body["results"][0]["id"], "gem-001");
        assert_eq!(body["curated_count"], 11);
        assert_eq!(body["query"]["location"], "Agra");
    }

    #[actix_web::test]
    async fn test_search_defaults_to_ten_results() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get()
            .uri("/contracts/search?product_desc=textiles")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["results"].as_array().map(Vec::len), Some(10));
    }

    #[actix_web::test]
    async fn test_search_rejects_out_of_range_top_k() {
        let app = test::init_service(App::new().configure(configure)).await;

        for uri in [
            "/contracts/search?product_desc=textiles&top_k=21",
            "/contracts/search?product_desc=textiles&top_k=0",
            "/contracts/search?product_desc=",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_portals_endpoint() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::get().uri("/contracts/portals").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 11);
        assert_eq!(body["portals"][10]["name"], "TReDS");
    }
}
