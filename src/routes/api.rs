use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

use crate::forms::search::SearchForm;
use crate::search_client::DealSearcher;
use crate::services::{ServiceError, main as main_service};

#[get("/v1/deals")]
/// Run a search and return the resulting state as JSON.
pub async fn api_v1_deals(
    params: web::Query<SearchForm>,
    searcher: web::Data<dyn DealSearcher>,
) -> impl Responder {
    match main_service::search_state(searcher.get_ref(), params.into_inner()).await {
        Ok(state) if state.error.is_some() => HttpResponse::BadGateway().json(state),
        Ok(state) => HttpResponse::Ok().json(state),
        Err(ServiceError::Form(message)) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        Err(err) => {
            log::error!("Failed to search deals: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
