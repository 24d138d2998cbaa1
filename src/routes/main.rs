use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::{Context, Tera};

use crate::domain::types::Platform;
use crate::dto::main::{IndexPageData, POPULAR_CATEGORIES, PlatformOption};
use crate::forms::search::SearchForm;
use crate::routes::{base_context, redirect, render_template};
use crate::search_client::DealSearcher;
use crate::services::{ServiceError, main as main_service};

fn index_context(flash_messages: &IncomingFlashMessages, data: &IndexPageData) -> Context {
    let platforms = Platform::ALL
        .into_iter()
        .map(PlatformOption::from)
        .collect::<Vec<_>>();

    let mut context = base_context(flash_messages, "index");
    context.insert("form", &data.form);
    context.insert("platforms", &platforms);
    context.insert("categories", &POPULAR_CATEGORIES);
    context.insert("view", &data.state.view());
    context.insert("has_searched", &data.state.has_searched);
    context.insert("error", &data.state.error);
    context.insert("cards", &data.cards());
    context
}

#[get("/")]
/// Landing page with the search form and popular categories.
pub async fn show_index(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = main_service::load_index_page();
    let context = index_context(&flash_messages, &data);

    render_template(&tera, "main/index.html", &context)
}

#[get("/search")]
/// Run a search and render its results, the empty state or the error.
pub async fn show_search(
    params: web::Query<SearchForm>,
    searcher: web::Data<dyn DealSearcher>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match main_service::load_search_page(searcher.get_ref(), params.into_inner()).await {
        Ok(data) => {
            let context = index_context(&flash_messages, &data);
            render_template(&tera, "main/index.html", &context)
        }
        Err(ServiceError::Form(_)) => {
            FlashMessage::error("Укажите город и что искать.").send();
            redirect("/")
        }
        Err(err) => {
            log::error!("Failed to load search page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
