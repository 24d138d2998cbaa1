use crate::domain::search::{SearchParams, SearchState};
use crate::dto::main::{FormValues, IndexPageData};
use crate::forms::search::SearchForm;
use crate::search_client::DealSearcher;
use crate::services::search::run_search;
use crate::services::{ServiceError, ServiceResult};

/// Landing page before any search has been made.
pub fn load_index_page() -> IndexPageData {
    IndexPageData {
        form: FormValues::default(),
        state: SearchState::default(),
    }
}

/// Validates the submitted form and runs the search for the results page.
///
/// A failed search is not an error here: it is rendered from the returned
/// state. Only invalid input yields `Err`.
pub async fn load_search_page<S>(searcher: &S, form: SearchForm) -> ServiceResult<IndexPageData>
where
    S: DealSearcher + ?Sized,
{
    let values = FormValues::from(&form);

    let params = SearchParams::try_from(form).map_err(|err| {
        log::warn!("Rejected search form: {err}");
        ServiceError::from(err)
    })?;

    let state = run_search(searcher, SearchState::default(), &params).await;

    Ok(IndexPageData {
        form: values,
        state,
    })
}

/// Runs the search for the JSON API.
pub async fn search_state<S>(searcher: &S, form: SearchForm) -> ServiceResult<SearchState>
where
    S: DealSearcher + ?Sized,
{
    let params = SearchParams::try_from(form).map_err(|err| {
        log::warn!("Rejected search request: {err}");
        ServiceError::from(err)
    })?;

    Ok(run_search(searcher, SearchState::default(), &params).await)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::search::SearchView;
    use crate::search_client::GroundedAnswer;
    use crate::search_client::mock::MockSearcher;

    fn form(query: &str) -> SearchForm {
        SearchForm {
            city: "Москва".to_string(),
            query: query.to_string(),
            platform: Some("vk".to_string()),
        }
    }

    /// Ensures invalid input never reaches the search client.
    #[actix_web::test]
    async fn invalid_form_skips_search() {
        let mut searcher = MockSearcher::new();
        searcher.expect_search().times(0);

        let result = load_search_page(&searcher, form("  ")).await;

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    /// Checks that the form is echoed and results are rendered.
    #[actix_web::test]
    async fn search_page_echoes_form_and_results() {
        let mut searcher = MockSearcher::new();
        searcher.expect_search().times(1).returning(|_| {
            Ok(GroundedAnswer {
                text: "Pizza|||2+1|||Roma|||VK".to_string(),
                links: Vec::new(),
            })
        });

        let data = load_search_page(&searcher, form("пицца"))
            .await
            .expect("page should load");

        assert_eq!(data.form.query, "пицца");
        assert_eq!(data.form.platform, "vk");
        assert_eq!(data.state.view(), SearchView::Results);
        assert_eq!(data.cards()[0].category, "food");
    }

    #[test]
    fn index_page_starts_idle() {
        let data = load_index_page();
        assert_eq!(data.state.view(), SearchView::Idle);
        assert_eq!(data.form.city, "Москва");
    }
}
