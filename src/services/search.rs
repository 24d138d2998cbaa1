//! Services running one deal search end to end.

use chrono::Utc;

use crate::domain::deal::Deal;
use crate::domain::search::{SearchParams, SearchState};
use crate::links::assign_links;
use crate::parser::parse_deals;
use crate::prompt::build_prompt;
use crate::search_client::DealSearcher;
use crate::services::{ServiceError, ServiceResult};

/// Builds the prompt, performs the single outbound call and decodes the answer.
pub async fn search_deals<S>(searcher: &S, params: &SearchParams) -> ServiceResult<Vec<Deal>>
where
    S: DealSearcher + ?Sized,
{
    let prompt = build_prompt(params);

    let answer = searcher.search(&prompt).await.map_err(|err| {
        log::error!(
            "Failed to search deals for {:?} in {}: {err}",
            params.query.as_str(),
            params.city
        );
        ServiceError::from(err)
    })?;

    let parsed = parse_deals(&answer.text, params.city.as_str());
    let deals = assign_links(parsed, &answer.links, params.city.as_str(), Utc::now());

    log::info!(
        "Found {} deals for {:?} in {} ({} grounding links)",
        deals.len(),
        params.query.as_str(),
        params.city,
        answer.links.len()
    );

    Ok(deals)
}

/// Moves `state` through dispatch to its resolved snapshot.
///
/// Failures never escape: they become the `error` field of the returned state.
pub async fn run_search<S>(searcher: &S, state: SearchState, params: &SearchParams) -> SearchState
where
    S: DealSearcher + ?Sized,
{
    let pending = state.dispatched();

    match search_deals(searcher, params).await {
        Ok(deals) => pending.completed(deals),
        Err(err) => pending.failed(err.to_string()),
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::search::SearchView;
    use crate::domain::types::Platform;
    use crate::search_client::GroundedAnswer;
    use crate::search_client::errors::SearchClientError;
    use crate::search_client::mock::MockSearcher;
    use crate::services::SEARCH_FAILED_MESSAGE;

    fn params() -> SearchParams {
        SearchParams::new("Москва", "суши", Platform::Instagram).expect("valid params")
    }

    /// Ensures exactly one call is made with the built prompt.
    #[actix_web::test]
    async fn search_sends_prompt_once() {
        let mut searcher = MockSearcher::new();
        searcher
            .expect_search()
            .withf(|prompt: &str| {
                prompt.contains("\"суши\"") && prompt.contains("Instagram mentions")
            })
            .times(1)
            .returning(|_| Ok(GroundedAnswer::default()));

        let deals = search_deals(&searcher, &params())
            .await
            .expect("search should succeed");

        assert!(deals.is_empty());
    }

    /// Checks that grounding links are spread over the parsed deals.
    #[actix_web::test]
    async fn search_assigns_grounding_links() {
        let mut searcher = MockSearcher::new();
        searcher.expect_search().times(1).returning(|_| {
            Ok(GroundedAnswer {
                text: "Sushi|||a|||b|||c%%%ITEM%%%Pizza|||a|||b|||c%%%ITEM%%%Cafe".to_string(),
                links: vec!["https://one.example".to_string(), "https://two.example".to_string()],
            })
        });

        let deals = search_deals(&searcher, &params())
            .await
            .expect("search should succeed");

        let urls: Vec<_> = deals.iter().map(|d| d.source_url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://one.example", "https://two.example", "https://one.example"]
        );
    }

    /// Verifies the failure scenario leaves a consistent error state.
    #[actix_web::test]
    async fn transport_failure_becomes_error_state() {
        let mut searcher = MockSearcher::new();
        searcher
            .expect_search()
            .times(1)
            .returning(|_| Err(SearchClientError::Transport("connection reset".to_string())));

        let state = run_search(&searcher, SearchState::default(), &params()).await;

        assert_eq!(state.error.as_deref(), Some(SEARCH_FAILED_MESSAGE));
        assert!(state.results.is_empty());
        assert!(!state.is_loading);
        assert!(state.has_searched);
        assert_eq!(state.view(), SearchView::Failed);
    }

    /// Confirms an empty answer is reported as "no results", not as a failure.
    #[actix_web::test]
    async fn empty_answer_becomes_empty_state() {
        let mut searcher = MockSearcher::new();
        searcher.expect_search().times(1).returning(|_| {
            Ok(GroundedAnswer {
                text: "   ".to_string(),
                links: vec!["https://one.example".to_string()],
            })
        });

        let state = run_search(&searcher, SearchState::default(), &params()).await;

        assert_eq!(state.view(), SearchView::Empty);
        assert!(state.error.is_none());
    }
}
