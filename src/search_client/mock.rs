//! Mock search client for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::search_client::errors::SearchClientResult;
use crate::search_client::{DealSearcher, GroundedAnswer};

mock! {
    pub Searcher {}

    #[async_trait]
    impl DealSearcher for Searcher {
        async fn search(&self, prompt: &str) -> SearchClientResult<GroundedAnswer>;
    }
}
