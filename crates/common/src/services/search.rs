use anyhow::Result;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::{
    models::SearchPage,
    network::{NetworkClient, Transport},
};

use super::{DEFAULT_PAGE_SIZE, Outcome, SEARCH_STATUS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub keyword: String,
    pub max_results: u32,
    pub page: u32,
}

impl SearchParams {
    pub fn new(keyword: impl Into<String>, max_results: u32, page: u32) -> Self {
        Self {
            keyword: keyword.into(),
            max_results,
            page,
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        Self::new("", DEFAULT_PAGE_SIZE, 1)
    }
}

impl<T: Transport> NetworkClient<T> {
    /// `GET {resource}/search/{keyword}?maxResults={n}&page={p}`
    pub(crate) async fn search<R: DeserializeOwned>(
        &self,
        resource: &str,
        params: &SearchParams,
    ) -> Result<Outcome<SearchPage<R>>> {
        let mut url = self.endpoint(&[resource, "search", &params.keyword])?;
        url.query_pairs_mut()
            .append_pair("maxResults", &params.max_results.to_string())
            .append_pair("page", &params.page.to_string());

        let resp = self.get(url).await?;
        let outcome = SEARCH_STATUS.outcome(resp)?;
        if !outcome.is_success() {
            warn!("{} search returned {:?}", resource, outcome.kind());
        }
        Ok(outcome)
    }
}
