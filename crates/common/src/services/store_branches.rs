use anyhow::Result;
use tracing::{info, warn};

use crate::{
    models::{NewStoreBranch, SearchPage, StoreBranch},
    network::{NetworkClient, Transport},
};

use super::{CREATE_STATUS, Outcome, SearchParams};

impl<T: Transport> NetworkClient<T> {
    pub async fn search_store_branches(
        &self,
        params: &SearchParams,
    ) -> Result<Outcome<SearchPage<StoreBranch>>> {
        self.search("storebranches", params).await
    }

    pub async fn register_store_branch(
        &self,
        branch: &NewStoreBranch,
    ) -> Result<Outcome<Option<StoreBranch>>> {
        let url = self.endpoint(&["storebranches"])?;
        let resp = self
            .post(url, serde_json::to_value(branch)?, self.token())
            .await?;
        // The branch exists once the server answers 201, whatever the body.
        let outcome: Outcome<Option<StoreBranch>> = CREATE_STATUS.outcome_lenient(resp);
        match &outcome {
            Outcome::Success(Some(created)) => info!("Registered store branch {}", created.id),
            Outcome::Success(None) => info!("Registered store branch {}", branch.name),
            other => warn!("Store branch registration returned {:?}", other.kind()),
        }
        Ok(outcome)
    }
}
