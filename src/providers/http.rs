use anyhow::Result;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::QueryError;

/// Thin JSON GET client shared by every provider.
#[derive(Debug, Clone)]
pub struct JsonClient {
    client: reqwest::Client,
}

impl JsonClient {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Issues one GET bounded by `timeout`. Non-2xx statuses are failures.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<T, QueryError> {
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}
