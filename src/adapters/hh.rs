use crate::domain::model::{AreaNode, FetchOutcome};
use crate::domain::ports::VacancyApi;
use crate::utils::error::{HarvestError, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

const USER_AGENT: &str = concat!("hh-harvest/", env!("CARGO_PKG_VERSION"));

/// Envelope of one search-results page. Items stay raw JSON; the harvester
/// deserializes them one by one so a broken record cannot sink the page.
#[derive(Debug, Deserialize)]
struct SearchPage {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

/// reqwest-backed client for the hh.ru public API. The base URL is
/// configurable so tests can point it at a mock server.
#[derive(Debug, Clone)]
pub struct HhClient {
    base_url: String,
    client: Client,
}

impl HhClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl VacancyApi for HhClient {
    async fn search(
        &self,
        query: &str,
        area: &str,
        page: u32,
        per_page: u32,
    ) -> Result<FetchOutcome> {
        let url = format!("{}/vacancies", self.base_url);
        tracing::debug!("GET {} text={} area={} page={}", url, query, area, page);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[
                ("text", query),
                ("area", area),
                ("per_page", &per_page.to_string()),
                ("page", &page.to_string()),
            ])
            .send()
            .await?;

        // The API speaks in status codes: 400 means the page window for this
        // query is exhausted, 403 that the region may not be searched.
        match response.status() {
            StatusCode::BAD_REQUEST => Ok(FetchOutcome::PageLimitReached),
            StatusCode::FORBIDDEN => Ok(FetchOutcome::AccessDenied),
            status if status.is_success() => {
                let page: SearchPage = response.json().await?;
                Ok(FetchOutcome::Page(page.items))
            }
            status => Err(match response.error_for_status() {
                Err(e) => e.into(),
                Ok(_) => HarvestError::UnexpectedStatus(status),
            }),
        }
    }

    async fn area_tree(&self, root_id: &str) -> Result<AreaNode> {
        let url = format!("{}/areas/{}", self.base_url, root_id);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?
            .error_for_status()?;

        let tree = response.json().await?;
        Ok(tree)
    }
}
