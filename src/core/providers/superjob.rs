use crate::core::providers::{id_string, reconcile_bound, require_str};
use crate::domain::model::Vacancy;
use crate::domain::ports::ProviderClient;
use crate::utils::error::{AggError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api.superjob.ru";

const PAGE_SIZE: u32 = 50;
const REFERENCE_CURRENCY: &str = "rub";

/// Client for the Superjob vacancy-search API (`GET /2.0/vacancies`).
/// Requests carry the application key in the `X-Api-App-Id` header.
pub struct SuperjobClient {
    client: Client,
    base_url: String,
    api_key: String,
    keyword: String,
    page: u32,
    raw: Vec<Value>,
}

impl SuperjobClient {
    pub fn new(
        keyword: impl Into<String>,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            keyword: keyword.into(),
            page: 0,
            raw: Vec::new(),
        }
    }

    fn normalize_record(&self, item: &Value) -> Result<Vacancy> {
        let id = item
            .get("id")
            .and_then(id_string)
            .ok_or_else(|| AggError::response_format("Superjob record is missing field \"id\""))?;
        let title = require_str(item, "profession", "Superjob")?;
        let url = require_str(item, "link", "Superjob")?;
        let employer = require_str(item, "firm_name", "Superjob")?;

        // Superjob reports salary bounds flat on the record, one currency
        // for both bounds.
        let in_rubles = item
            .get("currency")
            .and_then(Value::as_str)
            .map(|c| c.eq_ignore_ascii_case(REFERENCE_CURRENCY))
            .unwrap_or(true);
        let salary_from = reconcile_bound(item.get("payment_from").and_then(Value::as_u64), in_rubles);
        let salary_to = reconcile_bound(item.get("payment_to").and_then(Value::as_u64), in_rubles);

        Ok(Vacancy {
            id,
            title,
            url,
            salary_from,
            salary_to,
            employer,
            source: self.label().to_string(),
        })
    }
}

#[async_trait]
impl ProviderClient for SuperjobClient {
    fn label(&self) -> &'static str {
        "Superjob"
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn advance(&mut self) {
        self.page += 1;
    }

    async fn fetch_page(&self) -> Result<Vec<Value>> {
        let url = format!("{}/2.0/vacancies", self.base_url);
        tracing::debug!("GET {} keyword={:?} page={}", url, self.keyword, self.page);

        let response = self
            .client
            .get(&url)
            .header("X-Api-App-Id", &self.api_key)
            .query(&[("keyword", self.keyword.as_str())])
            .query(&[("page", self.page), ("count", PAGE_SIZE)])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        match body.get("objects").and_then(Value::as_array) {
            Some(items) => Ok(items.clone()),
            None => Err(AggError::response_format(
                "Superjob response has no \"objects\" array",
            )),
        }
    }

    fn buffer(&mut self, items: Vec<Value>) {
        self.raw.extend(items);
    }

    fn raw_count(&self) -> usize {
        self.raw.len()
    }

    fn normalize(&self) -> Result<Vec<Vacancy>> {
        self.raw
            .iter()
            .map(|item| self.normalize_record(item))
            .collect()
    }
}
