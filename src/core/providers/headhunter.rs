use crate::core::providers::{id_string, reconcile_bound, require_str};
use crate::domain::model::Vacancy;
use crate::domain::ports::ProviderClient;
use crate::utils::error::{AggError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api.hh.ru";

const PAGE_SIZE: u32 = 50;
const USER_AGENT: &str =
    "Mozilla/5.0 (platform; rv:geckoversion) Gecko/geckotrail Firefox/firefoxversion";
const REFERENCE_CURRENCY: &str = "RUR";

/// Client for the HeadHunter vacancy-search API (`GET /vacancies`).
pub struct HeadHunterClient {
    client: Client,
    base_url: String,
    keyword: String,
    page: u32,
    raw: Vec<Value>,
}

impl HeadHunterClient {
    pub fn new(keyword: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            keyword: keyword.into(),
            page: 0,
            raw: Vec::new(),
        }
    }

    fn normalize_record(&self, item: &Value) -> Result<Vacancy> {
        let id = item
            .get("id")
            .and_then(id_string)
            .ok_or_else(|| AggError::response_format("HeadHunter record is missing field \"id\""))?;
        let title = require_str(item, "name", "HeadHunter")?;
        let url = require_str(item, "alternate_url", "HeadHunter")?;
        let employer = item
            .get("employer")
            .and_then(|e| e.get("name"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                AggError::response_format("HeadHunter record is missing field \"employer.name\"")
            })?;

        let (salary_from, salary_to) = match item.get("salary") {
            Some(salary) if !salary.is_null() => {
                let in_rubles = salary
                    .get("currency")
                    .and_then(Value::as_str)
                    .map(|c| c.eq_ignore_ascii_case(REFERENCE_CURRENCY))
                    .unwrap_or(true);
                (
                    reconcile_bound(salary.get("from").and_then(Value::as_u64), in_rubles),
                    reconcile_bound(salary.get("to").and_then(Value::as_u64), in_rubles),
                )
            }
            _ => (None, None),
        };

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
impl ProviderClient for HeadHunterClient {
    fn label(&self) -> &'static str {
        "HeadHunter"
    }

    fn page(&self) -> u32 {
        self.page
    }

    fn advance(&mut self) {
        self.page += 1;
    }

    async fn fetch_page(&self) -> Result<Vec<Value>> {
        let url = format!("{}/vacancies", self.base_url);
        tracing::debug!("GET {} text={:?} page={}", url, self.keyword, self.page);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .query(&[("text", self.keyword.as_str())])
            .query(&[("page", self.page), ("per_page", PAGE_SIZE)])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        match body.get("items").and_then(Value::as_array) {
            Some(items) => Ok(items.clone()),
            None => Err(AggError::response_format(
                "HeadHunter response has no \"items\" array",
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
